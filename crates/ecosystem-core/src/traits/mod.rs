mod signal_engine;

pub use signal_engine::ISignalEngine;
