mod ecosystem_error;

pub use ecosystem_error::{EcosystemError, EcosystemResult};
