pub mod coefficients;
pub mod error;
pub mod profile;
pub mod types;

pub use coefficients::*;
pub use error::*;
pub use profile::*;
pub use types::*;
