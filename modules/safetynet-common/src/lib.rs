pub mod config;
pub mod error;
pub mod intake;
pub mod safety;
pub mod types;

pub use config::Config;
pub use error::SafetyNetError;
pub use intake::*;
pub use safety::*;
pub use types::*;
