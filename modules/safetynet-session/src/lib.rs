pub mod authenticator;
pub mod gate;
pub mod identity_store;

pub use authenticator::{constant_time_eq, Authenticator, StaticCredentialAuthenticator};
pub use gate::{Access, SessionContext, DASHBOARD_PATH, LOGIN_PATH};
pub use identity_store::{IdentityStore, MemoryIdentityStore};
