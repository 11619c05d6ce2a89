use thiserror::Error;

#[derive(Error, Debug)]
pub enum SafetyNetError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication required")]
    Unauthorized,

    #[error("Admin access required")]
    Forbidden,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, max {0} attempts per hour")]
    RateLimited(usize),

    #[error("Intake error: {0}")]
    Intake(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl SafetyNetError {
    pub fn validation(msg: impl Into<String>) -> Self {
        SafetyNetError::Validation(msg.into())
    }
}
