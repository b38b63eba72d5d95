use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("invalid password: {0}")]
    InvalidPassword(String),

    #[error("invalid username: {0}")]
    InvalidName(String),

    #[error("invalid email: {0}")]
    InvalidEmail(String),

    #[error("unexpected status code {0}")]
    UnexpectedStatus(u16),

    #[error("csrf cookie missing from session")]
    MissingCsrf,

    #[error("gave up after {0} attempts")]
    RetriesExhausted(u32),

    #[error("network error: {0}")]
    Network(String),

    #[error("registration failed: {0}")]
    Failed(String),
}
