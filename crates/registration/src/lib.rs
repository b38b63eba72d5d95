pub mod creator;
pub mod identity;
pub mod outcome;
pub mod session;
pub mod workflow;

// Re-exports for convenience
pub use creator::{create_account, CreateRequest};
pub use outcome::Outcome;
pub use workflow::{PtcSignUp, SignUpFlow};
