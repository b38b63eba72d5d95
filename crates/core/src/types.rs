/// Credentials for one sign-up attempt. On success the caller gets back the
/// exact triple that was submitted in the winning exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub password: String,
    pub email: String,
}
