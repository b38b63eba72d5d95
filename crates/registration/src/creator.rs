use rand::Rng;
use tracing::{info, warn};

use ptcgen_core::config::RetryConfig;
use ptcgen_core::{Account, RegistrationError};

use crate::identity::{random_email, random_string, tag_email, validate_password, CREDENTIAL_LEN};
use crate::outcome::Outcome;
use crate::workflow::SignUpFlow;

/// Caller-supplied inputs. A `None` field is filled by the generator and is
/// eligible for regeneration when the service rejects it; a supplied value is
/// fixed, and its rejection propagates instead of retrying.
#[derive(Debug, Default, Clone)]
pub struct CreateRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    /// Tag the email with the username (addr+username@mail.com).
    pub tag_email: bool,
}

/// Drive `flow` until an account is created or a non-recoverable failure
/// surfaces. Recoverable verdicts (taken name, rejected email) regenerate the
/// offending generated field and try again, up to `retry.max_attempts`.
pub async fn create_account<F, R>(
    flow: &F,
    retry: &RetryConfig,
    rng: &mut R,
    request: CreateRequest,
) -> Result<Account, RegistrationError>
where
    F: SignUpFlow + ?Sized,
    R: Rng,
{
    let fixed_username = request.username.is_some();
    let fixed_email = request.email.is_some();

    // Generated passwords are always CREDENTIAL_LEN and skip validation.
    let password = match request.password {
        Some(password) => {
            validate_password(&password)?;
            password
        }
        None => random_string(rng, CREDENTIAL_LEN),
    };
    let mut username = request
        .username
        .unwrap_or_else(|| random_string(rng, CREDENTIAL_LEN));
    // Kept untagged; the tag embeds the current username and is applied to
    // the base address once per iteration.
    let mut base_email = request.email.unwrap_or_else(|| random_email(rng));

    for attempt in 1..=retry.max_attempts {
        let email = if request.tag_email {
            tag_email(&base_email, &username)
        } else {
            base_email.clone()
        };
        let account = Account {
            username: username.clone(),
            password: password.clone(),
            email,
        };

        info!(attempt, username = %account.username, "submitting sign-up");
        match flow.submit(&account).await? {
            Outcome::Success => {
                info!(username = %account.username, "account created");
                return Ok(account);
            }
            Outcome::NameTaken if !fixed_username => {
                warn!(username = %account.username, "username taken, regenerating");
                username = random_string(rng, CREDENTIAL_LEN);
            }
            Outcome::NameTaken => {
                return Err(RegistrationError::InvalidName(format!(
                    "username {username} is already in use"
                )));
            }
            outcome @ (Outcome::EmailTaken | Outcome::EmailInvalidFormat) => {
                if !fixed_email {
                    warn!(email = %account.email, ?outcome, "email rejected, regenerating");
                    base_email = random_email(rng);
                } else if request.tag_email && !fixed_username {
                    // The tag embeds the username, so a fresh username yields
                    // a fresh tagged address even on a fixed base email.
                    warn!(email = %account.email, ?outcome, "tagged email rejected, regenerating username");
                    username = random_string(rng, CREDENTIAL_LEN);
                } else {
                    return Err(RegistrationError::InvalidEmail(match outcome {
                        Outcome::EmailTaken => {
                            format!("email {} is already in use", account.email)
                        }
                        _ => format!("email {} is not a valid address", account.email),
                    }));
                }
            }
            Outcome::GenericFailure => {
                return Err(RegistrationError::Failed(
                    "service did not redirect to any known destination".to_string(),
                ));
            }
        }
    }

    Err(RegistrationError::RetriesExhausted(retry.max_attempts))
}
