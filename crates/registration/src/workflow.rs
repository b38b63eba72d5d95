use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, REFERER};
use reqwest::StatusCode;
use tracing::info;
use url::Url;

use ptcgen_core::config::{EndpointsConfig, HttpConfig};
use ptcgen_core::{Account, RegistrationError};

use crate::outcome::{classify, Outcome};
use crate::session::SessionClient;

const CSRF_COOKIE: &str = "csrftoken";
const DOB: &str = "1970-01-01";
const COUNTRY: &str = "US";

/// One full sign-up attempt against the target service. Behind a trait so
/// the retry loop can be driven without the network.
#[async_trait]
pub trait SignUpFlow {
    async fn submit(&self, account: &Account) -> Result<Outcome, RegistrationError>;
}

/// The real three-exchange flow: age-gate fetch, date-of-birth/country
/// submission, account-details submission. Each step expects a 200 after
/// redirects; a mismatch aborts the sequence without attempting later steps.
pub struct PtcSignUp {
    http: HttpConfig,
    endpoints: EndpointsConfig,
}

impl PtcSignUp {
    pub fn new(http: HttpConfig, endpoints: EndpointsConfig) -> Self {
        Self { http, endpoints }
    }

    fn csrf_token(&self, session: &SessionClient, url: &Url) -> Result<String, RegistrationError> {
        session
            .cookie(url, CSRF_COOKIE)
            .ok_or(RegistrationError::MissingCsrf)
    }
}

fn form_headers(referer: &str) -> Result<HeaderMap, RegistrationError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/x-www-form-urlencoded"),
    );
    headers.insert(
        REFERER,
        HeaderValue::from_str(referer).map_err(|e| RegistrationError::Failed(e.to_string()))?,
    );
    Ok(headers)
}

#[async_trait]
impl SignUpFlow for PtcSignUp {
    async fn submit(&self, account: &Account) -> Result<Outcome, RegistrationError> {
        // Fresh jar per attempt; the csrf token never crosses attempts.
        let session = SessionClient::new(&self.http)?;

        let age_gate_url = self.endpoints.age_gate_url();
        let age_check_url = self.endpoints.age_check_url();
        let site = Url::parse(&age_gate_url)
            .map_err(|e| RegistrationError::Failed(format!("bad base_url: {e}")))?;

        // Step 1: age-gate fetch establishes the csrftoken cookie.
        session
            .send(&age_gate_url, HeaderMap::new(), None, Some(StatusCode::OK))
            .await?;

        // The token rotates per exchange, so it is read fresh from the jar
        // right before each POST.

        // Step 2: date of birth and country.
        let token = self.csrf_token(&session, &site)?;
        session
            .send(
                &age_check_url,
                form_headers(&age_check_url)?,
                Some(&[
                    ("csrfmiddlewaretoken", token.as_str()),
                    ("dob", DOB),
                    ("country", COUNTRY),
                ]),
                Some(StatusCode::OK),
            )
            .await?;

        // Step 3: account details, posted back to the age-gate page.
        let token = self.csrf_token(&session, &site)?;
        let response = session
            .send(
                &age_gate_url,
                form_headers(&age_gate_url)?,
                Some(&[
                    ("csrfmiddlewaretoken", token.as_str()),
                    ("username", account.username.as_str()),
                    ("password", account.password.as_str()),
                    ("confirm_password", account.password.as_str()),
                    ("email", account.email.as_str()),
                    ("confirm_email", account.email.as_str()),
                    ("public_profile_opt_in", "False"),
                    ("screen_name", ""),
                    ("terms", "on"),
                ]),
                Some(StatusCode::OK),
            )
            .await?;

        let outcome = classify(&self.endpoints, response.final_url.as_str(), &response.body);
        info!(
            username = %account.username,
            final_url = %response.final_url,
            ?outcome,
            "sign-up attempt classified"
        );
        Ok(outcome)
    }
}
