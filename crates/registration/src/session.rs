use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use ptcgen_core::config::HttpConfig;
use ptcgen_core::RegistrationError;

/// Final state of one exchange after all redirects were followed.
pub struct PageResponse {
    pub status: StatusCode,
    pub final_url: Url,
    pub body: String,
}

/// Cookie-tracking HTTP client scoped to one sign-up attempt. Every exchange
/// may update the jar (notably the csrftoken cookie), and the jar is readable
/// between exchanges.
pub struct SessionClient {
    client: Client,
    jar: Arc<Jar>,
}

impl SessionClient {
    pub fn new(http: &HttpConfig) -> Result<Self, RegistrationError> {
        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .user_agent(http.user_agent.as_str())
            .cookie_provider(jar.clone())
            .build()
            .map_err(|e| RegistrationError::Network(e.to_string()))?;
        Ok(Self { client, jar })
    }

    /// One exchange: POST with a url-encoded body when `form` is given, GET
    /// otherwise. Caller headers override the client defaults. When
    /// `expected` is set and the received status differs, the exchange fails
    /// with the actual code.
    pub async fn send(
        &self,
        url: &str,
        headers: HeaderMap,
        form: Option<&[(&str, &str)]>,
        expected: Option<StatusCode>,
    ) -> Result<PageResponse, RegistrationError> {
        let request = match form {
            Some(fields) => self.client.post(url).form(fields),
            None => self.client.get(url),
        };
        let response = request
            .headers(headers)
            .send()
            .await
            .map_err(|e| RegistrationError::Network(e.to_string()))?;

        let status = response.status();
        if let Some(expected) = expected {
            if status != expected {
                return Err(RegistrationError::UnexpectedStatus(status.as_u16()));
            }
        }

        let final_url = response.url().clone();
        debug!(%final_url, status = status.as_u16(), "exchange complete");

        let body = response
            .text()
            .await
            .map_err(|e| RegistrationError::Network(e.to_string()))?;

        Ok(PageResponse { status, final_url, body })
    }

    /// Read a named cookie for `url` from the jar.
    pub fn cookie(&self, url: &Url, name: &str) -> Option<String> {
        let header = self.jar.cookies(url)?;
        cookie_value(header.to_str().ok()?, name).map(str::to_string)
    }
}

/// Pick one value out of a `name=value; other=value` cookie header.
fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split("; ").find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then_some(value)
    })
}
