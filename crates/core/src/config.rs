use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub endpoints: EndpointsConfig,
    pub retry: RetryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub user_agent: String,
}

/// Where the service redirects after the final POST is the only outcome
/// signal it gives. These destinations (and the disambiguation marker) change
/// whenever the site does, so they live in config rather than in code.
#[derive(Debug, Deserialize, Clone)]
pub struct EndpointsConfig {
    pub base_url: String,
    /// Resolved URLs that mean the account was created. The service has used
    /// two over time; either counts.
    pub success_dests: Vec<String>,
    /// Resolved URL meaning the email is already registered.
    pub dupe_email_dest: String,
    /// Resolved URL shared by the taken-name and malformed-email rejections.
    pub baddata_dest: String,
    /// Body text present only in the malformed-email case of `baddata_dest`.
    pub invalid_email_marker: String,
}

impl EndpointsConfig {
    /// Age-gate page; also the target of the account-details POST.
    pub fn age_gate_url(&self) -> String {
        format!("{}/parents/sign-up", self.base_url)
    }

    /// Target of the date-of-birth/country POST.
    pub fn age_check_url(&self) -> String {
        format!("{}/sign-up/", self.base_url)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetryConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_max_attempts() -> u32 { 10 }
