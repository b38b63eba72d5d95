use ptcgen_core::config::EndpointsConfig;

/// Verdict for one completed sign-up attempt, derived from where the service
/// redirected after the final POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NameTaken,
    EmailTaken,
    EmailInvalidFormat,
    GenericFailure,
}

/// Decision table over the resolved URL of the final exchange. A taken name
/// and a malformed email redirect to the same destination, so that one case
/// is disambiguated by a body marker.
pub fn classify(endpoints: &EndpointsConfig, final_url: &str, body: &str) -> Outcome {
    if endpoints.success_dests.iter().any(|dest| dest == final_url) {
        Outcome::Success
    } else if final_url == endpoints.dupe_email_dest {
        Outcome::EmailTaken
    } else if final_url == endpoints.baddata_dest {
        if body.contains(&endpoints.invalid_email_marker) {
            Outcome::EmailInvalidFormat
        } else {
            Outcome::NameTaken
        }
    } else {
        Outcome::GenericFailure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> EndpointsConfig {
        EndpointsConfig {
            base_url: "https://example.com/club".to_string(),
            success_dests: vec![
                "https://example.com/club/parents/email".to_string(),
                "https://example.com/club/sign-up/".to_string(),
            ],
            dupe_email_dest: "https://example.com/club/forgot-password?msg=users.email.exists"
                .to_string(),
            baddata_dest: "https://example.com/club/parents/sign-up".to_string(),
            invalid_email_marker: "Enter a valid email address.".to_string(),
        }
    }

    #[test]
    fn test_success_on_either_destination() {
        let e = endpoints();
        assert_eq!(
            classify(&e, "https://example.com/club/parents/email", ""),
            Outcome::Success
        );
        assert_eq!(
            classify(&e, "https://example.com/club/sign-up/", "<html>anything</html>"),
            Outcome::Success
        );
    }

    #[test]
    fn test_email_taken_regardless_of_body() {
        let e = endpoints();
        let url = "https://example.com/club/forgot-password?msg=users.email.exists";
        assert_eq!(classify(&e, url, ""), Outcome::EmailTaken);
        assert_eq!(
            classify(&e, url, "Enter a valid email address."),
            Outcome::EmailTaken
        );
    }

    #[test]
    fn test_baddata_disambiguated_by_marker() {
        let e = endpoints();
        let url = "https://example.com/club/parents/sign-up";
        assert_eq!(
            classify(&e, url, "<p>Enter a valid email address.</p>"),
            Outcome::EmailInvalidFormat
        );
        assert_eq!(
            classify(&e, url, "<p>That name is unavailable.</p>"),
            Outcome::NameTaken
        );
    }

    #[test]
    fn test_unknown_url_is_generic_failure() {
        let e = endpoints();
        assert_eq!(
            classify(&e, "https://example.com/somewhere-else", ""),
            Outcome::GenericFailure
        );
    }
}
