use rand::distributions::Alphanumeric;
use rand::Rng;

use ptcgen_core::RegistrationError;

/// Length of generated usernames and passwords. Always inside the service's
/// accepted password range, so generated passwords skip validation.
pub const CREDENTIAL_LEN: usize = 15;

const EMAIL_LOCAL_LEN: usize = 10;
const EMAIL_SUBDOMAIN_LEN: usize = 5;
const EMAIL_TOP_DOMAIN: &str = ".com";

const PASSWORD_MIN: usize = 6;
const PASSWORD_MAX: usize = 15;

/// Random string of exactly `len` characters from `[A-Za-z0-9]`. No
/// uniqueness guarantee; collisions come back as taken-name verdicts and are
/// handled by the retry loop.
pub fn random_string<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

/// Random email-like address: `{local}@{subdomain}.com` from two independent
/// random strings.
pub fn random_email<R: Rng>(rng: &mut R) -> String {
    format!(
        "{}@{}{}",
        random_string(rng, EMAIL_LOCAL_LEN),
        random_string(rng, EMAIL_SUBDOMAIN_LEN),
        EMAIL_TOP_DOMAIN
    )
}

/// Insert `+tag` before the first `@` (addr+tag@mail.com). An address whose
/// local part already carries a tag is returned unchanged, so re-applying
/// never double-inserts.
pub fn tag_email(email: &str, tag: &str) -> String {
    match email.split_once('@') {
        Some((local, _)) if local.contains('+') => email.to_string(),
        Some((local, domain)) => format!("{local}+{tag}@{domain}"),
        None => email.to_string(),
    }
}

/// The service accepts passwords of 6 to 15 characters. Only caller-supplied
/// passwords go through here.
pub fn validate_password(password: &str) -> Result<(), RegistrationError> {
    let len = password.chars().count();
    if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&len) {
        return Err(RegistrationError::InvalidPassword(format!(
            "password must be {PASSWORD_MIN} to {PASSWORD_MAX} characters, got {len}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_string_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [0, 1, 4, 15, 64] {
            let s = random_string(&mut rng, len);
            assert_eq!(s.chars().count(), len);
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_random_string_is_seeded() {
        let a = random_string(&mut StdRng::seed_from_u64(42), 15);
        let b = random_string(&mut StdRng::seed_from_u64(42), 15);
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_email_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let email = random_email(&mut rng);
        let (local, domain) = email.split_once('@').unwrap();
        assert_eq!(local.chars().count(), 10);
        assert!(local.chars().all(|c| c.is_ascii_alphanumeric()));
        let sub = domain.strip_suffix(".com").unwrap();
        assert_eq!(sub.chars().count(), 5);
        assert!(sub.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_tag_email() {
        assert_eq!(tag_email("a@b.com", "x"), "a+x@b.com");
        // Only the first @ counts
        assert_eq!(tag_email("a@b@c.com", "x"), "a+x@b@c.com");
        // Already tagged: unchanged, never double-inserted
        assert_eq!(tag_email("a+x@b.com", "y"), "a+x@b.com");
        // Not an email at all: unchanged
        assert_eq!(tag_email("nonsense", "x"), "nonsense");
    }

    #[test]
    fn test_validate_password_boundaries() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
        assert!(validate_password("123456789012345").is_ok());
        assert!(validate_password("1234567890123456").is_err());
    }
}
