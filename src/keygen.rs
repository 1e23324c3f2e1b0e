//! API key material generation.
//!
//! Secrets have the form `{prefix}_{48 hex chars}`: 24 random bytes from a
//! cryptographically secure source, prefixed with `live` for production
//! keys and `test` for everything else.
//!
//! Uniqueness is probabilistic (192 bits of entropy, no store round-trip);
//! the database `UNIQUE` constraint on the secret column is the backstop.

use rand::RngCore;

/// Number of random bytes in a secret (hex-encodes to 48 characters).
const SECRET_RANDOM_BYTES: usize = 24;

/// Generate a fresh secret for the given environment class.
///
/// `environment` equal to exactly `"prod"` yields a `live_` prefix; any
/// other value yields `test_`. No I/O, each call is independent.
pub fn generate(environment: &str) -> String {
    let prefix = if environment == "prod" { "live" } else { "test" };

    let mut bytes = [0u8; SECRET_RANDOM_BYTES];
    rand::rng().fill_bytes(&mut bytes);

    format!("{}_{}", prefix, hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
    }

    #[test]
    fn prod_keys_get_live_prefix() {
        let secret = generate("prod");
        assert!(secret.starts_with("live_"));
    }

    #[test]
    fn non_prod_keys_get_test_prefix() {
        for env in ["dev", "staging", "PROD", ""] {
            let secret = generate(env);
            assert!(secret.starts_with("test_"), "env {env:?} -> {secret}");
        }
    }

    #[test]
    fn secret_is_prefix_plus_48_hex_chars() {
        let secret = generate("dev");
        let (prefix, hex_part) = secret.split_once('_').expect("missing underscore");
        assert_eq!(prefix, "test");
        assert_eq!(hex_part.len(), 48);
        assert!(is_hex(hex_part));
    }

    #[test]
    fn consecutive_secrets_differ() {
        assert_ne!(generate("dev"), generate("dev"));
    }
}
