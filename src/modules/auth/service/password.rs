use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

pub enum Error {
    HashingFailed,
}

pub fn hash(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| {
            tracing::error!("Failed to hash password: {}", err);
            Error::HashingFailed
        })
}

pub fn verify(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_against_original_password() {
        let hashed = hash("Secret123").ok().unwrap();
        assert!(verify("Secret123", &hashed));
        assert!(!verify("Secret124", &hashed));
    }

    #[test]
    fn hashing_salts_per_record() {
        let first = hash("Secret123").ok().unwrap();
        let second = hash("Secret123").ok().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn verify_rejects_garbage_hash() {
        assert!(!verify("Secret123", "not-a-phc-string"));
    }
}
