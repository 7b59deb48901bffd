use pbkdf2::pbkdf2_hmac;
use secrecy::{ExposeSecret, SecretSlice, SecretString};
use sha2::Sha512;

use crate::utilities::generate_random_bytes;

pub const PBKDF2_ITERATIONS: u32 = 100_000;
pub const SALT_LENGTH: usize = 16;
pub const KEY_LENGTH: usize = 32;

pub struct DerivedKey {
    pub key: SecretSlice<u8>,
    pub salt: [u8; SALT_LENGTH],
}

/// Derives a key from `password` using a freshly generated salt.
pub fn derive_key(password: &SecretString) -> DerivedKey {
    let salt = generate_random_bytes::<SALT_LENGTH>();
    let key = derive_key_with_salt(password, &salt);

    DerivedKey { key, salt }
}

/// PBKDF2-HMAC-SHA512, deterministic for a given (password, salt).
pub fn derive_key_with_salt(password: &SecretString, salt: &[u8]) -> SecretSlice<u8> {
    pbkdf2_sha512(
        password.expose_secret().as_bytes(),
        salt,
        PBKDF2_ITERATIONS,
    )
}

fn pbkdf2_sha512(password: &[u8], salt: &[u8], rounds: u32) -> SecretSlice<u8> {
    let mut key = vec![0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha512>(password, salt, rounds, &mut key);
    SecretSlice::from(key)
}
