use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use secrecy::{ExposeSecret, SecretSlice, SecretString};

use crate::password::{SALT_LENGTH, derive_key, derive_key_with_salt};
use crate::utilities::generate_random_bytes;

pub const IV_LENGTH: usize = 16;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

#[derive(Debug, thiserror::Error)]
pub enum EncryptionError {
    #[error("crypto error: {0}")]
    Crypto(String),
    /// Padding check failed; almost always a wrong password
    #[error("decryption failed")]
    DecryptionFailed,
}

/// Output of [`encrypt_data`]. Salt and IV must be stored next to the ciphertext.
#[derive(Debug, Clone)]
pub struct EncryptedPayload {
    pub ciphertext: Vec<u8>,
    pub salt: [u8; SALT_LENGTH],
    pub iv: [u8; IV_LENGTH],
}

pub fn encrypt_data(
    data: &[u8],
    password: &SecretString,
) -> Result<EncryptedPayload, EncryptionError> {
    let key = derive_key(password);
    let iv = generate_random_bytes::<IV_LENGTH>();

    let cipher = Aes256CbcEnc::new_from_slices(key.key.expose_secret(), &iv)
        .map_err(|err| EncryptionError::Crypto(err.to_string()))?;

    Ok(EncryptedPayload {
        ciphertext: cipher.encrypt_padded_vec_mut::<Pkcs7>(data),
        salt: key.salt,
        iv,
    })
}

pub fn decrypt_data(
    ciphertext: &[u8],
    password: &SecretString,
    salt: &[u8],
    iv: &[u8],
) -> Result<SecretSlice<u8>, EncryptionError> {
    let key = derive_key_with_salt(password, salt);

    let cipher = Aes256CbcDec::new_from_slices(key.expose_secret(), iv)
        .map_err(|err| EncryptionError::Crypto(err.to_string()))?;

    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map(SecretSlice::from)
        .map_err(|_| EncryptionError::DecryptionFailed)
}
