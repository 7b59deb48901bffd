//! Symmetric primitives used to protect stored certificates.

pub mod encryption;
pub mod password;
pub mod utilities;
