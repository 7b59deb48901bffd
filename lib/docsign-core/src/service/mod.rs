pub mod certificate;
pub mod certificate_authority;
pub mod document;
pub mod document_signing;
pub mod error;

#[cfg(test)]
pub(crate) mod test_utilities;
