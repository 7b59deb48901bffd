pub mod certificate;
pub mod document;
