pub mod misc;

pub mod certificate;
pub mod document;
