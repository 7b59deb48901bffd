pub mod common;
pub mod error;
pub mod mapper;
pub mod response;
