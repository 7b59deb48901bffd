pub mod command;
pub mod openssl_cli;
pub mod pdf_signer;
pub mod pkcs12;
