use std::net::IpAddr;

use serde::{Deserialize, Serialize};

pub mod dto;
pub mod endpoint;
pub mod router;
pub mod serialize;

mod extractor;
mod middleware;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub database_url: String,
    pub server_ip: Option<IpAddr>,
    pub server_port: Option<u16>,
    pub trace_json: Option<bool>,
    pub trace_level: Option<String>,
    pub auth_token: String,
    // when set to true hides the `cause` field in the error response
    pub hide_error_response_cause: bool,
    /// whether swagger and openapi endpoints are available
    pub enable_open_api: bool,
}
