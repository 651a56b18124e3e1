//! ce-client: the equipment API contract and its HTTP implementation.
//!
//! The dashboard never talks to the network directly; it goes through
//! [`EquipmentApi`], so front ends can share one client and tests can swap in
//! a recording fake.

pub mod api;
pub mod endpoints;
pub mod http;

pub use api::EquipmentApi;
pub use endpoints::{Endpoints, report_file_name};
pub use http::HttpClient;

use std::path::PathBuf;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Server returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// True for failures reported by the server rather than the transport.
    pub fn is_status(&self) -> bool {
        matches!(self, ClientError::Status { .. })
    }
}
