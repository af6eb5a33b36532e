//! HTTP plumbing for the Freshsales API

pub mod transport;
pub mod http;

pub use transport::{check_path, QueryParams, Transport};
pub use http::HttpTransport;
