//! Infrastructure adapters - HTTP gateway and canned offline content

pub mod demo;
pub mod http;

pub use http::HttpGateway;
