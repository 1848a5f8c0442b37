//! HTTP transport for game sessions.

pub mod http;

pub use http::HttpQuizApi;
