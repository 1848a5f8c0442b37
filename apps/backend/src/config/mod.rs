//! Runtime configuration read from the environment.

pub mod data;
pub mod server;

pub use data::DataPaths;
pub use server::ServerConfig;
