// auvik-api: Async Rust client for the Auvik network management REST API.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod transport;
pub mod types;
pub mod window;

pub use client::AuvikClient;
pub use error::Error;
pub use transport::TransportConfig;
pub use window::ReportWindow;
