/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses decoded as dynamic JSON documents
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod batch;
pub mod client;
pub mod error;
pub mod multi;
pub mod public;
pub mod trade;
pub mod user;

pub use error::{Result, SbeeError};

pub use client::{ClientConfig, SbeeClient};
