//! Tournament REST service client
//!
//! Talks to the external service exposing `/teams`, `/matches` and
//! `/tournaments`, normalizing its responses into domain types.

pub mod dto;
pub mod envelope;
mod http_client;
mod service;

pub use http_client::{HttpClient, HttpClientTrait};
pub use service::TournamentDataService;
