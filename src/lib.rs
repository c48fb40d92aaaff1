//! # RDP Client Library
//!
//! Obtains and keeps fresh a bearer token for the RDP REST APIs, issues data
//! requests with it and renders the answers as console tables.
//!
//! Modules:
//! - `config`: client configuration (YAML + environment) and validation
//! - `auth`: token lifecycle (password grant, scheduled refresh, revoke)
//! - `data`: symbology lookup, news headlines and ESG requests
//! - `report`: console tables for the data responses

pub mod auth;
pub mod config;
pub mod data;
pub mod error;
pub mod helpers;
pub mod report;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::config::endpoints::ServiceConfig;
pub use crate::error::{AuthError, ClientError, RevokeError};
