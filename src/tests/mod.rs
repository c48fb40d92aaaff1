pub mod common;
mod data_requests;
mod token_lifecycle;
