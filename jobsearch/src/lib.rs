//! Command-line client for the JobTech job search API.

pub mod app;
pub mod cli;
pub mod client;
pub mod dump;
pub mod error;
pub mod presenter;
pub mod query;
