//! Real-time train status service.
//!
//! Answers "what is train N doing right now?" by scraping a transit
//! information site through a redirect-following HTTP transport and
//! normalizing the loosely structured record it returns.

pub mod config;
pub mod fetch;
pub mod logging;
pub mod source;
pub mod status;
pub mod web;
