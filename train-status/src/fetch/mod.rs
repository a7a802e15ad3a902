//! HTTP transport for the scraping library.
//!
//! The transit site bounces requests between hosts and schemes (typically
//! `http://` to `https://`) before serving a page, so the client here follows
//! redirects by hand with a fixed attempt budget instead of relying on
//! reqwest's automatic policy.
//!
//! Anything that needs to fetch a page goes through the [`Transport`] trait,
//! which lets the library adapter be handed a [`RedirectingFetcher`] in
//! production and a canned transport in tests.

mod client;
mod error;

pub use client::{FetchedPage, FetcherConfig, RedirectingFetcher, Transport};
pub use error::FetchError;
