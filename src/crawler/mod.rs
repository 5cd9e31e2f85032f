//! Crawler module for fetching the page under audit
//!
//! This module contains:
//! - HTTP fetching and failure classification
//! - The coordinator that runs robots.txt checks, fetching and analysis

mod coordinator;
mod fetcher;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, fetch_page, FetchedPage};
