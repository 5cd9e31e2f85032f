//! Integration tests for seo-lens
//!
//! These tests use wiremock to stand in for the audited site and the
//! PageSpeed Insights API, and exercise the full fetch-analyze-report cycle.

mod common;
mod fetch_tests;
mod pagespeed_tests;
mod pipeline_tests;
