//! Test Module
//!
//! Cross-module test suite for the campus buddy pipeline.
//!
//! ## Test Categories
//! - `brain_tests`: Classification, analysis, selection and pacing against the bundled catalog
//! - `catalog_tests`: Loading catalogs from disk
//! - `integration_tests`: Full `generate_response` workflows
//! - `concurrency_tests`: One chatbot shared across threads

pub mod catalog_tests;
