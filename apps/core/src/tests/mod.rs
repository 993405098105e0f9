//! Test Module
//!
//! Cross-module test suite for docsum.
//!
//! ## Test Categories
//! - `analytics_tests`: engine properties over a small corpus
//! - `assistant_tests`: model fallback chain with mock language models
//! - `text_extract_tests`: extraction from files on disk

pub mod analytics_tests;
