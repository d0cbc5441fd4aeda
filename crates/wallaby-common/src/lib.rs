//! Common utilities for the Wallaby text extractor.
//!
//! This crate provides shared infrastructure used by all components:
//! - **Warning System** - colored terminal output for unsupported features

pub mod warning;
