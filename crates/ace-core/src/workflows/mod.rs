//! # Workflows Module
//!
//! This module provides the high-level entry point that ties the engine and core
//! layers into the complete stage-run-load pipeline.
//!
//! ## Overview
//!
//! Workflows are the top-level API for users of the library. The descriptor
//! workflow handles input validation, the reuse short-circuit, input staging,
//! the external engine run, and artifact loading, with progress reporting and
//! diagnostics along the way.

pub mod descriptors;
