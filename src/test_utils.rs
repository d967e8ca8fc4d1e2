//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.
