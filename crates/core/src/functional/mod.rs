//! Functional programming helpers used across the underbar primitives
//!
//! This module provides the identity and negation combinators and the
//! `Truthy` trait that gives values a pass/fail reading.

pub mod operators;
pub mod truthy;

pub use operators::{identity, negate};
pub use truthy::Truthy;
