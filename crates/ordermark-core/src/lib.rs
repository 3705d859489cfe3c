//! ordermark-core — partial-credit grading of ordering-question
//! submissions.
//!
//! Grades a learner's submitted ordering of a fixed set of items
//! against an author-defined correct ordering, producing a fraction in
//! [0, 1] under one of nine selectable grading strategies. The engine
//! is a pure library: no I/O, no shared state, safe to call
//! concurrently.

pub mod analysis;
pub mod engine;
pub mod error;
pub mod model;
pub mod scoring;
pub mod validate;
