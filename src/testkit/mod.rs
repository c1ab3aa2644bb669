//! Test doubles for the collaborators around the insertion builder.
//!
//! - **[`RecordingEngine`]**: a [`MutationEngine`](crate::core::MutationEngine)
//!   that records every applied insertion, or fails on demand
//! - **[`StubSignatureWriter`]**: returns fixed signature and super-call text
//!   and counts how often it was asked
//! - **Helpers**: small class hierarchies for resolution scenarios
//!
//! ```rust,ignore
//! use weavekit::testkit::{overriding_hierarchy, RecordingEngine, StubSignatureWriter};
//!
//! let target = overriding_hierarchy("foo");
//! let mut engine = RecordingEngine::new();
//! let writer = StubSignatureWriter::new("public void foo()", "super.foo()");
//! ```

pub mod helpers;
pub mod recording_engine;

pub use helpers::{overriding_hierarchy, StubSignatureWriter};
pub use recording_engine::RecordingEngine;
