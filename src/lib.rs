//! Declarative method insertion requests.
//!
//! A caller walks the staged [`InsertableMethodBuilder`] to describe either a
//! snippet inserted before or after a call inside an existing method, or a
//! synthesized override that wraps the super call. The finished
//! [`InsertionSpec`] is handed to a [`MutationEngine`] that does the rewriting.

pub mod builders;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod facade;
pub mod insertion;
pub mod resolver;
pub mod testkit;
pub mod writer;

// Re-export commonly used types
pub use crate::builders::{merge_body, InsertableMethodBuilder, InsertionStage, BODY_TAG};
pub use crate::core::{
    ClassDecl, ClassModel, ClassPool, MethodModel, MethodSignature, ModuleProvider,
    MutationEngine, SignatureWriter, TargetModule,
};
pub use crate::errors::{Result, WeaveError};
pub use crate::facade::Facade;
pub use crate::insertion::{InsertionPoint, InsertionSpec, InsertionSummary};
pub use crate::resolver::MethodResolver;
pub use crate::writer::JavaSignatureWriter;
