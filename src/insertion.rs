//! The finalized insertion request.

use crate::core::traits::TargetModule;
use serde::Serialize;
use std::fmt;

/// Where the body goes relative to existing code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "call", rename_all = "kebab-case")]
pub enum InsertionPoint {
    /// Before a call to the named method inside the target method
    BeforeCall(String),
    /// After a call to the named method inside the target method
    AfterCall(String),
    /// Before the super call of a synthesized override
    BeforeSuperCall,
    /// After the super call of a synthesized override
    AfterSuperCall,
}

impl InsertionPoint {
    pub fn is_before(&self) -> bool {
        matches!(self, Self::BeforeCall(_) | Self::BeforeSuperCall)
    }
}

/// Immutable, validated description of one insertion.
///
/// Only the staged builder produces these. The module is borrowed, so the
/// value cannot outlive the module it describes.
pub struct InsertionSpec<'m, M: TargetModule> {
    module: &'m M,
    target_method_name: String,
    insertion_point: InsertionPoint,
    body: String,
    full_method: String,
}

impl<'m, M: TargetModule> InsertionSpec<'m, M> {
    pub(crate) fn new(
        module: &'m M,
        target_method_name: String,
        insertion_point: InsertionPoint,
        body: String,
        full_method: String,
    ) -> Self {
        Self {
            module,
            target_method_name,
            insertion_point,
            body,
            full_method,
        }
    }

    pub fn module(&self) -> &'m M {
        self.module
    }

    pub fn target_method_name(&self) -> &str {
        &self.target_method_name
    }

    pub fn insertion_point(&self) -> &InsertionPoint {
        &self.insertion_point
    }

    pub fn insertion_before_method(&self) -> Option<&str> {
        match &self.insertion_point {
            InsertionPoint::BeforeCall(name) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn insertion_after_method(&self) -> Option<&str> {
        match &self.insertion_point {
            InsertionPoint::AfterCall(name) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Full method text with the body already substituted
    pub fn full_method(&self) -> &str {
        &self.full_method
    }

    /// Owned, serializable copy for reporting
    pub fn summary(&self) -> InsertionSummary {
        InsertionSummary {
            module: self.module.name().to_string(),
            target_method: self.target_method_name.clone(),
            body: self.body.clone(),
            full_method: self.full_method.clone(),
            insertion_point: self.insertion_point.clone(),
        }
    }
}

impl<M: TargetModule> fmt::Debug for InsertionSpec<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertionSpec")
            .field("module", &self.module.name())
            .field("target_method_name", &self.target_method_name)
            .field("insertion_point", &self.insertion_point)
            .field("body", &self.body)
            .field("full_method", &self.full_method)
            .finish()
    }
}

/// Serializable view of an [`InsertionSpec`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertionSummary {
    pub module: String,
    pub target_method: String,
    pub body: String,
    pub full_method: String,
    pub insertion_point: InsertionPoint,
}
