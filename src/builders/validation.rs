//! Completeness check run before an insertion is assembled.

use crate::core::traits::TargetModule;
use crate::errors::{Result, WeaveError};
use crate::insertion::InsertionPoint;

/// Fields accumulated while the staged builder advances
pub(crate) struct InsertionDraft<'m, M: TargetModule> {
    pub(crate) module: Option<&'m M>,
    pub(crate) target_method: Option<String>,
    pub(crate) insertion_point: Option<InsertionPoint>,
    pub(crate) body: Option<String>,
    pub(crate) full_method: Option<String>,
}

impl<M: TargetModule> Default for InsertionDraft<'_, M> {
    fn default() -> Self {
        Self {
            module: None,
            target_method: None,
            insertion_point: None,
            body: None,
            full_method: None,
        }
    }
}

/// A draft with every required field present
pub(crate) struct CheckedFields<'m, M: TargetModule> {
    pub(crate) module: &'m M,
    pub(crate) target_method: String,
    pub(crate) insertion_point: InsertionPoint,
    pub(crate) body: String,
    pub(crate) full_method: String,
}

/// Require module, target method, insertion point, body and full method.
///
/// Any missing field yields the same [`WeaveError::IncompleteSpecification`].
pub(crate) fn check_fields<M: TargetModule>(
    draft: InsertionDraft<'_, M>,
) -> Result<CheckedFields<'_, M>> {
    match draft {
        InsertionDraft {
            module: Some(module),
            target_method: Some(target_method),
            insertion_point: Some(insertion_point),
            body: Some(body),
            full_method: Some(full_method),
        } => Ok(CheckedFields {
            module,
            target_method,
            insertion_point,
            body,
            full_method,
        }),
        _ => Err(WeaveError::IncompleteSpecification),
    }
}
