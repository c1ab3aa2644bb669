//! Hand-off of finalized insertions to the mutation engine.

use crate::core::traits::{MutationEngine, TargetModule};
use crate::insertion::InsertionSpec;

/// Thin wrapper that forwards insertions to a [`MutationEngine`].
///
/// Engine failures come back unchanged.
pub struct Facade<'a, M: TargetModule> {
    engine: &'a mut dyn MutationEngine<M>,
}

impl<'a, M: TargetModule> Facade<'a, M> {
    pub fn new(engine: &'a mut dyn MutationEngine<M>) -> Self {
        Self { engine }
    }

    /// Apply one insertion; the insertion is consumed.
    pub fn apply(&mut self, insertion: InsertionSpec<'_, M>) -> anyhow::Result<()> {
        let span = tracing::debug_span!(
            "apply_insertion",
            module = insertion.module().name(),
            method = insertion.target_method_name()
        );
        let _enter = span.enter();

        tracing::debug!(point = ?insertion.insertion_point(), "Applying insertion");
        self.engine.add_or_insert_method(&insertion)
    }
}
