use crate::core::traits::{MutationEngine, TargetModule};
use crate::insertion::{InsertionSpec, InsertionSummary};

/// Mutation engine that only records what it was asked to apply
#[derive(Debug, Default)]
pub struct RecordingEngine {
    applied: Vec<InsertionSummary>,
    failure: Option<String>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine whose every application fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            applied: Vec::new(),
            failure: Some(message.into()),
        }
    }

    pub fn applied(&self) -> &[InsertionSummary] {
        &self.applied
    }
}

impl<M: TargetModule> MutationEngine<M> for RecordingEngine {
    fn add_or_insert_method(&mut self, insertion: &InsertionSpec<'_, M>) -> anyhow::Result<()> {
        if let Some(message) = &self.failure {
            anyhow::bail!("{}", message);
        }
        self.applied.push(insertion.summary());
        Ok(())
    }
}
