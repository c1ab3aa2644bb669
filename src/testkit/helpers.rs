//! Factories for class hierarchies and a canned signature writer.

use std::cell::Cell;
use std::sync::Arc;

use crate::core::traits::SignatureWriter;
use crate::core::{ClassModel, MethodModel};
use crate::errors::Result;

/// `Target extends TargetAncestor`, both declaring `method_name`
pub fn overriding_hierarchy(method_name: &str) -> ClassModel {
    let ancestor = Arc::new(
        ClassModel::new("TargetAncestor").with_method(MethodModel::new(method_name)),
    );
    ClassModel::new("Target")
        .extends(ancestor)
        .with_method(MethodModel::new(method_name))
}

/// Signature writer returning fixed text for any method
#[derive(Debug)]
pub struct StubSignatureWriter {
    signature: String,
    super_call: String,
    signature_calls: Cell<usize>,
    super_calls: Cell<usize>,
}

impl StubSignatureWriter {
    pub fn new(signature: impl Into<String>, super_call: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            super_call: super_call.into(),
            signature_calls: Cell::new(0),
            super_calls: Cell::new(0),
        }
    }

    pub fn signature_calls(&self) -> usize {
        self.signature_calls.get()
    }

    pub fn super_calls(&self) -> usize {
        self.super_calls.get()
    }
}

impl<T: ?Sized> SignatureWriter<T> for StubSignatureWriter {
    fn render_signature(&self, _method: &T) -> Result<String> {
        self.signature_calls.set(self.signature_calls.get() + 1);
        Ok(self.signature.clone())
    }

    fn render_super_call(&self, _method: &T) -> Result<String> {
        self.super_calls.set(self.super_calls.get() + 1);
        Ok(self.super_call.clone())
    }
}
