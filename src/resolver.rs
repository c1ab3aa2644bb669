//! Target method resolution.
//!
//! Resolution tries the method declared directly on the module first. When
//! that lookup comes back empty it scans every visible method, inherited ones
//! included, and keeps the **last** entry whose name matches.
//!
//! The last-match rule is not "nearest declaring class" and not "first
//! declared". It is whatever comes last in the module's own enumeration
//! order. Callers rely on that identity, so it is kept as is even though it
//! is surprising: with [`ClassModel`](crate::core::ClassModel) enumeration,
//! an inherited name resolves to the most distant ancestor that declares it.

use crate::core::traits::{MethodSignature, TargetModule};
use crate::errors::{Result, WeaveError};

/// Resolves the single method an override is built against
pub struct MethodResolver;

impl MethodResolver {
    /// Find the method named `name` on `module`, or fail with
    /// [`WeaveError::TargetMethodNotFound`].
    pub fn resolve<'m, M: TargetModule>(module: &'m M, name: &str) -> Result<&'m M::Method> {
        if let Some(method) = module.declared_method(name) {
            return Ok(method);
        }

        log::debug!(
            "{} declares no method {}, scanning visible methods",
            module.name(),
            name
        );
        last_visible_match(module, name)
            .ok_or_else(|| WeaveError::method_not_found(module.name(), name))
    }
}

/// Last method in enumeration order named `name`; the scan never stops early.
fn last_visible_match<'m, M: TargetModule>(module: &'m M, name: &str) -> Option<&'m M::Method> {
    module
        .methods()
        .into_iter()
        .filter(|method| method.name() == name)
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ClassModel, MethodModel};
    use std::sync::Arc;

    #[test]
    fn test_declared_method_wins_over_inherited() {
        let base = Arc::new(ClassModel::new("Base").with_method(MethodModel::new("foo")));
        let target = ClassModel::new("Target")
            .extends(base)
            .with_method(MethodModel::new("foo"));

        let method = MethodResolver::resolve(&target, "foo").unwrap();
        assert_eq!(method.declaring_class, "Target");
    }

    #[test]
    fn test_falls_back_to_inherited_method() {
        let base = Arc::new(ClassModel::new("Base").with_method(MethodModel::new("foo")));
        let target = ClassModel::new("Target").extends(base);

        let method = MethodResolver::resolve(&target, "foo").unwrap();
        assert_eq!(method.declaring_class, "Base");
    }

    #[test]
    fn test_fallback_keeps_last_match() {
        let root = Arc::new(
            ClassModel::new("Root").with_method(MethodModel::new("foo").with_parameter("String")),
        );
        let base = Arc::new(
            ClassModel::new("Base")
                .extends(root)
                .with_method(MethodModel::new("foo").with_parameter("int")),
        );
        let target = ClassModel::new("Target").extends(base);

        let method = MethodResolver::resolve(&target, "foo").unwrap();
        assert_eq!(method.declaring_class, "Root");
        assert_eq!(method.parameters, vec!["String".to_string()]);
    }

    #[test]
    fn test_missing_method_reports_module_and_name() {
        let target = ClassModel::new("Target").with_method(MethodModel::new("bar"));

        let err = MethodResolver::resolve(&target, "foo").unwrap_err();
        match err {
            WeaveError::TargetMethodNotFound { module, method } => {
                assert_eq!(module, "Target");
                assert_eq!(method, "foo");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
