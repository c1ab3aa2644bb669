//! Default signature writer producing Java-like source text.

use crate::core::traits::{MethodSignature, SignatureWriter};
use crate::errors::{Result, WeaveError};

/// Modifiers an override must not repeat
const NON_INHERITABLE_MODIFIERS: &[&str] = &["abstract", "native"];

/// Renders `public void foo(int p0) throws E` and `super.foo(p0);`
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaSignatureWriter;

impl JavaSignatureWriter {
    fn parameter_names(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("p{i}")).collect()
    }
}

impl<T: MethodSignature + ?Sized> SignatureWriter<T> for JavaSignatureWriter {
    fn render_signature(&self, method: &T) -> Result<String> {
        if method.name().is_empty() {
            return Err(WeaveError::Signature(format!(
                "method declared on {} has no name",
                method.declaring_module()
            )));
        }

        let names = Self::parameter_names(method.parameter_types().len());
        let parameters = method
            .parameter_types()
            .iter()
            .zip(&names)
            .map(|(ty, name)| format!("{ty} {name}"))
            .collect::<Vec<_>>()
            .join(", ");

        let mut signature: Vec<&str> = method
            .modifiers()
            .iter()
            .map(String::as_str)
            .filter(|m| !NON_INHERITABLE_MODIFIERS.contains(m))
            .collect();
        signature.push(method.return_type());
        let mut rendered = format!("{} {}({})", signature.join(" "), method.name(), parameters);

        if !method.exception_types().is_empty() {
            rendered.push_str(" throws ");
            rendered.push_str(&method.exception_types().join(", "));
        }
        Ok(rendered)
    }

    fn render_super_call(&self, method: &T) -> Result<String> {
        let arguments = Self::parameter_names(method.parameter_types().len()).join(", ");
        let call = format!("super.{}({});", method.name(), arguments);
        if method.return_type() == "void" {
            Ok(call)
        } else {
            Ok(format!("return {call}"))
        }
    }
}
