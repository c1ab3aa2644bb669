//! Core trait definitions for the collaborators around the insertion builder
//!
//! The builder never touches a concrete class representation. It works
//! against these contracts, which a platform adapter (or the in-memory
//! [`ClassModel`](crate::core::model::ClassModel)) implements.

use crate::errors::Result;
use crate::insertion::InsertionSpec;

/// Read-only metadata of a method, enough to render its signature
pub trait MethodSignature {
    /// Simple method name
    fn name(&self) -> &str;

    /// Return type as source text, `void` for none
    fn return_type(&self) -> &str;

    /// Parameter types in declaration order
    fn parameter_types(&self) -> &[String];

    /// Modifiers such as `public` or `static`
    fn modifiers(&self) -> &[String];

    /// Declared exception types
    fn exception_types(&self) -> &[String];

    /// Name of the module that declares this method
    fn declaring_module(&self) -> &str;
}

/// A class-like entity into which methods or snippets are inserted
pub trait TargetModule {
    /// Method handle type exposed by this module
    type Method: MethodSignature;

    /// Fully qualified module name
    fn name(&self) -> &str;

    /// Look up a method declared directly on this module.
    ///
    /// `None` means the declared lookup failed and callers may fall back to
    /// [`TargetModule::methods`].
    fn declared_method(&self, name: &str) -> Option<&Self::Method>;

    /// Every method visible on this module, inherited ones included, in the
    /// module's own enumeration order.
    fn methods(&self) -> Vec<&Self::Method>;
}

/// Renders method signatures and super calls as source text
pub trait SignatureWriter<T: ?Sized> {
    /// Render the method's signature, without a body
    fn render_signature(&self, method: &T) -> Result<String>;

    /// Render a statement calling the superclass implementation
    fn render_super_call(&self, method: &T) -> Result<String>;
}

/// The engine that rewrites a module according to an insertion
pub trait MutationEngine<M: TargetModule> {
    /// Insert the body into the target method, or add the full method when the
    /// target method does not exist.
    fn add_or_insert_method(&mut self, insertion: &InsertionSpec<'_, M>) -> anyhow::Result<()>;
}

/// Resolves module handles from class identifiers
pub trait ModuleProvider {
    /// Module type handed out by this provider
    type Module: TargetModule;

    /// Find a module by fully qualified name
    fn module(&self, name: &str) -> Option<&Self::Module>;
}
