//! In-memory class model.
//!
//! Stands in for a platform class pool: classes carry declared methods and an
//! optional superclass, and a [`ClassPool`] resolves them by name. Manifests
//! deserialize straight into [`ClassDecl`] values.

use crate::core::traits::{MethodSignature, ModuleProvider, TargetModule};
use crate::errors::{Result, WeaveError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

fn default_return_type() -> String {
    "void".to_string()
}

fn default_modifiers() -> Vec<String> {
    vec!["public".to_string()]
}

/// A method declared on a [`ClassModel`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodModel {
    pub name: String,
    #[serde(default = "default_return_type")]
    pub return_type: String,
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default = "default_modifiers")]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub exceptions: Vec<String>,
    /// Filled in when the method is attached to a class
    #[serde(skip)]
    pub declaring_class: String,
}

impl MethodModel {
    /// A public `void` method without parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: default_return_type(),
            parameters: Vec::new(),
            modifiers: default_modifiers(),
            exceptions: Vec::new(),
            declaring_class: String::new(),
        }
    }

    pub fn returning(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = return_type.into();
        self
    }

    pub fn with_parameter(mut self, parameter_type: impl Into<String>) -> Self {
        self.parameters.push(parameter_type.into());
        self
    }

    pub fn with_modifiers(mut self, modifiers: &[&str]) -> Self {
        self.modifiers = modifiers.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn throwing(mut self, exception_type: impl Into<String>) -> Self {
        self.exceptions.push(exception_type.into());
        self
    }
}

impl MethodSignature for MethodModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn return_type(&self) -> &str {
        &self.return_type
    }

    fn parameter_types(&self) -> &[String] {
        &self.parameters
    }

    fn modifiers(&self) -> &[String] {
        &self.modifiers
    }

    fn exception_types(&self) -> &[String] {
        &self.exceptions
    }

    fn declaring_module(&self) -> &str {
        &self.declaring_class
    }
}

/// A class with declared methods and an optional superclass
#[derive(Debug, Clone)]
pub struct ClassModel {
    name: String,
    superclass: Option<Arc<ClassModel>>,
    declared: Vec<MethodModel>,
}

impl ClassModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            superclass: None,
            declared: Vec::new(),
        }
    }

    pub fn extends(mut self, superclass: Arc<ClassModel>) -> Self {
        self.superclass = Some(superclass);
        self
    }

    /// Attach a method, recording this class as its declaring class
    pub fn with_method(mut self, mut method: MethodModel) -> Self {
        method.declaring_class = self.name.clone();
        self.declared.push(method);
        self
    }

    pub fn superclass(&self) -> Option<&ClassModel> {
        self.superclass.as_deref()
    }

    pub fn declared_methods(&self) -> &[MethodModel] {
        &self.declared
    }
}

impl TargetModule for ClassModel {
    type Method = MethodModel;

    fn name(&self) -> &str {
        &self.name
    }

    fn declared_method(&self, name: &str) -> Option<&MethodModel> {
        self.declared.iter().find(|method| method.name == name)
    }

    /// Declared methods first, then each ancestor's declared methods, nearest
    /// ancestor first.
    fn methods(&self) -> Vec<&MethodModel> {
        let mut visible = Vec::new();
        let mut current = Some(self);
        while let Some(class) = current {
            visible.extend(class.declared.iter());
            current = class.superclass();
        }
        visible
    }
}

/// Declaration of a class as written in a manifest
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassDecl {
    pub name: String,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default, rename = "method")]
    pub methods: Vec<MethodModel>,
}

/// Name-keyed registry of classes
#[derive(Debug, Clone, Default)]
pub struct ClassPool {
    classes: HashMap<String, Arc<ClassModel>>,
}

impl ClassPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class, replacing any class of the same name
    pub fn insert(&mut self, class: ClassModel) -> Arc<ClassModel> {
        let class = Arc::new(class);
        self.classes
            .insert(class.name.clone(), Arc::clone(&class));
        class
    }

    pub fn get(&self, name: &str) -> Option<&ClassModel> {
        self.classes.get(name).map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Build a pool from declarations, linking every class to its superclass.
    ///
    /// Declarations may appear in any order. Unknown superclasses, duplicate
    /// names and inheritance cycles are rejected.
    pub fn from_decls(decls: &[ClassDecl]) -> Result<Self> {
        let mut index: HashMap<&str, &ClassDecl> = HashMap::new();
        for decl in decls {
            if index.insert(decl.name.as_str(), decl).is_some() {
                return Err(WeaveError::Configuration(format!(
                    "class {} is declared more than once",
                    decl.name
                )));
            }
        }

        let mut built = HashMap::new();
        let mut visiting = HashSet::new();
        for decl in decls {
            materialize(&decl.name, &index, &mut built, &mut visiting)?;
        }

        Ok(Self { classes: built })
    }
}

fn materialize(
    name: &str,
    index: &HashMap<&str, &ClassDecl>,
    built: &mut HashMap<String, Arc<ClassModel>>,
    visiting: &mut HashSet<String>,
) -> Result<Arc<ClassModel>> {
    if let Some(class) = built.get(name) {
        return Ok(Arc::clone(class));
    }
    let decl = index
        .get(name)
        .ok_or_else(|| WeaveError::ModuleNotFound(name.to_string()))?;
    if !visiting.insert(name.to_string()) {
        return Err(WeaveError::InheritanceCycle(name.to_string()));
    }

    let superclass = decl
        .superclass
        .as_deref()
        .map(|parent| materialize(parent, index, built, visiting))
        .transpose()?;

    let mut class = ClassModel::new(&decl.name);
    if let Some(parent) = superclass {
        class = class.extends(parent);
    }
    let class = Arc::new(
        decl.methods
            .iter()
            .cloned()
            .fold(class, ClassModel::with_method),
    );

    visiting.remove(name);
    built.insert(name.to_string(), Arc::clone(&class));
    Ok(class)
}

impl ModuleProvider for ClassPool {
    type Module = ClassModel;

    fn module(&self, name: &str) -> Option<&ClassModel> {
        self.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(name: &str, superclass: Option<&str>, methods: &[&str]) -> ClassDecl {
        ClassDecl {
            name: name.to_string(),
            superclass: superclass.map(str::to_string),
            methods: methods.iter().map(|m| MethodModel::new(*m)).collect(),
        }
    }

    #[test]
    fn test_with_method_sets_declaring_class() {
        let class = ClassModel::new("Target").with_method(MethodModel::new("foo"));
        assert_eq!(class.declared_methods()[0].declaring_module(), "Target");
    }

    #[test]
    fn test_methods_lists_declared_then_inherited() {
        let base = Arc::new(ClassModel::new("Base").with_method(MethodModel::new("bar")));
        let target = ClassModel::new("Target")
            .extends(base)
            .with_method(MethodModel::new("foo"));

        let names: Vec<_> = target
            .methods()
            .iter()
            .map(|m| format!("{}.{}", m.declaring_class, m.name))
            .collect();
        assert_eq!(names, vec!["Target.foo", "Base.bar"]);
    }

    #[test]
    fn test_declared_method_ignores_inherited() {
        let base = Arc::new(ClassModel::new("Base").with_method(MethodModel::new("bar")));
        let target = ClassModel::new("Target").extends(base);
        assert!(target.declared_method("bar").is_none());
    }

    #[test]
    fn test_pool_links_out_of_order_declarations() {
        let pool = ClassPool::from_decls(&[
            decl("Target", Some("Base"), &["foo"]),
            decl("Base", None, &["foo"]),
        ])
        .unwrap();

        let target = pool.get("Target").unwrap();
        assert_eq!(target.superclass().map(|c| c.name()), Some("Base"));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_pool_rejects_unknown_superclass() {
        let err = ClassPool::from_decls(&[decl("Target", Some("Missing"), &[])]).unwrap_err();
        assert!(matches!(err, WeaveError::ModuleNotFound(name) if name == "Missing"));
    }

    #[test]
    fn test_pool_rejects_cycles() {
        let err = ClassPool::from_decls(&[
            decl("A", Some("B"), &[]),
            decl("B", Some("A"), &[]),
        ])
        .unwrap_err();
        assert!(matches!(err, WeaveError::InheritanceCycle(_)));
    }

    #[test]
    fn test_pool_rejects_duplicate_names() {
        let err = ClassPool::from_decls(&[decl("A", None, &[]), decl("A", None, &[])]).unwrap_err();
        assert!(matches!(err, WeaveError::Configuration(_)));
    }
}
