//! Staged builder for insertion requests.
//!
//! Each stage is an [`InsertionStage`] tagged with a marker type, and each
//! marker only exposes the calls that are legal next. Out-of-order calls do
//! not compile:
//!
//! ```rust,ignore
//! // Inserting into an existing method, or creating it from the skeleton
//! InsertableMethodBuilder::<ClassModel>::new(&mut engine)
//!     .set_target_module(&target)
//!     .select_method_if_exists("foo")
//!     .after_call_to("bar")
//!     .with_body("log();")
//!     .else_create_method_if_not_exists("void foo(){BODY}")
//!     .finalize()?;
//!
//! // Synthesizing an override around the super call
//! InsertableMethodBuilder::<ClassModel>::new(&mut engine)
//!     .set_target_module(&target)
//!     .before_override_of("foo")?
//!     .with_body("log();")
//!     .build_and_apply()?;
//! ```
//!
//! All stages share one owned draft; a stage transition only changes the
//! marker. A failed call consumes the builder, so callers start over rather
//! than repair a half-built request.

use std::marker::PhantomData;

use super::body::{merge_body, BODY_TAG};
use super::validation::{check_fields, InsertionDraft};
use crate::config::WeaveConfig;
use crate::core::traits::{ModuleProvider, MutationEngine, SignatureWriter, TargetModule};
use crate::errors::{Result, WeaveError};
use crate::facade::Facade;
use crate::insertion::{InsertionPoint, InsertionSpec};
use crate::resolver::MethodResolver;
use crate::writer::JavaSignatureWriter;

/// Marker: target module chosen
#[derive(Debug, Clone, Copy)]
pub struct TargetModuleSet;

/// Marker: target method named, insertion point pending
#[derive(Debug, Clone, Copy)]
pub struct TargetMethodSet;

/// Marker: before/after call chosen, body pending
#[derive(Debug, Clone, Copy)]
pub struct InsertionPointSet;

/// Marker: body given, fallback full method pending
#[derive(Debug, Clone, Copy)]
pub struct BodySet;

/// Marker: override skeleton synthesized, body pending
#[derive(Debug, Clone, Copy)]
pub struct OverrideSkeletonSet;

/// Marker: ready to finalize
#[derive(Debug, Clone, Copy)]
pub struct Complete;

struct BuildContext<'e, M: TargetModule> {
    facade: Facade<'e, M>,
    writer: &'e dyn SignatureWriter<M::Method>,
    body_tag: String,
}

/// Entry point of the staged protocol
pub struct InsertableMethodBuilder<'e, M: TargetModule> {
    context: BuildContext<'e, M>,
}

impl<'e, M: TargetModule + 'e> InsertableMethodBuilder<'e, M> {
    /// Builder rendering overrides with [`JavaSignatureWriter`]
    pub fn new(engine: &'e mut dyn MutationEngine<M>) -> Self {
        Self::with_signature_writer(engine, &JavaSignatureWriter)
    }

    pub fn with_signature_writer(
        engine: &'e mut dyn MutationEngine<M>,
        writer: &'e dyn SignatureWriter<M::Method>,
    ) -> Self {
        Self {
            context: BuildContext {
                facade: Facade::new(engine),
                writer,
                body_tag: BODY_TAG.to_string(),
            },
        }
    }

    /// Take the body placeholder from configuration
    pub fn with_config(mut self, config: &WeaveConfig) -> Self {
        self.context.body_tag = config.insertion.body_tag.clone();
        self
    }

    pub fn set_target_module<'m>(self, module: &'m M) -> InsertionStage<'m, 'e, M, TargetModuleSet> {
        InsertionStage {
            draft: InsertionDraft {
                module: Some(module),
                ..InsertionDraft::default()
            },
            context: self.context,
            _stage: PhantomData,
        }
    }

    /// Resolve the target module by name through a provider
    pub fn set_target_module_named<'m, P>(
        self,
        provider: &'m P,
        name: &str,
    ) -> Result<InsertionStage<'m, 'e, M, TargetModuleSet>>
    where
        P: ModuleProvider<Module = M>,
    {
        let module = provider
            .module(name)
            .ok_or_else(|| WeaveError::ModuleNotFound(name.to_string()))?;
        Ok(self.set_target_module(module))
    }
}

/// One step of the staged protocol; `S` decides which calls are available.
///
/// `'m` borrows the target module and `'e` the engine and writer. A
/// finalized [`InsertionSpec`] keeps only `'m`, so the engine is free again
/// once `finalize` returns:
///
/// ```
/// use weavekit::testkit::RecordingEngine;
/// use weavekit::{ClassModel, Facade, InsertableMethodBuilder};
///
/// let target = ClassModel::new("Target");
/// let mut engine = RecordingEngine::new();
/// let insertion = InsertableMethodBuilder::<ClassModel>::new(&mut engine)
///     .set_target_module(&target)
///     .select_method_if_exists("foo")
///     .after_call_to("bar")
///     .with_body("log();")
///     .else_create_method_if_not_exists("void foo(){BODY}")
///     .finalize()
///     .unwrap();
/// Facade::<ClassModel>::new(&mut engine).apply(insertion).unwrap();
/// assert_eq!(engine.applied().len(), 1);
/// ```
///
/// A body cannot be given before an insertion point is chosen:
///
/// ```compile_fail
/// use weavekit::testkit::RecordingEngine;
/// use weavekit::{ClassModel, InsertableMethodBuilder};
///
/// let target = ClassModel::new("Target");
/// let mut engine = RecordingEngine::new();
/// let _ = InsertableMethodBuilder::<ClassModel>::new(&mut engine)
///     .set_target_module(&target)
///     .with_body("log();");
/// ```
///
/// Nor can a stage that only has its module be finalized:
///
/// ```compile_fail
/// use weavekit::testkit::RecordingEngine;
/// use weavekit::{ClassModel, InsertableMethodBuilder};
///
/// let target = ClassModel::new("Target");
/// let mut engine = RecordingEngine::new();
/// let _ = InsertableMethodBuilder::<ClassModel>::new(&mut engine)
///     .set_target_module(&target)
///     .finalize();
/// ```
///
/// Only one insertion point can be chosen:
///
/// ```compile_fail
/// use weavekit::testkit::RecordingEngine;
/// use weavekit::{ClassModel, InsertableMethodBuilder};
///
/// let target = ClassModel::new("Target");
/// let mut engine = RecordingEngine::new();
/// let _ = InsertableMethodBuilder::<ClassModel>::new(&mut engine)
///     .set_target_module(&target)
///     .select_method_if_exists("foo")
///     .after_call_to("bar")
///     .before_call_to("baz");
/// ```
///
/// Inserting into an existing method needs the fallback full method first:
///
/// ```compile_fail
/// use weavekit::testkit::RecordingEngine;
/// use weavekit::{ClassModel, InsertableMethodBuilder};
///
/// let target = ClassModel::new("Target");
/// let mut engine = RecordingEngine::new();
/// let _ = InsertableMethodBuilder::<ClassModel>::new(&mut engine)
///     .set_target_module(&target)
///     .select_method_if_exists("foo")
///     .after_call_to("bar")
///     .with_body("log();")
///     .finalize();
/// ```
pub struct InsertionStage<'m, 'e, M: TargetModule, S> {
    draft: InsertionDraft<'m, M>,
    context: BuildContext<'e, M>,
    _stage: PhantomData<S>,
}

impl<'m, 'e, M: TargetModule, S> InsertionStage<'m, 'e, M, S> {
    fn advance<T>(self) -> InsertionStage<'m, 'e, M, T> {
        InsertionStage {
            draft: self.draft,
            context: self.context,
            _stage: PhantomData,
        }
    }
}

impl<'m, 'e, M: TargetModule> InsertionStage<'m, 'e, M, TargetModuleSet> {
    /// Name the method to insert into.
    ///
    /// The name is not checked here: if the method does not exist when the
    /// insertion is applied, the fallback full method is added instead.
    pub fn select_method_if_exists(
        mut self,
        method_name: impl Into<String>,
    ) -> InsertionStage<'m, 'e, M, TargetMethodSet> {
        self.draft.target_method = Some(method_name.into());
        self.advance()
    }

    /// Synthesize an override of `method_name` with the body before the
    /// super call.
    pub fn before_override_of(
        self,
        method_name: &str,
    ) -> Result<InsertionStage<'m, 'e, M, OverrideSkeletonSet>> {
        self.synthesize_override(method_name, InsertionPoint::BeforeSuperCall)
    }

    /// Synthesize an override of `method_name` with the body after the
    /// super call.
    pub fn after_override_of(
        self,
        method_name: &str,
    ) -> Result<InsertionStage<'m, 'e, M, OverrideSkeletonSet>> {
        self.synthesize_override(method_name, InsertionPoint::AfterSuperCall)
    }

    fn synthesize_override(
        mut self,
        method_name: &str,
        point: InsertionPoint,
    ) -> Result<InsertionStage<'m, 'e, M, OverrideSkeletonSet>> {
        // always present once this stage is reached
        let module = self.draft.module.ok_or(WeaveError::IncompleteSpecification)?;
        let overridden = MethodResolver::resolve(module, method_name)?;

        let signature = self.context.writer.render_signature(overridden)?;
        let super_call = self.context.writer.render_super_call(overridden)?;
        let skeleton = override_skeleton(
            &signature,
            &super_call,
            &self.context.body_tag,
            point.is_before(),
        );
        log::info!("Creating override {}", skeleton);

        self.draft.target_method = Some(method_name.to_string());
        self.draft.insertion_point = Some(point);
        self.draft.full_method = Some(skeleton);
        Ok(self.advance())
    }
}

impl<'m, 'e, M: TargetModule> InsertionStage<'m, 'e, M, TargetMethodSet> {
    /// Insert the body before the first call to `callee`
    pub fn before_call_to(
        mut self,
        callee: impl Into<String>,
    ) -> InsertionStage<'m, 'e, M, InsertionPointSet> {
        self.draft.insertion_point = Some(InsertionPoint::BeforeCall(callee.into()));
        self.advance()
    }

    /// Insert the body after the first call to `callee`
    pub fn after_call_to(
        mut self,
        callee: impl Into<String>,
    ) -> InsertionStage<'m, 'e, M, InsertionPointSet> {
        self.draft.insertion_point = Some(InsertionPoint::AfterCall(callee.into()));
        self.advance()
    }
}

impl<'m, 'e, M: TargetModule> InsertionStage<'m, 'e, M, InsertionPointSet> {
    pub fn with_body(mut self, body: impl Into<String>) -> InsertionStage<'m, 'e, M, BodySet> {
        self.draft.body = Some(body.into());
        self.advance()
    }
}

impl<'m, 'e, M: TargetModule> InsertionStage<'m, 'e, M, BodySet> {
    /// Full method text used when the target method does not exist.
    ///
    /// The body placeholder inside it is replaced at finalize time.
    pub fn else_create_method_if_not_exists(
        mut self,
        full_method: impl Into<String>,
    ) -> InsertionStage<'m, 'e, M, Complete> {
        self.draft.full_method = Some(full_method.into());
        self.advance()
    }
}

impl<'m, 'e, M: TargetModule> InsertionStage<'m, 'e, M, OverrideSkeletonSet> {
    pub fn with_body(mut self, body: impl Into<String>) -> InsertionStage<'m, 'e, M, Complete> {
        self.draft.body = Some(body.into());
        self.advance()
    }

    /// Skeleton synthesized for the override, placeholder still in place
    pub fn skeleton(&self) -> &str {
        self.draft.full_method.as_deref().unwrap_or_default()
    }
}

impl<'m, 'e, M: TargetModule> InsertionStage<'m, 'e, M, Complete> {
    /// Validate the accumulated fields and build the insertion
    pub fn finalize(self) -> Result<InsertionSpec<'m, M>> {
        assemble(self.draft, &self.context.body_tag)
    }

    /// Finalize and hand the insertion to the mutation engine
    pub fn build_and_apply(self) -> anyhow::Result<()> {
        let InsertionStage {
            draft, mut context, ..
        } = self;
        let insertion = assemble(draft, &context.body_tag)?;
        context.facade.apply(insertion)
    }
}

fn assemble<'m, M: TargetModule>(
    draft: InsertionDraft<'m, M>,
    body_tag: &str,
) -> Result<InsertionSpec<'m, M>> {
    let fields = check_fields(draft)?;
    let full_method = merge_body(&fields.full_method, body_tag, &fields.body);
    Ok(InsertionSpec::new(
        fields.module,
        fields.target_method,
        fields.insertion_point,
        fields.body,
        full_method,
    ))
}

/// `signature { <tag> <super call> }`, or the super call first for `after`
fn override_skeleton(signature: &str, super_call: &str, body_tag: &str, before: bool) -> String {
    if before {
        format!("{signature} {{ {body_tag} {super_call} }}")
    } else {
        format!("{signature} {{ {super_call} {body_tag} }}")
    }
}
