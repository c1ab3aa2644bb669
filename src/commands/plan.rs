//! `weavekit plan`: drive the staged builder from a TOML manifest.
//!
//! ```toml
//! [[class]]
//! name = "Base"
//! [[class.method]]
//! name = "foo"
//!
//! [[class]]
//! name = "Target"
//! superclass = "Base"
//!
//! [insertion]
//! mode = "before-override"
//! class = "Target"
//! method = "foo"
//! body = "log();"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::builders::InsertableMethodBuilder;
use crate::config::{load_config, load_config_from, OutputFormat, WeaveConfig};
use crate::core::traits::{MutationEngine, TargetModule};
use crate::core::{ClassDecl, ClassModel, ClassPool};
use crate::insertion::{InsertionSpec, InsertionSummary};

/// Classes to load and the insertion to plan against them
#[derive(Debug, Clone, Deserialize)]
pub struct PlanManifest {
    #[serde(default, rename = "class")]
    pub classes: Vec<ClassDecl>,
    pub insertion: InsertionRequest,
}

/// One insertion, tagged by `mode`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum InsertionRequest {
    BeforeCall {
        class: String,
        method: String,
        call: String,
        body: String,
        full_method: String,
    },
    AfterCall {
        class: String,
        method: String,
        call: String,
        body: String,
        full_method: String,
    },
    BeforeOverride {
        class: String,
        method: String,
        body: String,
    },
    AfterOverride {
        class: String,
        method: String,
        body: String,
    },
}

#[derive(Debug, Clone)]
pub struct PlanConfig {
    pub manifest: PathBuf,
    pub format: Option<OutputFormat>,
    pub config: Option<PathBuf>,
}

/// Engine that keeps the insertion instead of rewriting anything
#[derive(Default)]
struct DryRun {
    planned: Option<InsertionSummary>,
}

impl<M: TargetModule> MutationEngine<M> for DryRun {
    fn add_or_insert_method(&mut self, insertion: &InsertionSpec<'_, M>) -> Result<()> {
        log::info!(
            "Planned insertion into {}.{}",
            insertion.module().name(),
            insertion.target_method_name()
        );
        self.planned = Some(insertion.summary());
        Ok(())
    }
}

/// Build the class pool and run the requested protocol to completion
pub fn plan_insertion(manifest: &PlanManifest, config: &WeaveConfig) -> Result<InsertionSummary> {
    let pool = ClassPool::from_decls(&manifest.classes)?;
    let mut dry_run = DryRun::default();

    let builder = InsertableMethodBuilder::<ClassModel>::new(&mut dry_run).with_config(config);
    match &manifest.insertion {
        InsertionRequest::BeforeCall {
            class,
            method,
            call,
            body,
            full_method,
        } => builder
            .set_target_module_named(&pool, class)?
            .select_method_if_exists(method.as_str())
            .before_call_to(call.as_str())
            .with_body(body.as_str())
            .else_create_method_if_not_exists(full_method.as_str())
            .build_and_apply()?,
        InsertionRequest::AfterCall {
            class,
            method,
            call,
            body,
            full_method,
        } => builder
            .set_target_module_named(&pool, class)?
            .select_method_if_exists(method.as_str())
            .after_call_to(call.as_str())
            .with_body(body.as_str())
            .else_create_method_if_not_exists(full_method.as_str())
            .build_and_apply()?,
        InsertionRequest::BeforeOverride {
            class,
            method,
            body,
        } => builder
            .set_target_module_named(&pool, class)?
            .before_override_of(method)?
            .with_body(body.as_str())
            .build_and_apply()?,
        InsertionRequest::AfterOverride {
            class,
            method,
            body,
        } => builder
            .set_target_module_named(&pool, class)?
            .after_override_of(method)?
            .with_body(body.as_str())
            .build_and_apply()?,
    }

    dry_run
        .planned
        .context("Insertion was finalized but never reached the engine")
}

pub fn render_summary(summary: &InsertionSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Toml => Ok(toml::to_string_pretty(summary)?),
    }
}

pub fn run_plan(plan: PlanConfig) -> Result<()> {
    let config = match &plan.config {
        Some(path) => load_config_from(path)?,
        None => load_config(),
    };

    let contents = fs::read_to_string(&plan.manifest)
        .with_context(|| format!("Failed to read manifest {}", plan.manifest.display()))?;
    let manifest: PlanManifest = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse manifest {}", plan.manifest.display()))?;

    let summary = plan_insertion(&manifest, &config)?;
    let format = plan.format.unwrap_or(config.output.default_format);
    println!("{}", render_summary(&summary, format)?);

    Ok(())
}
