//! Shared reactor run
//!
//! Loads the workspace and configuration, computes the build plan, then
//! prints it or hands it to the build tool.

use std::path::Path;

use anyhow::Result;

use crate::cli::output::{print_plan, OutputConfig};
use crate::core::config::{Mode, ReactorConfig, Request};
use crate::core::global_config::GlobalConfig;
use crate::core::pipeline::{self, BuildPlan};
use crate::core::workspace::WorkspaceManifest;
use crate::error::ReactorError;
use crate::infra::dirs::ReactorDirs;
use crate::infra::invoker::{Invoker, ProcessInvoker};
use crate::infra::scm::provider_for;

/// Plan and run one reactor invocation
pub fn run_reactor(base_dir: &Path, mode: Mode, request: Request, output: &OutputConfig) -> Result<()> {
    let (config, plan) = plan_for(base_dir, mode, request)?;

    if config.print_only {
        return print_plan(&plan, output);
    }

    if plan.is_empty() {
        output.info("Nothing to build");
        return Ok(());
    }

    build(&config, &plan, output)?;
    output.success(&format!("Built {} projects", plan.projects.len()));
    Ok(())
}

fn plan_for(base_dir: &Path, mode: Mode, request: Request) -> Result<(ReactorConfig, BuildPlan), ReactorError> {
    let workspace = WorkspaceManifest::load(base_dir)?;
    let global = GlobalConfig::load(&ReactorDirs::new())?;
    let config = ReactorConfig::resolve(base_dir.to_path_buf(), mode, request, &workspace, &global);

    let graph = workspace.graph(base_dir, config.default_group.as_deref())?;
    tracing::info!("Loaded {} projects from {}", graph.len(), base_dir.display());

    let changed_files = if mode == Mode::MakeScmChanges {
        provider_for(config.scm_connection.as_deref())?.changed_files(base_dir)?
    } else {
        Vec::new()
    };

    let plan = pipeline::plan(&config, &graph, &changed_files)?;
    Ok((config, plan))
}

fn build(config: &ReactorConfig, plan: &BuildPlan, output: &OutputConfig) -> Result<(), ReactorError> {
    let progress = output.build_bar(plan.projects.len() as u64);
    let invoker = ProcessInvoker::locate(&config.executable, progress)?;
    invoker.invoke(plan, &config.base_dir)?;
    Ok(())
}
