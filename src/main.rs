use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use frontend_entrypoints::{
  EntrypointBuilder, ProjectConfig, ProjectLayout, normalize_manifest_file,
};

/// Entrypoint discovery and manifest cleanup for multi-package frontend builds.
#[derive(Debug, Parser)]
#[command(name = "frontend-entrypoints", version, about)]
struct Cli {
  /// Enable debug logging.
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Only log errors.
  #[arg(short, long, global = true, conflicts_with = "verbose")]
  quiet: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// Print the resolved entrypoint table as JSON.
  Entries(ProjectArgs),
  /// Clean the bundler manifest after a build.
  CleanManifest {
    #[command(flatten)]
    project: ProjectArgs,

    /// Manifest to rewrite instead of the configured one.
    #[arg(long)]
    manifest: Option<PathBuf>,
  },
}

#[derive(Debug, Args)]
struct ProjectArgs {
  /// Project root; defaults to the current directory.
  #[arg(long)]
  root: Option<PathBuf>,

  /// Configuration file; defaults to `entrypoints.config.{json,yaml,yml}` in the root.
  #[arg(long)]
  config: Option<PathBuf>,
}

impl ProjectArgs {
  fn layout(&self) -> Result<ProjectLayout> {
    let root = match &self.root {
      Some(root) => root.clone(),
      None => std::env::current_dir().context("failed to determine current directory")?,
    };
    let root = absolute(&root)?;

    let config = match &self.config {
      Some(path) => ProjectConfig::from_path(path)?,
      None => ProjectConfig::discover(&root)?,
    };
    Ok(config.into_layout(&root))
  }
}

fn absolute(path: &Path) -> Result<PathBuf> {
  if path.is_absolute() {
    return Ok(path.to_path_buf());
  }
  let cwd = std::env::current_dir().context("failed to determine current directory")?;
  Ok(frontend_entrypoints::asset_paths::clean_path(&cwd.join(path)))
}

fn init_logger(verbose: bool, quiet: bool) {
  let filter = if verbose {
    EnvFilter::new("frontend_entrypoints=debug")
  } else if quiet {
    EnvFilter::new("frontend_entrypoints=error")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("frontend_entrypoints=info"))
  };

  let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

  tracing_subscriber::registry()
    .with(filter)
    .with(fmt_layer)
    .init();
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logger(cli.verbose, cli.quiet);

  match cli.command {
    Command::Entries(project) => {
      let layout = project.layout()?;
      let artifacts = EntrypointBuilder::new(&layout).build()?;
      let json = serde_json::to_string_pretty(&artifacts.entrypoints.to_bundler_input())
        .context("failed to serialise entrypoints")?;
      println!("{json}");
    }
    Command::CleanManifest { project, manifest } => {
      let layout = project.layout()?;
      let builder = EntrypointBuilder::new(&layout);
      let artifacts = builder.build()?;
      let manifest_path = manifest.unwrap_or_else(|| layout.manifest_path.clone());
      info!(out_dir = %layout.out_dir.display(), manifest = %manifest_path.display(), "cleaning bundler manifest");

      if normalize_manifest_file(&manifest_path, &builder.manifest_normalizer(&artifacts))?.is_none() {
        info!("nothing to clean");
      }
    }
  }

  Ok(())
}
