//! restree - render resource graphs as ASCII trees and orphan tables.
//!
//! Usage:
//!   restree SNAPSHOT                        Tree of managed resources
//!   restree SNAPSHOT tree --detailed        Tree with age and reason
//!   restree SNAPSHOT resources              Resources with a parent
//!   restree SNAPSHOT resources --orphaned   Orphaned resources
//!   restree SNAPSHOT resources --all        Both tables
//!   restree --help                          Show help

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use restree_core::{Detail, RenderConfig, Snapshot};
use restree_render::{Selection, TabWriter, render_listing, render_tree_view};

#[derive(Parser)]
#[command(
    name = "restree",
    version,
    about = "Render resource graphs as ASCII trees and orphan tables",
    long_about = "restree reads a JSON snapshot of a resource graph and prints it as a \
                  connector-drawn tree or as flat orphaned/not-orphaned tables.\n\n\
                  Pass `-` as SNAPSHOT to read from stdin. Set RESTREE_LOG to \
                  control diagnostics on stderr."
)]
struct Cli {
    /// Snapshot file (`-` for stdin)
    snapshot: PathBuf,

    /// Omit the header line
    #[arg(long, global = true)]
    no_headers: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print managed resources as a tree
    Tree {
        /// Add age and health reason columns
        #[arg(short, long)]
        detailed: bool,
    },

    /// List resources as a flat table
    Resources {
        /// List orphaned resources instead of managed ones
        #[arg(short, long, conflicts_with = "all")]
        orphaned: bool,

        /// List managed and orphaned resources
        #[arg(short, long)]
        all: bool,

        /// Add age, health, and reason columns
        #[arg(short, long)]
        detailed: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("RESTREE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let snapshot = load_snapshot(&cli.snapshot)?;
    tracing::debug!(
        nodes = snapshot.nodes.len(),
        orphaned = snapshot.orphaned_nodes.len(),
        resources = snapshot.resources.len(),
        "loaded snapshot"
    );

    match cli.command.unwrap_or(Command::Tree { detailed: false }) {
        Command::Tree { detailed } => {
            let config = render_config(detailed, cli.no_headers)?;
            run_tree(&snapshot, &config)?;
        }
        Command::Resources {
            orphaned,
            all,
            detailed,
        } => {
            let selection = if all {
                Selection::All
            } else if orphaned {
                Selection::Orphaned
            } else {
                Selection::Managed
            };
            let config = render_config(detailed, cli.no_headers)?;
            run_resources(&snapshot, selection, &config)?;
        }
    }

    Ok(())
}

/// Read a snapshot from a file or stdin.
fn load_snapshot(path: &Path) -> Result<Snapshot> {
    if path == Path::new("-") {
        Snapshot::from_reader(io::stdin().lock()).context("Failed to read snapshot from stdin")
    } else {
        Snapshot::from_path(path)
            .with_context(|| format!("Failed to load snapshot {}", path.display()))
    }
}

fn render_config(detailed: bool, no_headers: bool) -> Result<RenderConfig> {
    let detail = if detailed {
        Detail::Detailed
    } else {
        Detail::Terse
    };
    RenderConfig::builder()
        .detail(detail)
        .show_headers(!no_headers)
        .build()
        .context("Invalid render configuration")
}

/// Print the managed resources as a tree.
fn run_tree(snapshot: &Snapshot, config: &RenderConfig) -> Result<()> {
    let tree = snapshot.managed_tree().context("Invalid resource graph")?;
    let overlay = snapshot.overlay();

    let mut out = TabWriter::new(io::stdout().lock()).padding(config.padding);
    render_tree_view(&tree, Some(&overlay), config, &mut out).context("Render failed")?;
    out.flush()?;

    Ok(())
}

/// Print orphaned and/or not-orphaned resources as flat tables.
fn run_resources(snapshot: &Snapshot, selection: Selection, config: &RenderConfig) -> Result<()> {
    let managed = snapshot.managed_tree().context("Invalid resource graph")?;
    let orphaned = snapshot
        .orphaned_tree()
        .context("Invalid orphaned resource graph")?;

    let mut out = TabWriter::new(io::stdout().lock()).padding(config.padding);
    render_listing(&managed, &orphaned, selection, config, &mut out).context("Render failed")?;
    out.flush()?;

    Ok(())
}
