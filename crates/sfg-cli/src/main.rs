use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use sfg_core::config::{self, NamingTables};
use sfg_core::{CodeGenerator, parse, transform};
use sfg_rust_client::RustClientGenerator;

#[derive(Parser)]
#[command(
    name = "sfg",
    about = "Generate storefront Rust types from a GraphQL introspection schema",
    version
)]
struct Cli {
    /// Path to the introspection schema JSON
    input: Option<PathBuf>,

    /// Destination file for the generated artifact
    #[arg(short, long, default_value = "crates/storefront/src/types.rs")]
    output: PathBuf,

    /// Naming-table extensions (defaults to .sfg.yaml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let input = cli
        .input
        .unwrap_or_else(|| ["schema", "2022-01", "schema.json"].iter().collect());

    let tables = load_tables(cli.config.as_deref())?;

    let content =
        fs::read_to_string(&input).with_context(|| format!("failed to read {}", input.display()))?;

    let doc = parse::from_json(&content)
        .with_context(|| format!("failed to parse {}", input.display()))?;

    let types = transform::emit(&doc, &tables)?;
    log::info!("generated {} declarations", types.len());

    let files = RustClientGenerator.generate(&types)?;
    let Some(artifact) = files.into_iter().next() else {
        anyhow::bail!("generator produced no artifact");
    };

    // The destination is only touched once the whole artifact is in memory.
    fs::write(&cli.output, artifact.content)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    eprintln!("wrote {}", cli.output.display());

    Ok(())
}

/// Build the naming tables, extending the defaults from an explicit config
/// path or the conventional `.sfg.yaml` when present.
fn load_tables(path: Option<&Path>) -> Result<NamingTables> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(config::CONFIG_FILE_NAME));

    let loaded = config::load_config(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    Ok(match loaded {
        Some(cfg) => NamingTables::default().with_config(cfg),
        None => NamingTables::default(),
    })
}
