//! FNOL Router - command line tool
//!
//! Reads one FNOL document (PDF or plain text), runs it through the claim
//! pipeline and prints the decision as JSON.
//!
//! # Usage
//!
//! ```bash
//! fnol-route claim.pdf
//! fnol-route claim.txt --rules rules.toml --output decision.json
//! ```

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use core_kernel::read_document_text;
use domain_claims::{ClaimPipeline, RuleSetConfig};
use infra_docs::DocumentLoader;
use interface_api::telemetry::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "fnol-route", version, about = "Route a First Notice of Loss document")]
struct Cli {
    /// FNOL document to process (.pdf, .txt)
    path: PathBuf,

    /// Rule set file (TOML, JSON or YAML)
    #[arg(short, long, env = "FNOL_RULES")]
    rules: Option<PathBuf>,

    /// Write the decision to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print compact JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, false);

    let rules = match &cli.rules {
        Some(path) => RuleSetConfig::load(path)
            .with_context(|| format!("failed to load rule set {}", path.display()))?,
        None => RuleSetConfig::default(),
    };
    let pipeline = ClaimPipeline::from_config(&rules).context("invalid rule set")?;

    let text = read_document_text(&DocumentLoader::new(), &cli.path)
        .with_context(|| format!("failed to read {}", cli.path.display()))?;

    let decision = pipeline.process(&text);
    let json = if cli.compact {
        serde_json::to_string(&decision)?
    } else {
        decision.to_json_pretty()?
    };

    match &cli.output {
        Some(out) => std::fs::write(out, format!("{json}\n"))
            .with_context(|| format!("failed to write {}", out.display()))?,
        None => println!("{json}"),
    }

    tracing::debug!(route = %decision.recommended_route(), "Decision written");
    Ok(())
}
