//! BiasLens CLI
//!
//! The `biaslens` command analyzes an article for political leaning and
//! emotional charge from the terminal.
//!
//! ## Commands
//!
//! - `analyze`: Run the full multi-signal analysis on an article
//! - `domain`: Look up the reputation-table verdict for one publisher domain
//! - `emotion`: Score only emotional charge for a piece of text

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;

use biaslens_core::signals::domain_reputation;
use biaslens_core::{
    emotion, init_tracing, AnalysisError, AnalysisReport, Analyzer, AnalyzerConfig, ArticleInput,
    ArticleMetadata, ToneConfig, METRICS,
};

#[derive(Parser)]
#[command(name = "biaslens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Multi-signal political-leaning and emotional-charge analysis", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an article for political leaning and emotional charge
    Analyze {
        /// Path to an article JSON file ({"text": "...", "metadata": {...}})
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Inline body text (alternative to --file)
        #[arg(long)]
        text: Option<String>,

        /// Article headline
        #[arg(long, default_value = "")]
        title: String,

        /// Publisher domain
        #[arg(long, default_value = "")]
        domain: String,

        /// Canonical article URL
        #[arg(long, default_value = "")]
        url: String,

        /// Skip the network-backed tone signal (offline runs)
        #[arg(long)]
        skip_tone: bool,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up the reputation-table verdict for a publisher domain
    Domain {
        /// Domain to look up, e.g. `www.example.com`
        domain: String,
    },

    /// Score only emotional charge for a piece of text
    Emotion {
        /// Text to score (reads stdin when omitted)
        text: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    init_tracing(cli.json_logs, level);

    match cli.command {
        Commands::Analyze {
            file,
            text,
            title,
            domain,
            url,
            skip_tone,
            json,
        } => {
            let article = load_article(file, text, title, domain, url)?;
            let config = AnalyzerConfig {
                tone: ToneConfig::from_env(),
                skip_tone,
                ..Default::default()
            };
            let analyzer = Analyzer::new(config);

            match analyzer.analyze(&article).await {
                Ok(report) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    } else {
                        print_report(&report);
                    }
                    METRICS.flush();
                }
                Err(AnalysisError::NoEvidence { signals_supplied }) => {
                    bail!(
                        "analysis unavailable: no usable evidence \
                         ({signals_supplied} signal(s) supplied)"
                    );
                }
                Err(err) => return Err(err.into()),
            }
        }

        Commands::Domain { domain } => {
            let metadata = ArticleMetadata {
                domain: domain.clone(),
                ..Default::default()
            };
            match domain_reputation::evaluate(&metadata) {
                Some(signal) => {
                    println!(
                        "{domain}: score {:+.2}, confidence {:.2}",
                        signal.score, signal.confidence
                    );
                    println!("  {}", signal.explanation);
                }
                None => println!("{domain}: not recognized by any reputation stage"),
            }
        }

        Commands::Emotion { text } => {
            let text = match text {
                Some(text) => text,
                None => std::io::read_to_string(std::io::stdin())
                    .context("failed to read text from stdin")?,
            };
            let charge = emotion::analyze(&text);
            println!(
                "{} (score {:+.2}, intensity {:.2})",
                charge.label, charge.score, charge.intensity
            );
        }
    }

    Ok(())
}

/// Build the article from a JSON file or inline flags.
fn load_article(
    file: Option<PathBuf>,
    text: Option<String>,
    title: String,
    domain: String,
    url: String,
) -> Result<ArticleInput> {
    if let Some(path) = file {
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read article file {}", path.display()))?;
        let article: ArticleInput = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse article JSON in {}", path.display()))?;
        return Ok(article);
    }

    let Some(text) = text else {
        bail!("provide an article via --file or --text");
    };

    Ok(ArticleInput {
        text,
        metadata: ArticleMetadata {
            title,
            domain,
            url,
            author: None,
            date: None,
        },
    })
}

/// Human-readable report.
fn print_report(report: &AnalysisReport) {
    println!(
        "Political leaning: {} (score {:+.2}, confidence {:.2})",
        report.leaning.label, report.leaning.score, report.leaning.confidence
    );
    for signal in &report.signals {
        println!(
            "  {:<18} {:+.2} @ {:.2}  {}",
            signal.kind.to_string(),
            signal.score,
            signal.confidence,
            signal.explanation
        );
    }
    println!(
        "Emotional charge:  {} (score {:+.2}, intensity {:.2})",
        report.emotion.label, report.emotion.score, report.emotion.intensity
    );
}
