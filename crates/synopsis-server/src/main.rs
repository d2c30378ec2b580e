//! Synopsis: extractive text summarization server and CLI.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use synopsis_core::{LengthTier, SynopsisConfig};
use synopsis_extract::export::render_report;
use synopsis_extract::file::read_document;
use synopsis_extract::pipeline::clean_text;
use synopsis_extract::{create_backend, BatchRunner, SummaryMetrics, Table};
use synopsis_server::{batch, build_router, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn resolve_data_dir() -> PathBuf {
    std::env::var("SYNOPSIS_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let exe_dir = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()));
            if let Some(dir) = exe_dir {
                let parent_data = dir.join("../data");
                if parent_data.exists() {
                    return parent_data;
                }
            }
            PathBuf::from("data")
        })
}

fn parse_tier(arg: Option<&String>, default: LengthTier) -> anyhow::Result<LengthTier> {
    match arg {
        Some(raw) => Ok(raw.parse()?),
        None => Ok(default),
    }
}

fn print_help() {
    println!("Synopsis: extractive text summarization");
    println!();
    println!("Usage: synopsis [command]");
    println!();
    println!("Commands:");
    println!("  (none)                                  Start the server");
    println!("  summarize <file> [short|medium|long]    Summarize a text or markdown file");
    println!("  batch <csv> <column> [tier] [max_rows]  Summarize one column of a CSV file");
    println!("  help                                    Show this help message");
}

fn run_summarize(config: &SynopsisConfig, args: &[String]) -> anyhow::Result<()> {
    let Some(path) = args.first() else {
        anyhow::bail!("Usage: synopsis summarize <file> [short|medium|long]");
    };
    let tier = parse_tier(args.get(1), config.default_length)?;

    let text = read_document(Path::new(path)).with_context(|| format!("reading {}", path))?;
    let backend = create_backend(config.limits.max_words);

    let start = Instant::now();
    let summary = backend.summarize(&text, tier);
    let original = clean_text(&text);
    let metrics = SummaryMetrics::compute(&original, &summary);
    print!("{}", render_report(&original, &summary, &metrics, start.elapsed()));
    Ok(())
}

fn run_batch(config: &SynopsisConfig, args: &[String]) -> anyhow::Result<()> {
    let (Some(path), Some(column)) = (args.first(), args.get(1)) else {
        anyhow::bail!("Usage: synopsis batch <csv> <column> [tier] [max_rows]");
    };
    let tier = parse_tier(args.get(2), config.default_length)?;
    let max_rows = match args.get(3) {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("invalid max_rows '{}'", raw))?,
        None => config.batch.default_rows,
    };

    let table = Table::open(Path::new(path)).with_context(|| format!("reading {}", path))?;
    let backend = create_backend(config.limits.max_words);
    let report = BatchRunner::new(tier, max_rows).run(&table, column, backend.as_ref())?;

    let stem = Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("batch");
    let out = config
        .data_paths
        .exports
        .join(format!("{}_summaries.csv", stem));
    std::fs::write(&out, report.to_csv()?)?;

    println!(
        "Summarized {} of {} rows ({:.1}% success). Results: {}",
        report.summarized,
        report.records.len(),
        report.success_rate,
        out.display()
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let data_dir = resolve_data_dir();
    let config = SynopsisConfig::from_env(&data_dir)?;

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "summarize" => return run_summarize(&config, &args[2..]),
            "batch" => return run_batch(&config, &args[2..]),
            "--help" | "-h" | "help" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'synopsis help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    info!("Data directory: {}", data_dir.display());
    let port = config.port;

    let backend = create_backend(config.limits.max_words);
    let state = Arc::new(AppState::new(config, backend));

    // Start background batch queue
    batch::start_batch_worker(state.clone());

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Synopsis server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
