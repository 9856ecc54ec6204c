//! glyphgen CLI entry point

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use glyphgen::{config, Cli, DefaultTransform, OutputFormat, Pipeline, PipelineOptions};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

async fn run(cli: Cli) -> glyphgen::Result<String> {
    // 1. Load the icon table
    let specs = config::load(&cli.config).await?;

    // 2. Run the pipeline
    let mut pipeline = Pipeline::new(
        PipelineOptions {
            svg_path: cli.svg_path,
            out_dir: cli.out_dir,
            declarations: !cli.no_declarations,
        },
        Arc::new(DefaultTransform),
    );
    let summary = pipeline.run(&specs).await?;

    // 3. Render the summary in the requested format
    Ok(match cli.format {
        OutputFormat::Text => summary.format_text(),
        OutputFormat::Json => serde_json::to_string_pretty(&summary).unwrap_or_default(),
    })
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "glyphgen=debug"
    } else {
        "glyphgen=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
