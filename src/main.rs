//! Command-line interface for phony
//!
//! # Usage Examples
//!
//! ```bash
//! # Ten fake users, one every 100ms
//! echo '{"name": "{{ name }}", "email": "{{ email }}"}' \
//!   | phony --tick 100ms --max 10
//!
//! # Reproducible output from a template file with a custom word list
//! phony --seed 42 --wordlist words.yaml --max 5 access_log.tmpl
//!
//! # Show every generator name
//! phony --list
//! ```

use anyhow::Context;
use clap::Parser;
use phony::{PhonyOpts, Schedule};
use phony_core::Registry;
use tokio::io::AsyncReadExt;

#[derive(Parser)]
#[command(name = "phony")]
#[command(version)]
#[command(about = "Render templates of fake data on a fixed schedule")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    opts: PhonyOpts,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("phony: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = cli.opts;

    let words = opts.load_wordlist()?;
    let registry = Registry::builtin(&words);

    if opts.list {
        print!("{}", phony::format_list(registry.list()));
        return Ok(());
    }

    let text = read_template(&opts).await?;
    let renderer = phony::compile(&text, opts.choice_line)?;

    let template = phony_template::Template::compile(&text);
    let unresolved = phony_template::unresolved(&template, &registry);
    if !unresolved.is_empty() {
        tracing::warn!(?unresolved, "Template references unknown generators");
    }

    tracing::info!(
        tick = ?opts.tick,
        max = ?opts.max,
        choice_line = opts.choice_line,
        seeded = opts.seed.is_some(),
        placeholders = template.placeholders().count(),
        "Starting phony"
    );

    let mut rng = opts.rng();
    let schedule = Schedule::new(opts.tick, opts.max);
    let mut stdout = tokio::io::stdout();
    let shutdown = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    let emitted = phony::emit(
        renderer.as_ref(),
        &registry,
        &mut rng,
        &schedule,
        &mut stdout,
        shutdown,
    )
    .await?;

    tracing::info!(emitted, "Done");
    Ok(())
}

async fn read_template(opts: &PhonyOpts) -> anyhow::Result<String> {
    match &opts.template {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read template {}", path.display())),
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("Failed to read template from stdin")?;
            Ok(text)
        }
    }
}
