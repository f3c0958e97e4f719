// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quire::{Corpus, QuestionAnswerer};

mod cli;
use cli::{display, Cli};

/// Env var holding a tracing filter directive, e.g. `QUIRE_LOG=quire=debug`.
const LOG_ENV: &str = "QUIRE_LOG";

fn main() -> ExitCode {
    // Usage errors exit with clap's usage message and code 2
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "quire=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.answer_config().context("invalid configuration")?;
    let corpus = load(&cli.corpus)
        .with_context(|| format!("failed to load corpus from {}", cli.corpus.display()))?;

    let question = match &cli.query {
        Some(query) => query.clone(),
        None => display::prompt_query().context("failed to read query from stdin")?,
    };

    let answerer = QuestionAnswerer::new(&corpus, config);
    let answer = answerer.answer(&question)?;

    if cli.json {
        display::print_json(&answer).context("failed to serialize answer")?;
        return Ok(());
    }
    if cli.verbose {
        display::print_ranking(&answer);
    }
    display::print_answer(&answer);
    Ok(())
}

#[cfg(feature = "parallel")]
fn load(dir: &Path) -> Result<Corpus> {
    use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

    let progress = ProgressBar::new(0);
    // Hidden unless stderr is a terminal
    progress.set_draw_target(ProgressDrawTarget::stderr());
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.cyan} Loading [{bar:30.cyan/dim}] {pos}/{len}")
    {
        progress.set_style(style.progress_chars("━━╸"));
    }

    let corpus = quire::load_corpus_with_progress(dir, &progress);
    progress.finish_and_clear();
    Ok(corpus?)
}

#[cfg(not(feature = "parallel"))]
fn load(dir: &Path) -> Result<Corpus> {
    Ok(quire::load_corpus(dir)?)
}
