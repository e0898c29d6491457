pub mod app;
pub mod config;
pub mod keymap;
pub mod render;

use std::io::{self, BufRead};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::Session;

use crate::app::{App, Flow};
use crate::config::Config;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();

    // Logs go to stderr so they never interleave with the card display.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let session = Session::new(&config.session_settings());
    let stdout = io::stdout();
    let mut app = App::new(session, config.json, stdout.lock());

    if let Some(path) = &config.vocab {
        tracing::info!(path = %path.display(), "loading vocabulary");
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read vocabulary file {}", path.display()))?;
        app.add_vocabulary(&text)?;
    } else {
        app.show()?;
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while let Some(line) = lines.next() {
        match app.handle_line(&line?)? {
            Flow::Continue => {}
            Flow::ReadVocabulary => {
                let mut block = String::new();
                for line in lines.by_ref() {
                    let line = line?;
                    if line.trim().is_empty() {
                        break;
                    }
                    block.push_str(&line);
                    block.push('\n');
                }
                app.add_vocabulary(&block)?;
            }
            Flow::Quit => break,
        }
    }

    Ok(())
}
