use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufRead, BufReader};

use scene_nav::config::Config;
use scene_nav::console::{drive, render, Console};
use scene_nav::logging::init_tracing;
use scene_nav::ui::scenes::app::{AppReducer, AppState};
use scene_nav::ui::store::Store;

/// Drive the scene hierarchy from line commands.
///
/// Reproduce the stale-route case with:
/// `present a`, `a leaf`, `open tca20221220://nothing`, `a leaf dismiss`,
/// `diagnostics`.
#[derive(Debug, Parser)]
#[command(name = "scene-nav", version)]
struct Cli {
    /// Config file (default: ~/.config/scene-nav/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read commands from this file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging);

    let adapter = config.deep_link_adapter()?;
    let mut store = Store::<AppReducer>::new(AppState::default(), config.store.clone());
    let console = Console::new(adapter, &store);

    let input: Box<dyn AsyncBufRead + Unpin + Send> = match &cli.script {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open script '{}'", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };

    println!("{}", render(&store.snapshot()));

    tokio::select! {
        result = drive(input, &console, &mut store, |text| println!("{}", text)) => {
            result.context("Failed to read commands")?
        }
        _ = tokio::signal::ctrl_c() => tracing::info!("interrupted"),
    }

    for diagnostic in store.diagnostics() {
        println!("diagnostic: {}", diagnostic);
    }

    Ok(())
}
