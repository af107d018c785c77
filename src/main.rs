use bankform::application::engine::ReplayEngine;
use bankform::application::view::BankFormView;
use bankform::domain::ports::StateStoreBox;
use bankform::infrastructure::in_memory::InMemoryStateStore;
use bankform::interfaces::csv::event_reader::EventReader;
use bankform::interfaces::csv::view_writer::ViewWriter;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{Level, error};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input CSV of recorded linking events
    input: PathBuf,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Minimum level of log messages written to stderr
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

fn open_store(db_path: Option<PathBuf>) -> Result<StateStoreBox> {
    match db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(db_path) => {
            let store = bankform::infrastructure::rocksdb::RocksDBStore::open(db_path)
                .into_diagnostic()?;
            Ok(Box::new(store))
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(_) => {
            tracing::warn!(
                "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
            );
            Ok(Box::new(InMemoryStateStore::new()))
        }
        None => Ok(Box::new(InMemoryStateStore::new())),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_max_level(cli.log_level)
        .init();

    let engine = ReplayEngine::new(open_store(cli.db_path)?);

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = EventReader::new(file);
    for command in reader.commands() {
        match command {
            Ok(command) => {
                let session = command.session();
                if let Err(e) = engine.process(command).await {
                    error!(session, "Error processing event: {}", e);
                }
            }
            Err(e) => {
                error!("Error reading event: {}", e);
            }
        }
    }

    let sessions = engine.into_results().await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = ViewWriter::new(stdout.lock());
    writer
        .write_views(
            sessions
                .iter()
                .map(|(session, state)| BankFormView::new(*session, state)),
        )
        .into_diagnostic()?;

    Ok(())
}
