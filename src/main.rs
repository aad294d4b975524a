use async_trait::async_trait;
use clap::Parser;
use commit_router::application::router::CommitRouter;
use commit_router::config::SwitchSettings;
use commit_router::domain::event::CommitEvent;
use commit_router::domain::ports::{ContextStore, ContextStoreRef, DirectProcessor};
use commit_router::domain::transaction::TransactionContext;
use commit_router::error::Result as CommitResult;
use commit_router::infrastructure::in_memory::InMemoryContextStore;
use commit_router::infrastructure::switch_http::HttpSwitchTransport;
use commit_router::interfaces::csv::event_reader::EventReader;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about = "Replay transfer commit events through the routing engine", long_about = None)]
struct Cli {
    /// Commit events CSV file
    events: PathBuf,

    /// JSON file with cached transaction contexts to seed the store
    #[arg(long)]
    contexts: PathBuf,

    /// Route commits through the interoperability switch
    #[arg(long)]
    integration: bool,

    /// Base URL of the switch API
    #[arg(long, default_value = "http://localhost:3000")]
    switch_url: String,

    /// Path to persistent context store (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,
}

/// Direct delivery for co-located FSPs: the replay tool only records that the
/// commit would have been applied locally.
struct LoggingDirectProcessor;

#[async_trait]
impl DirectProcessor for LoggingDirectProcessor {
    async fn commit(&self, event: &CommitEvent) -> CommitResult<()> {
        info!(
            transaction_id = %event.transaction_id,
            fsp = %event.current_fsp.id,
            "commit delivered to co-located FSP"
        );
        Ok(())
    }
}

fn open_store(cli: &Cli) -> Result<ContextStoreRef> {
    #[cfg(feature = "storage-rocksdb")]
    if let Some(db_path) = &cli.db_path {
        let store = commit_router::infrastructure::rocksdb::RocksDbContextStore::open(db_path)
            .into_diagnostic()?;
        return Ok(Arc::new(store));
    }

    #[cfg(not(feature = "storage-rocksdb"))]
    if cli.db_path.is_some() {
        eprintln!(
            "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
        );
    }

    Ok(Arc::new(InMemoryContextStore::new()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let settings = SwitchSettings {
        integration_enabled: cli.integration,
        base_url: cli.switch_url.clone(),
        ..SwitchSettings::default()
    };

    let store = open_store(&cli)?;

    // Seed the store with the negotiation state the commit phase expects.
    let contexts_file = File::open(&cli.contexts).into_diagnostic()?;
    let contexts: Vec<TransactionContext> =
        serde_json::from_reader(contexts_file).into_diagnostic()?;
    for context in contexts {
        store.put_context(context).await.into_diagnostic()?;
    }

    let transport = HttpSwitchTransport::new(&settings).into_diagnostic()?;
    let router = CommitRouter::new(
        store,
        Box::new(transport),
        Box::new(LoggingDirectProcessor),
        settings,
    );

    let path = if cli.integration { "switch" } else { "direct" };
    let events_file = File::open(&cli.events).into_diagnostic()?;
    let reader = EventReader::new(events_file);
    for event_result in reader.events() {
        match event_result {
            Ok(event) => match router.commit(&event).await {
                Ok(()) => println!("committed {} ({})", event.transaction_id, path),
                Err(e) => eprintln!("commit failed for {}: {}", event.transaction_id, e),
            },
            Err(e) => eprintln!("error reading commit event: {}", e),
        }
    }

    Ok(())
}
