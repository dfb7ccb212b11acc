use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tiny_ledger::{
    config::Config,
    http::Service,
    logging::init_logging,
    store::{SharedLedger, in_memory_store::InMemoryLedgerStore},
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config.log_level, config.log_format);

    let ledger: SharedLedger = Arc::new(InMemoryLedgerStore::seeded());
    Service::new(ledger).run(config.listen).await
}
