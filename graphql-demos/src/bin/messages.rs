//! Serve messages and their authors from a slow fake database.
//!
//! Try `{ getMessage(id: "message001") { id content author { id name } } }`, or ask for a message
//! which does not exist to see the lookup failure.

use clap::Parser;
use graphql_demos::{graphql::messages, init_logging, prelude::*, server::ServerOptions};
use std::time::Duration;

#[derive(Clone, Debug, Parser)]
struct Options {
    #[clap(flatten)]
    server: ServerOptions,
    /// Simulated latency of every database lookup, in milliseconds.
    #[clap(
        long,
        env = "GRAPHQL_DEMO_LATENCY_MS",
        default_value_t = fixtures::MESSAGE_BOARD_LATENCY.as_millis() as u64
    )]
    latency_ms: u64,
}

#[async_std::main]
async fn main() -> color_eyre::Result<()> {
    init_logging();
    let opt = Options::parse();
    let db = fixtures::message_board()?.with_latency(Duration::from_millis(opt.latency_ms));
    tracing::debug!(latency = ?db.latency(), records = db.len(), "loaded fake database");
    graphql_demos::server::run(messages::schema(db), &opt.server).await
}
