//! Serve a minimal schema looking up users by ID.
//!
//! Try `{ user(id: "a") { id name } }`.

use clap::Parser;
use graphql_demos::{graphql::users, init_logging, prelude::*, server::ServerOptions};

#[async_std::main]
async fn main() -> color_eyre::Result<()> {
    init_logging();
    let opt = ServerOptions::parse();
    let schema = users::schema(fixtures::directory()?);
    graphql_demos::server::run(schema, &opt).await
}
