//! Serve a schema whose `User.name` and `User.role` resolvers always fail.
//!
//! Try `{ getCurrentUser { id name role } }` to see partial data alongside resolver errors.

use clap::Parser;
use graphql_demos::{graphql::current_user, init_logging, server::ServerOptions};

#[async_std::main]
async fn main() -> color_eyre::Result<()> {
    init_logging();
    let opt = ServerOptions::parse();
    graphql_demos::server::run(current_user::schema(), &opt).await
}
