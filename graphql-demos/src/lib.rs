//! Small GraphQL services demonstrating how to stand up a GraphQL HTTP endpoint with
//! [`async_graphql`]. The crate consists of three independent demos, each of which builds its own
//! [schema](graphql) and serves it over HTTP:
//!
//! * [`current_user`](graphql::current_user), a schema whose resolvers deliberately fail, showing
//!   how resolver errors surface next to partial data in a GraphQL response.
//! * [`messages`](graphql::messages), a two-type schema backed by a fake asynchronous
//!   [store] which simulates the latency and failures of a real database.
//! * [`users`](graphql::users), a minimal single-type query resolved synchronously from fixture
//!   data.
//!
//! Query parsing, execution and response formatting are all handled by [`async_graphql`]. With the
//! `server` feature enabled (the default), the [`server`] module mounts any of these schemas on an
//! HTTP endpoint, complete with an in-browser GraphiQL console.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

pub mod graphql;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;
pub mod store;

/// Initialize tracing.
pub fn init_logging() {
    static ONCE: Once = Once::new();

    ONCE.call_once(|| {
        // This only fails if a hook is already installed, in which case we keep that one.
        color_eyre::install().ok();
        tracing_subscriber::fmt()
            .with_ansi(true)
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    });
}
