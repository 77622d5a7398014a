//! The demo GraphQL schemas.
//!
//! Each submodule is an independent schema with its own `Query` root and object types. The schemas
//! share nothing but the [`Backend`] they resolve against and the [`builder`] used to assemble
//! them.

use crate::store::DataSource;
use async_graphql::{
    extensions::Tracing, ObjectType, PathSegment, QueryPathSegment, SchemaBuilder, ServerError,
};
use std::sync::Arc;

pub mod current_user;
pub mod messages;
pub mod users;

// Re-export commonly used `async_graphql` types.
pub use async_graphql::{
    value, Context, EmptyMutation, EmptySubscription, Object, Result, Schema, ID,
};

// Re-export `async_graphql` directly as an escape hatch.
pub extern crate async_graphql;

/// The data store resolvers read from.
///
/// A schema which needs a store gets one injected as schema data, and resolvers fetch it from the
/// [`Context`].
pub type Backend = Arc<dyn DataSource>;

/// Start building a query-only schema with the extensions every demo uses.
pub fn builder<Query>(query: Query) -> SchemaBuilder<Query, EmptyMutation, EmptySubscription>
where
    Query: ObjectType + 'static,
{
    Schema::build(query, EmptyMutation, EmptySubscription).extension(Tracing)
}

/// Resolve a nullable field, reporting a failure against that field alone.
///
/// Returning an `Err` from a resolver of a nullable field nulls out the nearest nullable ancestor
/// as well. Demos which want partial data with per-field errors resolve through this instead: on
/// failure the error is recorded with the path of the field being resolved and the field itself
/// becomes `null`.
pub fn nullable<T>(ctx: &Context<'_>, res: Result<T>) -> Option<T> {
    match res {
        Ok(value) => Some(value),
        Err(err) => {
            let err = err.into_server_error(ctx.item.pos);
            ctx.add_error(ServerError {
                path: field_path(ctx),
                ..err
            });
            None
        }
    }
}

/// The response path of the field `ctx` is resolving, from the root down.
fn field_path(ctx: &Context<'_>) -> Vec<PathSegment> {
    let mut path = match &ctx.path_node {
        Some(node) => std::iter::once(node)
            .chain(node.parents())
            .map(|node| match node.segment {
                QueryPathSegment::Name(name) => PathSegment::Field(name.to_string()),
                QueryPathSegment::Index(idx) => PathSegment::Index(idx),
            })
            .collect(),
        None => Vec::new(),
    };
    path.reverse();
    path
}
