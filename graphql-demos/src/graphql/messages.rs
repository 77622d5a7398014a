//! A two-type schema resolved against a slow [`DataSource`](crate::store::DataSource).
//!
//! ```graphql
//! type Message {
//!   id: ID!
//!   content: String
//!   author: User
//! }
//!
//! type User {
//!   id: ID!
//!   name: String
//! }
//!
//! type Query {
//!   getMessage(id: ID!): Message
//! }
//! ```
//!
//! Both `getMessage` and `Message.author` perform an asynchronous lookup in the [`Backend`], so a
//! query for a message together with its author pays the store's latency twice. Lookups of missing
//! records show up as errors on the field which performed the lookup.

use super::{
    builder, nullable, Backend, Context, EmptyMutation, EmptySubscription, Object, Result, Schema,
    ID,
};
use crate::store;
use derive_more::From;
use std::sync::Arc;

/// A message exposed through the schema.
#[derive(Clone, Debug, From)]
pub struct Message(store::Message);

/// In app message
#[Object]
impl Message {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn content(&self) -> Option<&str> {
        Some(self.0.content.as_str())
    }

    /// Message author
    async fn author(&self, ctx: &Context<'_>) -> Option<User> {
        nullable(ctx, self.find_author(ctx).await)
    }
}

impl Message {
    async fn find_author(&self, ctx: &Context<'_>) -> Result<User> {
        // The request context is where authorization of the reader would happen.
        let db = ctx.data::<Backend>()?;
        Ok(db.find_user(&self.0.author_id).await?.into())
    }
}

/// A message author exposed through the schema.
#[derive(Clone, Debug, From)]
pub struct User(store::User);

/// App user
#[Object]
impl User {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn name(&self) -> Option<String> {
        Some(format!("{} (employee)", self.0.name))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Query;

/// The service API
#[Object]
impl Query {
    /// Finds message by id
    async fn get_message(&self, ctx: &Context<'_>, id: ID) -> Option<Message> {
        nullable(ctx, Query::find_message(ctx, &id).await)
    }
}

impl Query {
    async fn find_message(ctx: &Context<'_>, id: &str) -> Result<Message> {
        let db = ctx.data::<Backend>()?;
        Ok(db.find_message(id).await?.into())
    }
}

pub type MessagesSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Build the schema, resolving messages and their authors from `db`.
pub fn schema(db: impl store::DataSource + 'static) -> MessagesSchema {
    builder(Query).data::<Backend>(Arc::new(db)).finish()
}
