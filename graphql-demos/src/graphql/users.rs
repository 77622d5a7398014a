//! A minimal single-type schema.
//!
//! ```graphql
//! type User {
//!   id: String
//!   name: String
//! }
//!
//! type Query {
//!   user(id: String): User
//! }
//! ```
//!
//! Users are read synchronously from the [`Backend`]. Asking for a user which does not exist is not
//! an error: the query simply resolves to `null`.

use super::{builder, Backend, Context, EmptyMutation, EmptySubscription, Object, Result, Schema};
use crate::store;
use derive_more::From;
use std::sync::Arc;

#[derive(Clone, Debug, From)]
pub struct User(store::User);

#[Object]
impl User {
    async fn id(&self) -> Option<&str> {
        Some(self.0.id.as_str())
    }

    async fn name(&self) -> Option<&str> {
        Some(self.0.name.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Query;

/// The service API
#[Object]
impl Query {
    /// Find user by id
    async fn user(&self, ctx: &Context<'_>, id: Option<String>) -> Result<Option<User>> {
        let db = ctx.data::<Backend>()?;
        Ok(id.and_then(|id| db.get_user(&id)).map(User::from))
    }
}

pub type UsersSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Build the schema, resolving users from `db`.
pub fn schema(db: impl store::DataSource + 'static) -> UsersSchema {
    builder(Query).data::<Backend>(Arc::new(db)).finish()
}
