//! A schema whose resolvers fail on purpose.
//!
//! ```graphql
//! type User {
//!   id: ID!
//!   name: String
//!   role: String
//! }
//!
//! type Query {
//!   getCurrentUser: User
//! }
//! ```
//!
//! `getCurrentUser` always succeeds, but resolving `name` or `role` on the user it returns always
//! fails. A query selecting those fields gets back the user's `id` alongside one error per failed
//! field, each with a path pointing at the field which failed.

use super::{builder, nullable, Context, EmptyMutation, EmptySubscription, Object, Schema, ID};
use crate::store::{self, fixtures};
use derive_more::From;
use snafu::Snafu;

/// Errors raised by the failing resolvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Snafu)]
pub enum ResolveError {
    #[snafu(display("Name resolve error here"))]
    Name,
    #[snafu(display("Role resolve error here"))]
    Role,
}

/// A user whose every interesting field fails to resolve.
#[derive(Clone, Debug, From)]
pub struct User(store::User);

/// App user
#[Object]
impl User {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn name(&self, ctx: &Context<'_>) -> Option<&str> {
        nullable(ctx, Err(ResolveError::Name.into()))
    }

    async fn role(&self, ctx: &Context<'_>) -> Option<&str> {
        nullable(ctx, Err(ResolveError::Role.into()))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Query;

#[Object]
impl Query {
    async fn get_current_user(&self) -> Option<User> {
        Some(fixtures::current_user().into())
    }
}

pub type CurrentUserSchema = Schema<Query, EmptyMutation, EmptySubscription>;

pub fn schema() -> CurrentUserSchema {
    builder(Query).finish()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        graphql::{async_graphql::PathSegment, value},
        init_logging,
    };

    #[async_std::test]
    async fn test_failing_fields() {
        init_logging();
        let res = schema()
            .execute("query { getCurrentUser { id name role } }")
            .await;

        assert_eq!(
            res.data,
            value!({
                "getCurrentUser": {
                    "id": "user001",
                    "name": null,
                    "role": null,
                }
            })
        );

        let mut errors = res
            .errors
            .iter()
            .map(|err| (err.message.as_str(), err.path.clone()))
            .collect::<Vec<_>>();
        errors.sort_by_key(|(msg, _)| *msg);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].0, "Name resolve error here");
        assert_eq!(errors[1].0, "Role resolve error here");
        assert_eq!(
            errors[0].1,
            [
                PathSegment::Field("getCurrentUser".into()),
                PathSegment::Field("name".into())
            ]
        );
        assert_eq!(
            errors[1].1,
            [
                PathSegment::Field("getCurrentUser".into()),
                PathSegment::Field("role".into())
            ]
        );
    }

    #[async_std::test]
    async fn test_id_only() {
        init_logging();
        let res = schema()
            .execute("{ getCurrentUser { id } }")
            .await
            .into_result()
            .unwrap();
        assert_eq!(res.data, value!({ "getCurrentUser": { "id": "user001" } }));
    }

    #[async_std::test]
    async fn test_single_failure() {
        init_logging();
        let res = schema().execute("{ getCurrentUser { role } }").await;
        assert_eq!(res.data, value!({ "getCurrentUser": { "role": null } }));
        assert_eq!(res.errors.len(), 1);
        assert_eq!(res.errors[0].message, "Role resolve error here");
        assert_eq!(
            res.errors[0].path,
            [
                PathSegment::Field("getCurrentUser".into()),
                PathSegment::Field("role".into())
            ]
        );
    }

    #[async_std::test]
    async fn test_aliased_failure() {
        init_logging();
        let res = schema()
            .execute("{ me: getCurrentUser { id title: role } }")
            .await;
        assert_eq!(
            res.data,
            value!({ "me": { "id": "user001", "title": null } })
        );
        assert_eq!(res.errors.len(), 1);
        assert_eq!(
            res.errors[0].path,
            [
                PathSegment::Field("me".into()),
                PathSegment::Field("title".into())
            ]
        );
    }

    #[test]
    fn test_sdl() {
        let sdl = schema().sdl();
        assert!(sdl.contains("getCurrentUser: User"));
        assert!(sdl.contains("id: ID!"));
        assert!(sdl.contains("role: String"));
        assert!(sdl.contains("App user"));
    }
}
