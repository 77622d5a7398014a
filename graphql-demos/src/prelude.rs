//! Common items that you will always want in scope when writing a demo service.

pub use crate::{
    graphql::{async_graphql::{self, value}, Backend, EmptyMutation, EmptySubscription, Schema},
    store::{fixtures, DataSource, FakeDatabase, Message, Record, User},
};
