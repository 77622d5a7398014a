//! Backend data store consumed by the demo schemas.
//!
//! The schemas never talk to a concrete store. They go through the [`DataSource`] trait, which
//! describes the lookups a resolver may perform. This crate provides a single implementation,
//! [`FakeDatabase`], an in-memory stand-in for a real persistence layer which can be configured to
//! simulate latency.

use derive_more::{Display, From};
use snafu::Snafu;

pub mod fixtures;
pub mod memory;

pub use memory::FakeDatabase;

/// Errors returned by a [`DataSource`].
#[derive(Clone, Debug, PartialEq, Eq, Snafu)]
pub enum Error {
    #[snafu(display("no {kind} exists with id {id}"))]
    NotFound { kind: RecordKind, id: String },

    #[snafu(display("duplicate record id {id}"))]
    DuplicateId { id: String },
}

/// The kinds of records kept in a store.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum RecordKind {
    #[display(fmt = "message")]
    Message,
    #[display(fmt = "user")]
    User,
}

/// An application user.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Option<String>,
}

impl User {
    /// A user with no role.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: None,
        }
    }

    /// Assign a role to this user.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// An application message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Message {
    pub id: String,
    pub content: String,
    /// The ID of the [`User`] who wrote this message.
    ///
    /// Nothing checks that this refers to an existing user. A dangling ID simply makes the author
    /// lookup fail.
    pub author_id: String,
}

impl Message {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            author_id: author_id.into(),
        }
    }
}

/// Any record which can be kept in a store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, From)]
pub enum Record {
    Message(Message),
    User(User),
}

impl Record {
    /// The unique key of this record.
    pub fn id(&self) -> &str {
        match self {
            Self::Message(msg) => &msg.id,
            Self::User(user) => &user.id,
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Message(_) => RecordKind::Message,
            Self::User(_) => RecordKind::User,
        }
    }
}

/// A source of data which can be served by the demo schemas.
#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    /// Look up a message by ID.
    ///
    /// This may take a while, and fails with [`Error::NotFound`] if there is no message with the
    /// given ID.
    async fn find_message(&self, id: &str) -> Result<Message, Error>;

    /// Look up a user by ID.
    ///
    /// This may take a while, and fails with [`Error::NotFound`] if there is no user with the given
    /// ID.
    async fn find_user(&self, id: &str) -> Result<User, Error>;

    /// Get a user immediately, if there is one with the given ID.
    fn get_user(&self, id: &str) -> Option<User>;
}
