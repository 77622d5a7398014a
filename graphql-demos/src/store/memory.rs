//! In-memory instantiation of the [`DataSource`](super::DataSource) interface.
//!
//! The database is a fixed set of records, populated once at construction and read-only
//! thereafter. It is useful for demos and for testing schemas in isolation from an actual
//! database. Asynchronous lookups can be slowed down by a fixed latency to simulate a round trip
//! to a real data store.

use super::{DataSource, Error, Message, NotFoundSnafu, Record, RecordKind, User};
use async_std::{sync::Arc, task::sleep};
use async_trait::async_trait;
use snafu::OptionExt;
use std::collections::hash_map::{Entry, HashMap};
use std::time::Duration;

/// The in-memory database.
///
/// Cloning a [`FakeDatabase`] is cheap, and all clones share the same records.
#[derive(Clone, Debug, Default)]
pub struct FakeDatabase {
    records: Arc<HashMap<String, Record>>,
    latency: Duration,
}

impl FakeDatabase {
    /// Create a database containing `records`.
    ///
    /// Every record must have a distinct ID.
    pub fn new<I>(records: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<Record>,
    {
        let mut map = HashMap::new();
        for record in records {
            let record = record.into();
            match map.entry(record.id().to_string()) {
                Entry::Vacant(e) => {
                    e.insert(record);
                }
                Entry::Occupied(e) => {
                    return Err(Error::DuplicateId { id: e.key().clone() });
                }
            }
        }
        Ok(Self {
            records: Arc::new(map),
            latency: Duration::ZERO,
        })
    }

    /// Delay every asynchronous lookup by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// The delay applied to asynchronous lookups.
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// The number of records in the database.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the record with the given ID, regardless of its kind.
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }

    fn message(&self, id: &str) -> Option<&Message> {
        match self.get(id)? {
            Record::Message(msg) => Some(msg),
            other => {
                tracing::debug!(id, kind = %other.kind(), "record is not a message");
                None
            }
        }
    }

    fn user(&self, id: &str) -> Option<&User> {
        match self.get(id)? {
            Record::User(user) => Some(user),
            other => {
                tracing::debug!(id, kind = %other.kind(), "record is not a user");
                None
            }
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl DataSource for FakeDatabase {
    #[tracing::instrument(skip(self))]
    async fn find_message(&self, id: &str) -> Result<Message, Error> {
        self.simulate_latency().await;
        let msg = self.message(id).cloned().context(NotFoundSnafu {
            kind: RecordKind::Message,
            id,
        })?;
        tracing::debug!(author = %msg.author_id, "found message");
        Ok(msg)
    }

    #[tracing::instrument(skip(self))]
    async fn find_user(&self, id: &str) -> Result<User, Error> {
        self.simulate_latency().await;
        let user = self.user(id).cloned().context(NotFoundSnafu {
            kind: RecordKind::User,
            id,
        })?;
        tracing::debug!(name = %user.name, "found user");
        Ok(user)
    }

    fn get_user(&self, id: &str) -> Option<User> {
        self.user(id).cloned()
    }
}
