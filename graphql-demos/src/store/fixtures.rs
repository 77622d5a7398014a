//! The fixed data served by each demo.

use super::{Error, FakeDatabase, Message, Record, User};
use std::time::Duration;

/// How long the message board takes to answer a lookup.
pub const MESSAGE_BOARD_LATENCY: Duration = Duration::from_millis(500);

/// The user returned by the `current_user` demo.
pub fn current_user() -> User {
    User::new("user001", "Test name").with_role("Test role")
}

/// A single message and its author, served slowly.
pub fn message_board() -> Result<FakeDatabase, Error> {
    Ok(FakeDatabase::new([
        Record::from(Message::new("message001", "Test message 001", "author001")),
        Record::from(User::new("author001", "Test author 001")),
    ])?
    .with_latency(MESSAGE_BOARD_LATENCY))
}

/// A couple of users, served immediately.
pub fn directory() -> Result<FakeDatabase, Error> {
    FakeDatabase::new([User::new("a", "alice"), User::new("b", "bob")])
}
