//! Shared fixtures for the uberform conformance suite.
//!
//! Provides the content types and canonical values the wire-format tests
//! exercise: a small struct type ([`Employee`]), a type with
//! string-formatted scalar fields ([`Order`] — `uuid` id, `chrono`
//! timestamp), and constructors for the link sets used across tests. Tests
//! that need raw documents build them inline from JSON text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uberform::Link;
use uuid::Uuid;

/// The workhorse content type: one required and one optional property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub name: String,
    pub role: Option<String>,
}

impl Employee {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: Some(role.into()),
        }
    }
}

/// A content type whose fields serialize as formatted strings, to prove the
/// property round-trip preserves them exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub total_cents: u64,
}

/// A fixed, fully deterministic [`Order`].
///
/// # Panics
///
/// Panics if the fixture literals are invalid, which would be a bug in the
/// suite itself.
pub fn order() -> Order {
    Order {
        id: Uuid::parse_str("4b4f6a52-7d2e-4a86-9c1d-0e5a6a1b7f3c").expect("fixture uuid"),
        placed_at: "2026-08-06T12:00:00Z"
            .parse::<DateTime<Utc>>()
            .expect("fixture timestamp"),
        total_cents: 12_50,
    }
}

/// A `self` link for the given path.
pub fn self_link(url: &str) -> Link {
    Link::new("self", url)
}
