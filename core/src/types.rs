//! Domain DTOs for the expense-tracking API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently of
//! the mock-server crate; integration tests catch any schema drift between
//! the two. Entities are server-owned — the client never mutates them
//! locally, every change is a round-trip request.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Reference to a user by id, as embedded in expense payloads.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRef {
    pub id: Uuid,
}

/// An expense record returned by the API. `date` is an ISO `YYYY-MM-DD`
/// string; the server stores it opaquely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub category: String,
    pub amount: f64,
    pub date: String,
    pub user: UserRef,
}

/// Request payload for creating a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
}

/// Request payload for a partial user update. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UpdateUser {
    /// True when no field is set — sending this payload would be a no-op.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Request payload for creating a new expense. The owning user travels as
/// a nested `{"user": {"id": ...}}` reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExpense {
    pub category: String,
    pub amount: f64,
    pub date: String,
    pub user: UserRef,
}

/// Request payload for a partial expense update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateExpense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRef>,
}

impl UpdateExpense {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.amount.is_none() && self.date.is_none() && self.user.is_none()
    }
}
