//! Synchronous API client core for the expense-tracking service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `ExpenseClient` is stateless — it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Raw form input passes through the `form` module first: trimming,
//!   required-field checks, `DD/MM/YYYY` date rewriting, and numeric/id
//!   parsing all happen before a request exists, so invalid input never
//!   reaches the network.
//! - The `envelope` module interprets any response by content-type into a
//!   uniform `{ok, status, data}` shape for display; typed `parse_*` methods
//!   decode on top of the same status handling.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod envelope;
pub mod error;
pub mod form;
pub mod http;
pub mod types;

pub use client::ExpenseClient;
pub use envelope::{render_outcome, Envelope};
pub use error::ClientError;
pub use form::{parse_id, ExpenseForm, ExpensePatch, UserForm, UserPatch};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateExpense, CreateUser, Expense, UpdateExpense, UpdateUser, User, UserRef};
