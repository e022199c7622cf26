//! Form-input normalization: raw strings in, validated DTOs out.
//!
//! # Design
//! The original surface reads every value out of free-text form fields, so
//! each operation gets a small struct of raw strings plus a fallible
//! conversion into the typed payload. Normalization happens here, before a
//! request exists: trimming, required-field checks, `DD/MM/YYYY` date
//! rewriting, and `f64`/UUID parsing. A failed check is a
//! `ClientError::Validation` and costs zero network calls.
//!
//! Patch structs treat an empty-after-trim field as "leave unchanged", so a
//! form submitted with everything blank converts to an empty payload (which
//! the client then refuses to send).

use uuid::Uuid;

use crate::error::ClientError;
use crate::types::{CreateExpense, CreateUser, UpdateExpense, UpdateUser, UserRef};

/// Parse an identifier form field. Empty or non-UUID input is a validation
/// error surfaced before any request is built.
pub fn parse_id(raw: &str) -> Result<Uuid, ClientError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ClientError::Validation("id is required".to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| ClientError::Validation(format!("invalid id: {trimmed}")))
}

/// Rewrite `DD/MM/YYYY` to `YYYY-MM-DD`; any other shape passes through
/// unchanged. Only the shape is checked (2/2/4 digits), not calendar
/// validity — the server owns that.
pub fn normalize_date(raw: &str) -> String {
    let parts: Vec<&str> = raw.split('/').collect();
    if let [day, month, year] = parts[..] {
        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if day.len() == 2 && month.len() == 2 && year.len() == 4 && all_digits(day) && all_digits(month) && all_digits(year) {
            return format!("{year}-{month}-{day}");
        }
    }
    raw.to_string()
}

fn required(raw: &str, field: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ClientError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Raw form fields for creating a user.
#[derive(Debug, Clone, Default)]
pub struct UserForm {
    pub name: String,
    pub email: String,
}

impl UserForm {
    pub fn validate(&self) -> Result<CreateUser, ClientError> {
        Ok(CreateUser {
            name: required(&self.name, "name")?,
            email: required(&self.email, "email")?,
        })
    }
}

/// Raw form fields for a partial user update. Blank fields are omitted from
/// the payload.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: String,
    pub email: String,
}

impl UserPatch {
    pub fn validate(&self) -> Result<UpdateUser, ClientError> {
        Ok(UpdateUser {
            name: optional(&self.name),
            email: optional(&self.email),
        })
    }
}

/// Raw form fields for creating an expense.
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub category: String,
    pub amount: String,
    pub date: String,
    pub user_id: String,
}

impl ExpenseForm {
    pub fn validate(&self) -> Result<CreateExpense, ClientError> {
        let category = required(&self.category, "category")?;
        let amount_raw = required(&self.amount, "amount")?;
        let amount: f64 = amount_raw
            .parse()
            .map_err(|_| ClientError::Validation(format!("invalid amount: {amount_raw}")))?;
        let date = normalize_date(&required(&self.date, "date")?);
        let user_raw = required(&self.user_id, "user id")?;
        let user_id: Uuid = user_raw
            .parse()
            .map_err(|_| ClientError::Validation(format!("invalid user id: {user_raw}")))?;
        Ok(CreateExpense {
            category,
            amount,
            date,
            user: UserRef { id: user_id },
        })
    }
}

/// Raw form fields for a partial expense update.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub category: String,
    pub amount: String,
    pub date: String,
    pub user_id: String,
}

impl ExpensePatch {
    pub fn validate(&self) -> Result<UpdateExpense, ClientError> {
        let amount = match optional(&self.amount) {
            Some(raw) => Some(
                raw.parse()
                    .map_err(|_| ClientError::Validation(format!("invalid amount: {raw}")))?,
            ),
            None => None,
        };
        let user = match optional(&self.user_id) {
            Some(raw) => Some(UserRef { id: parse_id(&raw)? }),
            None => None,
        };
        Ok(UpdateExpense {
            category: optional(&self.category),
            amount,
            date: optional(&self.date).map(|d| normalize_date(&d)),
            user,
        })
    }
}
