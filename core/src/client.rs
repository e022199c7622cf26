//! Stateless HTTP request builder and response parser for the expense API.
//!
//! # Design
//! `ExpenseClient` holds only a `base_url` and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.
//!
//! Update builders refuse empty partial payloads with `ClientError::NoOp`,
//! so a changed-nothing form submission never produces a request.

use uuid::Uuid;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateExpense, CreateUser, Expense, UpdateExpense, UpdateUser, User};

/// Synchronous, stateless client for the expense-tracking API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct ExpenseClient {
    base_url: String,
}

impl ExpenseClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    // --- users ---

    pub fn build_list_users(&self) -> HttpRequest {
        get(format!("{}/users", self.base_url))
    }

    pub fn build_get_user(&self, id: Uuid) -> HttpRequest {
        get(format!("{}/users/{id}", self.base_url))
    }

    pub fn build_create_user(&self, input: &CreateUser) -> Result<HttpRequest, ClientError> {
        with_json_body(HttpMethod::Post, format!("{}/users", self.base_url), input)
    }

    pub fn build_update_user(&self, id: Uuid, input: &UpdateUser) -> Result<HttpRequest, ClientError> {
        if input.is_empty() {
            return Err(ClientError::NoOp);
        }
        with_json_body(HttpMethod::Patch, format!("{}/users/{id}", self.base_url), input)
    }

    pub fn build_delete_user(&self, id: Uuid) -> HttpRequest {
        delete(format!("{}/users/{id}", self.base_url))
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, ClientError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_get_user(&self, response: HttpResponse) -> Result<User, ClientError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_create_user(&self, response: HttpResponse) -> Result<User, ClientError> {
        check_status(&response, 201)?;
        decode(&response)
    }

    pub fn parse_update_user(&self, response: HttpResponse) -> Result<User, ClientError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_delete_user(&self, response: HttpResponse) -> Result<(), ClientError> {
        check_status(&response, 204)?;
        Ok(())
    }

    // --- expenses ---

    pub fn build_list_expenses(&self) -> HttpRequest {
        get(format!("{}/expenses", self.base_url))
    }

    pub fn build_get_expense(&self, id: Uuid) -> HttpRequest {
        get(format!("{}/expenses/{id}", self.base_url))
    }

    pub fn build_list_expenses_by_user(&self, user_id: Uuid) -> HttpRequest {
        get(format!("{}/expenses/user/{user_id}", self.base_url))
    }

    pub fn build_create_expense(&self, input: &CreateExpense) -> Result<HttpRequest, ClientError> {
        with_json_body(HttpMethod::Post, format!("{}/expenses", self.base_url), input)
    }

    pub fn build_update_expense(
        &self,
        id: Uuid,
        input: &UpdateExpense,
    ) -> Result<HttpRequest, ClientError> {
        if input.is_empty() {
            return Err(ClientError::NoOp);
        }
        with_json_body(HttpMethod::Patch, format!("{}/expenses/{id}", self.base_url), input)
    }

    pub fn build_delete_expense(&self, id: Uuid) -> HttpRequest {
        delete(format!("{}/expenses/{id}", self.base_url))
    }

    pub fn parse_list_expenses(&self, response: HttpResponse) -> Result<Vec<Expense>, ClientError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_get_expense(&self, response: HttpResponse) -> Result<Expense, ClientError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_list_expenses_by_user(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<Expense>, ClientError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_create_expense(&self, response: HttpResponse) -> Result<Expense, ClientError> {
        check_status(&response, 201)?;
        decode(&response)
    }

    pub fn parse_update_expense(&self, response: HttpResponse) -> Result<Expense, ClientError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_delete_expense(&self, response: HttpResponse) -> Result<(), ClientError> {
        check_status(&response, 204)?;
        Ok(())
    }
}

fn get(path: String) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        path,
        headers: Vec::new(),
        body: None,
    }
}

fn delete(path: String) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Delete,
        path,
        headers: Vec::new(),
        body: None,
    }
}

fn with_json_body<T: serde::Serialize>(
    method: HttpMethod,
    path: String,
    input: &T,
) -> Result<HttpRequest, ClientError> {
    let body = serde_json::to_string(input).map_err(|e| ClientError::Serialization(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

/// Map non-success status codes to the appropriate `ClientError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ClientError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ClientError::NotFound);
    }
    Err(ClientError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: serde::de::DeserializeOwned>(response: &HttpResponse) -> Result<T, ClientError> {
    serde_json::from_str(&response.body).map_err(|e| ClientError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserRef;

    fn client() -> ExpenseClient {
        ExpenseClient::new("http://localhost:3000")
    }

    fn json_response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_users_produces_correct_request() {
        let req = client().build_list_users();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/users");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_user_produces_correct_request() {
        let req = client().build_get_user(Uuid::nil());
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.path,
            "http://localhost:3000/users/00000000-0000-0000-0000-000000000000"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_user_produces_correct_request() {
        let input = CreateUser {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        let req = client().build_create_user(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/users");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Ada");
        assert_eq!(body["email"], "ada@example.com");
    }

    #[test]
    fn build_update_user_uses_patch_and_omits_unset_fields() {
        let input = UpdateUser {
            name: Some("Grace".to_string()),
            email: None,
        };
        let req = client().build_update_user(Uuid::nil(), &input).unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Grace");
        assert!(body.get("email").is_none());
    }

    #[test]
    fn build_update_user_empty_payload_is_noop() {
        let err = client().build_update_user(Uuid::nil(), &UpdateUser::default()).unwrap_err();
        assert!(matches!(err, ClientError::NoOp));
    }

    #[test]
    fn build_delete_user_produces_correct_request() {
        let req = client().build_delete_user(Uuid::nil());
        assert_eq!(req.method, HttpMethod::Delete);
        assert!(req.body.is_none());
    }

    #[test]
    fn build_list_expenses_by_user_path() {
        let id: Uuid = "00000000-0000-0000-0000-000000000007".parse().unwrap();
        let req = client().build_list_expenses_by_user(id);
        assert_eq!(
            req.path,
            "http://localhost:3000/expenses/user/00000000-0000-0000-0000-000000000007"
        );
        assert_eq!(req.method, HttpMethod::Get);
    }

    #[test]
    fn build_create_expense_nests_user() {
        let input = CreateExpense {
            category: "food".to_string(),
            amount: 12.5,
            date: "2024-12-25".to_string(),
            user: UserRef { id: Uuid::nil() },
        };
        let req = client().build_create_expense(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/expenses");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["amount"], 12.5);
        assert_eq!(body["user"]["id"], "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn build_update_expense_empty_payload_is_noop() {
        let err = client()
            .build_update_expense(Uuid::nil(), &UpdateExpense::default())
            .unwrap_err();
        assert!(matches!(err, ClientError::NoOp));
    }

    #[test]
    fn parse_list_users_success() {
        let response = json_response(
            200,
            r#"[{"id":"00000000-0000-0000-0000-000000000001","name":"Ada","email":"ada@example.com"}]"#,
        );
        let users = client().parse_list_users(response).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Ada");
    }

    #[test]
    fn parse_get_user_not_found() {
        let response = json_response(404, "");
        let err = client().parse_get_user(response).unwrap_err();
        assert!(matches!(err, ClientError::NotFound));
    }

    #[test]
    fn parse_create_user_wrong_status() {
        let response = json_response(500, "internal error");
        let err = client().parse_create_user(response).unwrap_err();
        assert!(matches!(err, ClientError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_create_expense_success() {
        let response = json_response(
            201,
            r#"{"id":"00000000-0000-0000-0000-000000000002","category":"food","amount":9.99,"date":"2024-03-01","user":{"id":"00000000-0000-0000-0000-000000000001"}}"#,
        );
        let expense = client().parse_create_expense(response).unwrap();
        assert_eq!(expense.category, "food");
        assert_eq!(expense.amount, 9.99);
    }

    #[test]
    fn parse_delete_expense_success() {
        let response = HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(client().parse_delete_expense(response).is_ok());
    }

    #[test]
    fn parse_delete_user_not_found() {
        let response = json_response(404, "");
        let err = client().parse_delete_user(response).unwrap_err();
        assert!(matches!(err, ClientError::NotFound));
    }

    #[test]
    fn parse_list_expenses_bad_json() {
        let response = json_response(200, "not json");
        let err = client().parse_list_expenses(response).unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ExpenseClient::new("http://localhost:3000/");
        let req = client.build_list_users();
        assert_eq!(req.path, "http://localhost:3000/users");
    }
}
