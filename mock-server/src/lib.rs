use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct UserRef {
    pub id: Uuid,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub category: String,
    pub amount: f64,
    pub date: String,
    pub user: UserRef,
}

#[derive(Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateExpense {
    pub category: String,
    pub amount: f64,
    pub date: String,
    pub user: UserRef,
}

#[derive(Deserialize)]
pub struct UpdateExpense {
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub user: Option<UserRef>,
}

#[derive(Default)]
pub struct Store {
    pub users: HashMap<Uuid, User>,
    pub expenses: HashMap<Uuid, Expense>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).patch(update_user).put(update_user).delete(delete_user),
        )
        .route("/expenses", get(list_expenses).post(create_expense))
        .route(
            "/expenses/{id}",
            get(get_expense)
                .patch(update_expense)
                .put(update_expense)
                .delete(delete_expense),
        )
        .route("/expenses/user/{user_id}", get(list_expenses_by_user))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

// --- users ---

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    let store = db.read().await;
    Json(store.users.values().cloned().collect())
}

async fn create_user(
    State(db): State<Db>,
    Json(input): Json<CreateUser>,
) -> (StatusCode, Json<User>) {
    let user = User {
        id: Uuid::new_v4(),
        name: input.name,
        email: input.email,
    };
    db.write().await.users.insert(user.id, user.clone());
    (StatusCode::CREATED, Json(user))
}

async fn get_user(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<Json<User>, StatusCode> {
    let store = db.read().await;
    store.users.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateUser>,
) -> Result<Json<User>, StatusCode> {
    let mut store = db.write().await;
    let user = store.users.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.name {
        user.name = name;
    }
    if let Some(email) = input.email {
        user.email = email;
    }
    Ok(Json(user.clone()))
}

async fn delete_user(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .users
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

// --- expenses ---

async fn list_expenses(State(db): State<Db>) -> Json<Vec<Expense>> {
    let store = db.read().await;
    Json(store.expenses.values().cloned().collect())
}

async fn list_expenses_by_user(
    State(db): State<Db>,
    Path(user_id): Path<Uuid>,
) -> Json<Vec<Expense>> {
    let store = db.read().await;
    Json(
        store
            .expenses
            .values()
            .filter(|e| e.user.id == user_id)
            .cloned()
            .collect(),
    )
}

async fn create_expense(
    State(db): State<Db>,
    Json(input): Json<CreateExpense>,
) -> (StatusCode, Json<Expense>) {
    let expense = Expense {
        id: Uuid::new_v4(),
        category: input.category,
        amount: input.amount,
        date: input.date,
        user: input.user,
    };
    db.write().await.expenses.insert(expense.id, expense.clone());
    (StatusCode::CREATED, Json(expense))
}

async fn get_expense(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Expense>, StatusCode> {
    let store = db.read().await;
    store.expenses.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_expense(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateExpense>,
) -> Result<Json<Expense>, StatusCode> {
    let mut store = db.write().await;
    let expense = store.expenses.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(category) = input.category {
        expense.category = category;
    }
    if let Some(amount) = input.amount {
        expense.amount = amount;
    }
    if let Some(date) = input.date {
        expense.date = date;
    }
    if let Some(user) = input.user {
        expense.user = user;
    }
    Ok(Json(expense.clone()))
}

async fn delete_expense(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .expenses
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
