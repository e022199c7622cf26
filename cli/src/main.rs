//! Command-line surface for the expense-tracking API client.
//!
//! One subcommand per API operation, taking raw string options in place of
//! the original form fields. Every outcome — success, validation failure,
//! no-op warning, transport error — is rendered to stdout as pretty-printed
//! JSON; the process exits 0 either way, because errors are display output
//! here, not process failures.

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use expense_core::{
    render_outcome, ClientError, Envelope, ExpenseClient, ExpenseForm, ExpensePatch, HttpMethod,
    HttpRequest, HttpResponse, UserForm, UserPatch,
};

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Parser)]
#[command(name = "expense-cli", about = "Client for the expense-tracking API")]
struct Cli {
    /// Base URL of the API. Falls back to EXPENSE_API_URL, then localhost.
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// User operations.
    #[command(subcommand)]
    Users(UserCommand),
    /// Expense operations.
    #[command(subcommand)]
    Expenses(ExpenseCommand),
}

#[derive(Subcommand)]
enum UserCommand {
    /// List all users.
    List,
    /// Fetch one user by id.
    Get(IdArg),
    /// Create a user.
    Create {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
    },
    /// Partially update a user; blank options are left unchanged.
    Update {
        #[arg(long, default_value = "")]
        id: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
    },
    /// Delete a user.
    Delete(IdArg),
}

#[derive(Subcommand)]
enum ExpenseCommand {
    /// List all expenses.
    List,
    /// Fetch one expense by id.
    Get(IdArg),
    /// List the expenses belonging to one user.
    ByUser {
        #[arg(long, default_value = "")]
        user_id: String,
    },
    /// Create an expense. Dates in DD/MM/YYYY are rewritten to YYYY-MM-DD.
    Create {
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        amount: String,
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value = "")]
        user_id: String,
    },
    /// Partially update an expense; blank options are left unchanged.
    Update {
        #[arg(long, default_value = "")]
        id: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        amount: String,
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value = "")]
        user_id: String,
    },
    /// Delete an expense.
    Delete(IdArg),
}

#[derive(Args)]
struct IdArg {
    #[arg(long, default_value = "")]
    id: String,
}

/// Execute an `HttpRequest` over the network with ureq.
///
/// Status-code-as-error is disabled so 4xx/5xx come back as data for the
/// envelope to interpret; only transport-level failures become `Network`.
fn execute(req: HttpRequest) -> Result<HttpResponse, ClientError> {
    debug!(path = %req.path, "sending request");

    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Patch, Some(body)) => {
            agent.patch(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Patch, None) => agent.patch(&req.path).send_empty(),
    }
    .map_err(|e| ClientError::Network(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ClientError::Network(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

/// Map a command to its request, run it, and interpret the response.
///
/// Generic over the executor so tests can substitute a canned transport.
fn run<F>(client: &ExpenseClient, command: Command, execute: F) -> Result<Envelope, ClientError>
where
    F: Fn(HttpRequest) -> Result<HttpResponse, ClientError>,
{
    let request = match command {
        Command::Users(cmd) => match cmd {
            UserCommand::List => client.build_list_users(),
            UserCommand::Get(arg) => client.build_get_user(expense_core::parse_id(&arg.id)?),
            UserCommand::Create { name, email } => {
                let form = UserForm { name, email };
                client.build_create_user(&form.validate()?)?
            }
            UserCommand::Update { id, name, email } => {
                let id = expense_core::parse_id(&id)?;
                let form = UserPatch { name, email };
                client.build_update_user(id, &form.validate()?)?
            }
            UserCommand::Delete(arg) => client.build_delete_user(expense_core::parse_id(&arg.id)?),
        },
        Command::Expenses(cmd) => match cmd {
            ExpenseCommand::List => client.build_list_expenses(),
            ExpenseCommand::Get(arg) => client.build_get_expense(expense_core::parse_id(&arg.id)?),
            ExpenseCommand::ByUser { user_id } => {
                client.build_list_expenses_by_user(expense_core::parse_id(&user_id)?)
            }
            ExpenseCommand::Create {
                category,
                amount,
                date,
                user_id,
            } => {
                let form = ExpenseForm {
                    category,
                    amount,
                    date,
                    user_id,
                };
                client.build_create_expense(&form.validate()?)?
            }
            ExpenseCommand::Update {
                id,
                category,
                amount,
                date,
                user_id,
            } => {
                let id = expense_core::parse_id(&id)?;
                let form = ExpensePatch {
                    category,
                    amount,
                    date,
                    user_id,
                };
                client.build_update_expense(id, &form.validate()?)?
            }
            ExpenseCommand::Delete(arg) => {
                client.build_delete_expense(expense_core::parse_id(&arg.id)?)
            }
        },
    };

    let response = execute(request)?;
    Envelope::from_response(&response)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let base_url = cli
        .base_url
        .or_else(|| std::env::var("EXPENSE_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let client = ExpenseClient::new(&base_url);

    println!("{}", render_outcome(run(&client, cli.command, execute)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ExpenseClient {
        ExpenseClient::new("http://localhost:3000")
    }

    fn canned(status: u16, body: &str) -> impl Fn(HttpRequest) -> Result<HttpResponse, ClientError> {
        let body = body.to_string();
        move |_req| {
            Ok(HttpResponse {
                status,
                headers: vec![("content-type".to_string(), "application/json".to_string())],
                body: body.clone(),
            })
        }
    }

    fn unreachable_transport(_req: HttpRequest) -> Result<HttpResponse, ClientError> {
        panic!("transport must not be invoked");
    }

    #[test]
    fn list_users_renders_envelope() {
        let outcome = run(&client(), Command::Users(UserCommand::List), canned(200, "[]"));
        let envelope = outcome.unwrap();
        assert!(envelope.ok);
        assert_eq!(envelope.data, serde_json::json!([]));
    }

    #[test]
    fn blank_id_fails_before_transport() {
        let outcome = run(
            &client(),
            Command::Users(UserCommand::Get(IdArg { id: "  ".to_string() })),
            unreachable_transport,
        );
        assert!(matches!(outcome.unwrap_err(), ClientError::Validation(_)));
    }

    #[test]
    fn blank_update_is_noop_before_transport() {
        let outcome = run(
            &client(),
            Command::Users(UserCommand::Update {
                id: "00000000-0000-0000-0000-000000000001".to_string(),
                name: String::new(),
                email: String::new(),
            }),
            unreachable_transport,
        );
        assert!(matches!(outcome.unwrap_err(), ClientError::NoOp));
    }

    #[test]
    fn transport_failure_surfaces_as_network_error() {
        let outcome = run(&client(), Command::Expenses(ExpenseCommand::List), |_req| {
            Err(ClientError::Network("connection refused".to_string()))
        });
        let text = render_outcome(outcome);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["error"], "network error: connection refused");
    }

    #[test]
    fn delete_renders_no_content_placeholder() {
        let outcome = run(
            &client(),
            Command::Users(UserCommand::Delete(IdArg {
                id: "00000000-0000-0000-0000-000000000001".to_string(),
            })),
            |_req| {
                Ok(HttpResponse {
                    status: 204,
                    headers: Vec::new(),
                    body: String::new(),
                })
            },
        );
        let envelope = outcome.unwrap();
        assert_eq!(envelope.data["message"], "No Content");
    }
}
