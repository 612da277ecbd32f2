//! Command handlers
//!
//! One handler per command. Handlers never fail: every error becomes a reply
//! line carried in the returned `CommandResult`.

use log::{info, warn};

use crate::auth::{self, validate_email, validate_username};
use crate::client::{Client, SessionUser};
use crate::error::ServerError;
use crate::error::handlers::{error_to_reply, handle_error};
use crate::error::{AuthError, StoreError};
use crate::protocol::responses::{self, format_response};
use crate::protocol::{Command, CommandResult, LoginRequest, SignupRequest};
use crate::server::ServerContext;
use crate::signup::{Notifier, validate_and_notify};

const HELP_TEXT: &str = "Commands: SIGNUP <username> <email> <password> <confirmation>, \
LOGIN <username-or-email> <password>, WHOAMI, LOGOUT, HELP, QUIT";

/// Dispatches a parsed command to its handler.
pub async fn handle_command(
    client: &mut Client,
    command: Command,
    context: &ServerContext,
) -> CommandResult {
    match command {
        Command::Signup(request) => handle_cmd_signup(client, request, context).await,
        Command::Login(request) => handle_cmd_login(client, request, context).await,
        Command::Whoami => handle_cmd_whoami(client),
        Command::Logout => handle_cmd_logout(client),
        Command::Help => CommandResult::success(format_response(responses::OK, HELP_TEXT)),
        Command::Quit => handle_cmd_quit(client),
        Command::Unknown(verb) => CommandResult::failure(
            format!("Unknown command: {verb}"),
            format_response(
                responses::SYNTAX_ERROR,
                "Unknown command or missing arguments. Try HELP.",
            ),
        ),
    }
}

/// Carries a validator alert back to the client as a reply line.
#[derive(Default)]
struct ReplyNotifier {
    reply: Option<String>,
}

impl Notifier for ReplyNotifier {
    fn alert(&mut self, message: &str) {
        self.reply = Some(format_response(responses::VALIDATION_FAILED, message));
    }
}

fn error_result(err: ServerError) -> CommandResult {
    if matches!(
        err,
        ServerError::Auth(AuthError::Hashing(_)) | ServerError::Task(_) | ServerError::Io(_)
    ) {
        handle_error(&err);
    }
    CommandResult::failure(err.to_string(), error_to_reply(&err))
}

/// Refuses the attempt when the client's IP has used up its SIGNUP/LOGIN budget.
async fn check_rate_limit(client: &Client, context: &ServerContext) -> Option<CommandResult> {
    let ip = client.client_addr().ip();
    let verdict = context.rate_limiter.lock().await.check(ip);

    verdict.err().map(|retry_after| {
        let secs = retry_after.as_secs_f64().ceil().max(1.0) as u64;
        warn!("Rate limited {} for {}s", ip, secs);
        CommandResult::failure(
            "Rate limited",
            format_response(
                responses::SERVICE_UNAVAILABLE,
                &format!("Too many attempts. Try again in {secs}s."),
            ),
        )
    })
}

/// Handles SIGNUP: validator first, then account checks, then creation.
///
/// A successful signup does not log the client in.
async fn handle_cmd_signup(
    client: &Client,
    request: SignupRequest,
    context: &ServerContext,
) -> CommandResult {
    if let Some(limited) = check_rate_limit(client, context).await {
        return limited;
    }

    let mut notifier = ReplyNotifier::default();
    if !validate_and_notify(&request.password, &request.confirmation, &mut notifier) {
        let reply = notifier.reply.unwrap_or_default();
        return CommandResult::failure("Signup validation failed", reply);
    }

    match create_account(request, context).await {
        Ok(username) => {
            info!("Account created: {} ({} accounts)", username, context.store.len().await);
            CommandResult::success(format_response(
                responses::CREATED,
                "Account created! Please log in.",
            ))
        }
        Err(e) => error_result(e),
    }
}

async fn create_account(request: SignupRequest, context: &ServerContext) -> Result<String, ServerError> {
    let username = validate_username(&request.username, &context.startup)?;
    let email = validate_email(&request.email, &context.startup)?;

    // Checked before hashing so duplicates fail fast; `register` re-checks under the lock.
    if context.store.is_taken(&username, &email).await {
        return Err(StoreError::AlreadyExists { username, email }.into());
    }

    let password_hash = auth::hash_password_blocking(request.password).await?;
    let user = context.store.register(&username, &email, password_hash).await?;
    Ok(user.username)
}

/// Handles LOGIN: looks the account up by username or email and verifies the password.
async fn handle_cmd_login(
    client: &mut Client,
    request: LoginRequest,
    context: &ServerContext,
) -> CommandResult {
    if let Some(limited) = check_rate_limit(client, context).await {
        return limited;
    }

    match authenticate(request, context).await {
        Ok(user) => {
            info!("{} logged in as {}", client.client_addr(), user.username);
            let reply = format_response(
                responses::LOGIN_SUCCESS,
                &format!("Welcome, {}!", user.username),
            );
            client.login(user);
            CommandResult::success(reply)
        }
        Err(e) => error_result(e),
    }
}

async fn authenticate(request: LoginRequest, context: &ServerContext) -> Result<SessionUser, ServerError> {
    let user = context.store.find_by_identity(&request.identity).await?;
    auth::verify_password_blocking(request.password, user.password_hash.clone()).await?;
    Ok(SessionUser::from(&user))
}

/// Handles WHOAMI: the members-only dashboard.
fn handle_cmd_whoami(client: &Client) -> CommandResult {
    match client.session() {
        Some(user) => CommandResult::success(format_response(
            responses::OK,
            &format!("Logged in as {} <{}>", user.username, user.email),
        )),
        None => error_result(AuthError::NotLoggedIn.into()),
    }
}

/// Handles LOGOUT: ends the session but keeps the connection open.
fn handle_cmd_logout(client: &mut Client) -> CommandResult {
    match client.logout() {
        Some(user) => {
            info!("{} logged out", user.username);
            CommandResult::success(format_response(
                responses::LOGGED_OUT,
                "You have been logged out.",
            ))
        }
        None => error_result(AuthError::NotLoggedIn.into()),
    }
}

/// Handles QUIT: ends any session and signals connection close.
fn handle_cmd_quit(client: &mut Client) -> CommandResult {
    client.logout();
    CommandResult::close(format_response(responses::GOODBYE, "Goodbye"))
}
