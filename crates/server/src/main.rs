// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{error, info};

use score_ledger_api::{
    AddWinRequest, AddWinResponse, ApiError, AuthenticatedActor, CreateBackupResponse,
    LeaderboardRequest, LeaderboardResponse, ListBackupsResponse, MatchHistoryRequest,
    MatchHistoryResponse, OverviewResponse, RecordMatchRequest, RecordMatchResponse,
    RemoveWinRequest, RemoveWinResponse, RestoreBackupRequest, RestoreBackupResponse, Role,
    SetWinsRequest, SetWinsResponse, StatsResponse, add_win, authenticate_stub, create_backup,
    get_leaderboard, get_match_history, get_overview, get_stats, list_backups, record_match,
    remove_win, restore_backup, set_wins,
};
use score_ledger_persistence::{DEFAULT_MAX_BACKUPS, FileStore, PersistenceError};

/// Score Ledger Server - HTTP server for the Best-of-7 Score Ledger
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the ledger JSON file
    #[arg(short, long, default_value = "scores.json")]
    data_file: PathBuf,

    /// Directory backups are written to
    #[arg(short, long, default_value = "backups")]
    backup_dir: PathBuf,

    /// How many rotated backups to keep
    #[arg(long, default_value_t = DEFAULT_MAX_BACKUPS)]
    max_backups: usize,

    /// Hours between scheduled backups
    #[arg(long, default_value_t = 24)]
    backup_interval_hours: u64,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The file store is wrapped in a Mutex so that every read-mutate-write
/// cycle against the ledger file runs to completion before the next one
/// starts.
#[derive(Clone)]
struct AppState {
    /// The single-file ledger store.
    store: Arc<Mutex<FileStore>>,
}

/// API request for adding a win.
///
/// This includes authentication information in addition to the payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct AddWinApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The user to credit.
    user_id: String,
    /// The rank name.
    rank: String,
}

/// API request for removing a win.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RemoveWinApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The user to debit.
    user_id: String,
    /// The rank name.
    rank: String,
}

/// API request for overwriting a win count.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SetWinsApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The user whose count is overwritten.
    user_id: String,
    /// The rank name.
    rank: String,
    /// The new count.
    wins: i64,
}

/// API request for reporting a finished series.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RecordMatchApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The first player's identifier.
    player1_id: String,
    /// The first player's display name.
    player1_name: String,
    /// The second player's identifier.
    player2_id: String,
    /// The second player's display name.
    player2_name: String,
    /// The rank the series was played at.
    rank: String,
    /// The winning player's identifier.
    winner_id: String,
    /// Games won by the winner (1-7).
    winner_score: u8,
    /// Games won by the loser (0-6).
    loser_score: u8,
}

/// API request carrying only actor identity, for backup creation.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateBackupApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
}

/// API request for restoring a backup.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RestoreBackupApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The backup file name to restore.
    file_name: String,
}

/// Query parameters identifying the actor for the backup listing.
#[derive(Debug, Deserialize)]
struct ActorQuery {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
}

/// Query parameters for the leaderboard endpoint.
#[derive(Debug, Deserialize)]
struct LeaderboardQuery {
    /// Restrict the board to one rank.
    rank: Option<String>,
    /// How many rows to return.
    limit: Option<usize>,
}

/// Query parameters for the match-history endpoint.
#[derive(Debug, Deserialize)]
struct HistoryQuery {
    /// Restrict the history to one user.
    user_id: Option<String>,
    /// How many records to return.
    limit: Option<usize>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::AuthenticationFailed { .. } => Self {
                status: StatusCode::UNAUTHORIZED,
                message: err.to_string(),
            },
            ApiError::Unauthorized { .. } => Self {
                status: StatusCode::FORBIDDEN,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Storage { .. } => {
                error!(error = %err, "Storage error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Parses a role string and authenticates the actor.
fn authenticate(actor_id: &str, role_str: &str) -> Result<AuthenticatedActor, HttpError> {
    let role: Role =
        Role::parse(role_str.to_lowercase().as_str()).map_err(|_| HttpError {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid role: '{role_str}'. Must be 'admin' or 'member'"),
        })?;
    authenticate_stub(actor_id, role).map_err(|e| HttpError {
        status: StatusCode::UNAUTHORIZED,
        message: e.to_string(),
    })
}

/// Handler for GET `/` endpoint.
///
/// Liveness probe.
async fn handle_live() -> &'static str {
    "Best-of-7 Score Ledger server is running"
}

/// Handler for POST `/wins/add` endpoint.
async fn handle_add_win(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AddWinApiRequest>,
) -> Result<Json<AddWinResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        user_id = %req.user_id,
        rank = %req.rank,
        "Handling add_win request"
    );

    let actor: AuthenticatedActor = authenticate(&req.actor_id, &req.actor_role)?;
    let request: AddWinRequest = AddWinRequest {
        user_id: req.user_id,
        rank: req.rank,
    };

    let store = app_state.store.lock().await;
    let response: AddWinResponse = add_win(&store, &request, &actor)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/wins/remove` endpoint.
async fn handle_remove_win(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RemoveWinApiRequest>,
) -> Result<Json<RemoveWinResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        user_id = %req.user_id,
        rank = %req.rank,
        "Handling remove_win request"
    );

    let actor: AuthenticatedActor = authenticate(&req.actor_id, &req.actor_role)?;
    let request: RemoveWinRequest = RemoveWinRequest {
        user_id: req.user_id,
        rank: req.rank,
    };

    let store = app_state.store.lock().await;
    let response: RemoveWinResponse = remove_win(&store, &request, &actor)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/wins/set` endpoint.
async fn handle_set_wins(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SetWinsApiRequest>,
) -> Result<Json<SetWinsResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        user_id = %req.user_id,
        rank = %req.rank,
        wins = req.wins,
        "Handling set_wins request"
    );

    let actor: AuthenticatedActor = authenticate(&req.actor_id, &req.actor_role)?;
    let request: SetWinsRequest = SetWinsRequest {
        user_id: req.user_id,
        rank: req.rank,
        wins: req.wins,
    };

    let store = app_state.store.lock().await;
    let response: SetWinsResponse = set_wins(&store, &request, &actor)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/matches` endpoint.
async fn handle_record_match(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RecordMatchApiRequest>,
) -> Result<Json<RecordMatchResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        winner_id = %req.winner_id,
        rank = %req.rank,
        "Handling record_match request"
    );

    let actor: AuthenticatedActor = authenticate(&req.actor_id, &req.actor_role)?;
    let request: RecordMatchRequest = RecordMatchRequest {
        player1_id: req.player1_id,
        player1_name: req.player1_name,
        player2_id: req.player2_id,
        player2_name: req.player2_name,
        rank: req.rank,
        winner_id: req.winner_id,
        winner_score: req.winner_score,
        loser_score: req.loser_score,
    };

    let store = app_state.store.lock().await;
    let response: RecordMatchResponse = record_match(&store, &request, &actor)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/stats/{user_id}` endpoint.
async fn handle_get_stats(
    AxumState(app_state): AxumState<AppState>,
    Path(user_id): Path<String>,
) -> Json<StatsResponse> {
    let store = app_state.store.lock().await;
    let response: StatsResponse = get_stats(&store, &user_id);
    drop(store);

    Json(response)
}

/// Handler for GET `/leaderboard` endpoint.
async fn handle_get_leaderboard(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<LeaderboardResponse>, HttpError> {
    let request: LeaderboardRequest = LeaderboardRequest {
        rank: query.rank,
        limit: query.limit,
    };

    let store = app_state.store.lock().await;
    let response: LeaderboardResponse = get_leaderboard(&store, &request)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/overview` endpoint.
async fn handle_get_overview(
    AxumState(app_state): AxumState<AppState>,
) -> Json<OverviewResponse> {
    let store = app_state.store.lock().await;
    let response: OverviewResponse = get_overview(&store);
    drop(store);

    Json(response)
}

/// Handler for GET `/matches` endpoint.
async fn handle_get_matches(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Json<MatchHistoryResponse> {
    let request: MatchHistoryRequest = MatchHistoryRequest {
        user_id: query.user_id,
        limit: query.limit,
    };

    let store = app_state.store.lock().await;
    let response: MatchHistoryResponse = get_match_history(&store, &request);
    drop(store);

    Json(response)
}

/// Handler for POST `/backups` endpoint.
async fn handle_create_backup(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateBackupApiRequest>,
) -> Result<Json<CreateBackupResponse>, HttpError> {
    info!(actor_id = %req.actor_id, "Handling create_backup request");

    let actor: AuthenticatedActor = authenticate(&req.actor_id, &req.actor_role)?;

    let store = app_state.store.lock().await;
    let response: CreateBackupResponse = create_backup(&store, &actor)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/backups` endpoint.
async fn handle_list_backups(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ActorQuery>,
) -> Result<Json<ListBackupsResponse>, HttpError> {
    let actor: AuthenticatedActor = authenticate(&query.actor_id, &query.actor_role)?;

    let store = app_state.store.lock().await;
    let response: ListBackupsResponse = list_backups(&store, &actor)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/backups/restore` endpoint.
async fn handle_restore_backup(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RestoreBackupApiRequest>,
) -> Result<Json<RestoreBackupResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        file_name = %req.file_name,
        "Handling restore_backup request"
    );

    let actor: AuthenticatedActor = authenticate(&req.actor_id, &req.actor_role)?;
    let request: RestoreBackupRequest = RestoreBackupRequest {
        file_name: req.file_name,
    };

    let store = app_state.store.lock().await;
    let response: RestoreBackupResponse = restore_backup(&store, &request, &actor)?;
    drop(store);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_live))
        .route("/wins/add", post(handle_add_win))
        .route("/wins/remove", post(handle_remove_win))
        .route("/wins/set", post(handle_set_wins))
        .route("/matches", post(handle_record_match))
        .route("/matches", get(handle_get_matches))
        .route("/stats/{user_id}", get(handle_get_stats))
        .route("/leaderboard", get(handle_get_leaderboard))
        .route("/overview", get(handle_get_overview))
        .route("/backups", post(handle_create_backup))
        .route("/backups", get(handle_list_backups))
        .route("/backups/restore", post(handle_restore_backup))
        .with_state(app_state)
}

/// Spawns the periodic backup task.
///
/// A backup is taken every `interval_hours` hours for as long as the
/// server runs. A missing ledger file is not an error, there is simply
/// nothing to back up yet.
fn spawn_backup_task(store: Arc<Mutex<FileStore>>, interval_hours: u64) {
    tokio::spawn(async move {
        let period: Duration = Duration::from_secs(interval_hours * 3600);
        let mut ticker: tokio::time::Interval = tokio::time::interval(period);
        // The first tick of a tokio interval completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let store = store.lock().await;
            match store.create_backup() {
                Ok(entry) => {
                    info!(file_name = %entry.file_name, "Scheduled backup created");
                }
                Err(PersistenceError::PrimaryMissing) => {
                    info!("Skipping scheduled backup, ledger has never been written");
                }
                Err(err) => {
                    error!(error = %err, "Scheduled backup failed");
                }
            }
        }
    });
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Score Ledger Server");
    info!(
        data_file = %args.data_file.display(),
        backup_dir = %args.backup_dir.display(),
        max_backups = args.max_backups,
        "Using file-backed ledger"
    );

    let store: FileStore = FileStore::new(&args.data_file, &args.backup_dir, args.max_backups);
    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
    };

    spawn_backup_task(app_state.store.clone(), args.backup_interval_hours);

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
