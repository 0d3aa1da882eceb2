use anyhow::Context;
use axum::Router;
use storage::{Database, EVENT_CHANGES_CHANNEL, live::EventChangeListener};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod live;
mod routes;
mod state;

use config::Config;
use features::{leaderboards, results, schedule};
use live::LiveSchedule;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        leaderboards::handlers::get_leaderboards,
        results::handlers::list_results,
        schedule::handlers::get_schedule,
        schedule::handlers::get_event,
        schedule::handlers::stream_schedule,
    ),
    components(
        schemas(
            storage::dto::leaderboard::LeaderboardResponse,
            storage::dto::leaderboard::BranchStanding,
            storage::dto::leaderboard::IndividualStanding,
            storage::dto::results::ResultBoardEntry,
            storage::dto::schedule::ScheduleResponse,
            storage::dto::schedule::ScheduleCategory,
            storage::dto::common::PaginationMeta,
            storage::models::Branch,
            storage::models::Event,
            storage::models::EventType,
            storage::models::Entry,
            storage::models::EntryType,
            storage::models::Gender,
            storage::models::EventResult,
            storage::models::TeamMember,
        )
    ),
    tags(
        (name = "leaderboards", description = "Branch standings and individual achiever rankings"),
        (name = "results", description = "Live results board"),
        (name = "schedule", description = "Event schedule with live status updates"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Kalolsavam results API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    // Listen before loading so no update between the two is lost.
    let listener = EventChangeListener::connect(db.pool(), EVENT_CHANGES_CHANNEL)
        .await
        .context("Failed to subscribe to event changes")?;
    let board = schedule::services::load_schedule(db.pool())
        .await
        .context("Failed to load schedule")?;
    tracing::info!(events = board.len(), "Schedule loaded");

    let live_schedule = LiveSchedule::new(board);
    live::spawn_listener(listener, live_schedule.clone());

    let state = AppState {
        db,
        schedule: live_schedule,
    };

    let app = Router::new()
        .nest("/api", routes::api())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let bind_address = config.bind_address();
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let tcp_listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    axum::serve(tcp_listener, app).await?;

    Ok(())
}
