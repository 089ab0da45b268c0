//! plann.er API server entry point.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use planner::adapters::email::ResendMailer;
use planner::adapters::http::{api_router, ActivityHandlers, ParticipantHandlers, TripHandlers};
use planner::adapters::postgres::{
    PostgresActivityRepository, PostgresParticipantRepository, PostgresTripRepository,
};
use planner::application::handlers::activity::{CreateActivityHandler, ListActivitiesHandler};
use planner::application::handlers::participant::{
    ConfirmParticipantHandler, CreateInviteHandler,
};
use planner::application::handlers::trip::{ConfirmTripHandler, CreateTripHandler};
use planner::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    info!(
        environment = ?config.server.environment,
        "starting plann.er API"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("database migrations applied");
    }

    let trips = Arc::new(PostgresTripRepository::new(pool.clone()));
    let participants = Arc::new(PostgresParticipantRepository::new(pool.clone()));
    let activities = Arc::new(PostgresActivityRepository::new(pool));
    let mailer = Arc::new(ResendMailer::new(config.email.clone())?);

    let trip_handlers = TripHandlers::new(
        Arc::new(CreateTripHandler::new(
            trips.clone(),
            mailer.clone(),
            config.links.clone(),
        )),
        Arc::new(ConfirmTripHandler::new(
            trips.clone(),
            participants.clone(),
            mailer.clone(),
            config.links.clone(),
        )),
    );
    let activity_handlers = ActivityHandlers::new(
        Arc::new(CreateActivityHandler::new(
            trips.clone(),
            activities.clone(),
        )),
        Arc::new(ListActivitiesHandler::new(trips.clone(), activities)),
    );
    let participant_handlers = ParticipantHandlers::new(
        Arc::new(CreateInviteHandler::new(
            trips,
            participants.clone(),
            mailer,
            config.links.clone(),
        )),
        Arc::new(ConfirmParticipantHandler::new(
            participants,
            config.links.clone(),
        )),
    );

    let cors = build_cors_layer(&config);
    let app = api_router(trip_handlers, activity_handlers, participant_handlers)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr();
    info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_cors_layer(config: &AppConfig) -> CorsLayer {
    let methods = [Method::GET, Method::POST];
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(Any)
    }
}
