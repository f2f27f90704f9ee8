//! survey-loom service binary.
//!
//! Loads configuration, connects the document store, wires the
//! handlers to their adapters and serves the HTTP surface.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use survey_loom::adapters::ai::{GeminiConfig, GeminiGenerator};
use survey_loom::adapters::http::{
    build_router, PartnerHandlers, ResponseHandlers, SurveyHandlers, TrackingHandlers,
};
use survey_loom::adapters::partners::{HttpPartnerForwarder, NoopPartnerForwarder};
use survey_loom::adapters::postgres::{
    ensure_schema, PostgresClickStore, PostgresEmailStore, PostgresResponseStore,
    PostgresSurveyStore, PostgresTrackingStore,
};
use survey_loom::application::handlers::partner::HandlePostbackHandler;
use survey_loom::application::handlers::response::{
    GenerateInsightsHandler, ListAllResponsesHandler, ListResponsesHandler, SubmitResponseHandler,
};
use survey_loom::application::handlers::survey::{
    BranchQuestionsHandler, EditSurveyHandler, GenerateSurveyHandler, GetSurveyHandler,
    ListSurveysHandler,
};
use survey_loom::application::handlers::tracking::{
    RecordWebhookHandler, SaveEmailHandler, StartTrackingHandler, TrackingStatsHandler,
};
use survey_loom::config::AppConfig;
use survey_loom::ports::{
    ClickStore, EmailStore, PartnerForwarder, ResponseStore, SurveyStore, TextGenerator,
    TrackingStore,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    config.validate()?;

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;
    ensure_schema(&pool).await?;
    tracing::info!("Document store ready");

    // Outbound adapters
    let api_key = config.ai.gemini_api_key.clone().unwrap_or_default();
    let gemini_config = GeminiConfig::new(api_key)
        .with_model(&config.ai.model)
        .with_base_url(&config.ai.base_url)
        .with_timeout(config.ai.timeout());
    let generator: Arc<dyn TextGenerator> = Arc::new(GeminiGenerator::new(gemini_config));

    let partner: Arc<dyn PartnerForwarder> = if config.partner.enabled {
        Arc::new(HttpPartnerForwarder::new(config.partner.clone()))
    } else {
        Arc::new(NoopPartnerForwarder)
    };

    // Stores
    let surveys: Arc<dyn SurveyStore> = Arc::new(PostgresSurveyStore::new(pool.clone()));
    let responses: Arc<dyn ResponseStore> = Arc::new(PostgresResponseStore::new(pool.clone()));
    let tracking: Arc<dyn TrackingStore> = Arc::new(PostgresTrackingStore::new(pool.clone()));
    let clicks: Arc<dyn ClickStore> = Arc::new(PostgresClickStore::new(pool.clone()));
    let emails: Arc<dyn EmailStore> = Arc::new(PostgresEmailStore::new(pool));

    // Application handlers
    let survey_handlers = SurveyHandlers::new(
        Arc::new(GenerateSurveyHandler::new(
            Arc::clone(&generator),
            Arc::clone(&surveys),
            config.server.public_base_url.clone(),
            config.server.frontend_url.clone(),
        )),
        Arc::new(GetSurveyHandler::new(
            Arc::clone(&surveys),
            Arc::clone(&clicks),
        )),
        Arc::new(ListSurveysHandler::new(Arc::clone(&surveys))),
        Arc::new(EditSurveyHandler::new(Arc::clone(&surveys))),
        Arc::new(BranchQuestionsHandler::new(Arc::clone(&surveys))),
    );

    let response_handlers = ResponseHandlers::new(
        Arc::new(SubmitResponseHandler::new(
            Arc::clone(&surveys),
            Arc::clone(&responses),
            Arc::clone(&tracking),
            Arc::clone(&partner),
        )),
        Arc::new(ListResponsesHandler::new(Arc::clone(&responses))),
        Arc::new(ListAllResponsesHandler::new(Arc::clone(&responses))),
        Arc::new(GenerateInsightsHandler::new(
            Arc::clone(&responses),
            Arc::clone(&generator),
        )),
    );

    let tracking_handlers = TrackingHandlers::new(
        Arc::new(StartTrackingHandler::new(Arc::clone(&tracking))),
        Arc::new(TrackingStatsHandler::new(Arc::clone(&tracking))),
        Arc::new(RecordWebhookHandler::new(Arc::clone(&clicks))),
        Arc::new(SaveEmailHandler::new(Arc::clone(&emails))),
    );

    let partner_handlers = PartnerHandlers::new(Arc::new(HandlePostbackHandler::new(
        Arc::clone(&responses),
        Arc::clone(&partner),
    )));

    let app = build_router(
        survey_handlers,
        response_handlers,
        tracking_handlers,
        partner_handlers,
        &config.server,
    );

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "survey-loom listening");
    axum::serve(listener, app).await?;

    Ok(())
}
