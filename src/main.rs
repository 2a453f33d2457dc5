use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use speakwell::application::services::{AnswerScorer, QuestionGenerator, TranscriptionService};
use speakwell::domain::LanguageCatalog;
use speakwell::infrastructure::audio::OpenAiWhisperEngine;
use speakwell::infrastructure::llm::OpenAiClient;
use speakwell::infrastructure::observability::init_tracing;
use speakwell::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&settings.tracing_config(environment));

    if settings.llm.api_key.is_empty() {
        tracing::warn!("No API key configured; remote calls will fail and degrade to fallbacks");
    }

    let catalog = match &settings.languages.catalog_path {
        Some(path) => LanguageCatalog::from_file(path)
            .with_context(|| format!("Failed to load language catalog {}", path.display()))?,
        None => LanguageCatalog::bundled().context("Bundled language catalog is invalid")?,
    };
    let catalog = Arc::new(catalog);
    tracing::info!(languages = catalog.entries().len(), "Language catalog loaded");

    let timeout = settings.llm.request_timeout();
    let llm_client = Arc::new(OpenAiClient::new(
        settings.llm.api_key.clone(),
        Some(settings.llm.base_url.clone()),
        timeout,
    )?);
    let transcription_engine = Arc::new(OpenAiWhisperEngine::new(
        settings.llm.api_key.clone(),
        Some(settings.llm.base_url.clone()),
        timeout,
    )?);

    let transcription_service = Arc::new(TranscriptionService::new(
        transcription_engine,
        Arc::clone(&catalog),
        settings.transcription.model.clone(),
    ));
    let question_generator = Arc::new(QuestionGenerator::new(
        llm_client.clone(),
        Arc::clone(&catalog),
        (&settings.generation).into(),
    ));
    let answer_scorer = Arc::new(AnswerScorer::new(llm_client, (&settings.scoring).into()));

    tokio::fs::create_dir_all(&settings.uploads.dir)
        .await
        .with_context(|| format!("Failed to create {}", settings.uploads.dir.display()))?;

    let state = AppState {
        transcription_service,
        question_generator,
        answer_scorer,
        catalog,
        upload_dir: settings.uploads.dir.clone(),
        max_upload_bytes: settings.uploads.max_file_size_bytes(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
