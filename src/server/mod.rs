//! Web UI for webslide
//!
//! A single page with a topic form, an embedded preview of the latest slide
//! and a download link. One session per server process; the session lock is
//! held for the whole pipeline run, so runs never overlap. While a run is in
//! flight every other route waits on that lock, even when the search stage
//! hangs on the network.

mod page;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Form, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::config::Settings;
use crate::locale::Locale;
use crate::pipeline::{PipelineController, Session};
use crate::SlideError;

pub use page::{render_page, PageView};

/// RFC 5987 `attr-char`: everything else in `filename*` is percent-encoded.
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

#[derive(Clone)]
pub struct AppState {
    controller: Arc<PipelineController>,
    session: Arc<Mutex<Session>>,
    locale: Locale,
}

impl AppState {
    pub fn new(controller: PipelineController, locale: Locale) -> Self {
        Self {
            controller: Arc::new(controller),
            session: Arc::new(Mutex::new(Session::new())),
            locale,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateForm {
    #[serde(default)]
    topic: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate))
        .route("/slide", get(slide))
        .route("/download", get(download))
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(settings: &Settings, controller: PipelineController) -> Result<()> {
    let bind: SocketAddr = settings
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid server.bind '{}'", settings.server.bind))?;

    let app = router(AppState::new(controller, settings.slide.locale));
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;

    tracing::info!(%bind, "Starting web UI");
    println!("webslide is running at http://{}", bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down web UI");
        })
        .await
        .context("Web UI server failed")?;

    Ok(())
}

async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_page(&PageView {
        locale: state.locale,
        slide: session.current(),
        error: None,
        topic: "",
    }))
}

async fn generate(State(state): State<AppState>, Form(form): Form<GenerateForm>) -> Response {
    tracing::info!(topic = %form.topic, "Generate requested, waiting for session");
    let mut session = state.session.lock().await;

    match state.controller.run(&mut session, &form.topic).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => {
            let status = error_status(&e);
            let body = render_page(&PageView {
                locale: state.locale,
                slide: session.current(),
                error: Some(e.to_string()),
                topic: &form.topic,
            });
            (status, Html(body)).into_response()
        }
    }
}

async fn slide(State(state): State<AppState>) -> Response {
    let session = state.session.lock().await;
    match session.current() {
        Some(slide) => Html(slide.html.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "No slide has been generated yet").into_response(),
    }
}

async fn download(State(state): State<AppState>) -> Response {
    let session = state.session.lock().await;
    let Some(slide) = session.current() else {
        return (StatusCode::NOT_FOUND, "No slide has been generated yet").into_response();
    };

    (
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                content_disposition(&slide.download_filename()),
            ),
        ],
        slide.html.clone(),
    )
        .into_response()
}

fn error_status(error: &SlideError) -> StatusCode {
    match error {
        SlideError::EmptyTopic => StatusCode::BAD_REQUEST,
        SlideError::Generation(_) | SlideError::Schema(_) | SlideError::Search(_) => {
            StatusCode::BAD_GATEWAY
        }
        SlideError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Attachment header with an ASCII fallback plus the RFC 5987 UTF-8 name.
fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_control() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let encoded = utf8_percent_encode(filename, ATTR_CHAR);
    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}
