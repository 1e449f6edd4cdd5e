#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use receptionist::config::{database, settings::{RunMode, Settings}};
use receptionist::services::llm::{ChatProvider, ChatSession, LlmError};
use receptionist::{app, AppState};
use sqlx::SqlitePool;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

/// Replies with a rendering of the transcript it was given, e.g. `user:Hi|model:Hello|user:Price?`.
#[derive(Default)]
pub struct EchoProvider {
    pub calls: AtomicUsize,
    pub sessions: Mutex<Vec<ChatSession>>,
}

impl EchoProvider {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub fn render_transcript(session: &ChatSession, message: &str) -> String {
    session
        .history
        .iter()
        .map(|turn| format!("{}:{}", turn.role.as_str(), turn.text))
        .chain(std::iter::once(format!("user:{}", message)))
        .collect::<Vec<_>>()
        .join("|")
}

#[async_trait]
impl ChatProvider for EchoProvider {
    async fn send_message(&self, session: &ChatSession, message: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sessions.lock().unwrap().push(session.clone());

        // Longer transcripts answer later so concurrent requests interleave.
        tokio::time::sleep(Duration::from_millis(10 * session.history.len() as u64)).await;

        Ok(render_transcript(session, message))
    }
}

pub struct FailingProvider;

#[async_trait]
impl ChatProvider for FailingProvider {
    async fn send_message(&self, _: &ChatSession, _: &str) -> Result<String, LlmError> {
        Err(LlmError::ApiError(
            "Quota exceeded for quota metric 'generate_content_requests' project 1234".to_string(),
        ))
    }
}

pub fn api_only_settings() -> Settings {
    Settings {
        mode: RunMode::Production,
        static_dir: "does-not-exist".to_string(),
        system_instruction: "You are a test receptionist.".to_string(),
        ..Settings::default()
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub db: SqlitePool,
    _dir: TempDir,
}

pub async fn setup_test_server_with(provider: Arc<dyn ChatProvider>, settings: Settings) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("leads.db").display());

    let db = database::connect(&url).await.unwrap();
    let state = AppState::new(db.clone(), provider, settings);

    TestApp {
        server: TestServer::new(app(state)).unwrap(),
        db,
        _dir: dir,
    }
}

pub async fn setup_test_server(provider: Arc<dyn ChatProvider>) -> TestApp {
    setup_test_server_with(provider, api_only_settings()).await
}
