use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::token::SessionToken;

/// Bundled page served on a successful `/configure` request.
pub const CONFIGURE_PAGE_FILE: &str = "web/configure.html";

/// Ephemeral port on all interfaces, so a browser on another machine in the
/// same network can reach the page.
pub const DEFAULT_BIND: &str = "0.0.0.0:0";

const ERROR_CODE_NO_CONFIGURE_PAGE: u32 = 1;
const ERROR_MESSAGE_NO_CONFIGURE_PAGE: &str = "No bundled resource named 'configure.html'";

#[derive(Debug, Error)]
pub enum WebError {
    #[error("could not bind configure server: {0}")]
    Bind(#[source] std::io::Error),
}

/// What the one request the server exists for ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebOutcome {
    /// The configure page was delivered to the browser.
    Configured,
    /// The bundled page is missing; the browser got a JSON error instead.
    PageMissing,
}

struct ConfigureState {
    token: SessionToken,
    page: PathBuf,
    outcome: Mutex<Option<oneshot::Sender<WebOutcome>>>,
}

impl ConfigureState {
    /// Deliver the outcome to the waiting bootstrap flow. The channel is
    /// single-shot; requests after the first resolved one change nothing.
    fn resolve(&self, outcome: WebOutcome) {
        let sender = self.outcome.lock().ok().and_then(|mut slot| slot.take());
        if let Some(sender) = sender {
            let _ = sender.send(outcome);
        }
    }
}

async fn serve_configure(
    State(state): State<Arc<ConfigureState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    // A query string may carry the token parameter more than once; any value
    // that matches authorises the request. Each comparison is constant-time.
    let authorised = params
        .iter()
        .any(|(key, value)| key == "token" && state.token.matches(value));
    if !authorised {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    // tokio::fs runs the read on the blocking pool, keeping the event loop
    // free the same way the original dispatched the resource load off the
    // request thread.
    match tokio::fs::read(&state.page).await {
        Ok(bytes) => {
            state.resolve(WebOutcome::Configured);
            (
                [(header::CONTENT_TYPE, "text/html;charset=UTF-8")],
                bytes,
            )
                .into_response()
        }
        Err(err) => {
            log::error!(
                "configure page '{}' could not be read: {err}",
                state.page.display()
            );
            state.resolve(WebOutcome::PageMissing);
            Json(json!({
                "error_code": ERROR_CODE_NO_CONFIGURE_PAGE,
                "error_message": ERROR_MESSAGE_NO_CONFIGURE_PAGE,
            }))
            .into_response()
        }
    }
}

fn configure_router(state: Arc<ConfigureState>) -> Router {
    Router::new()
        .route("/configure", get(serve_configure))
        .with_state(state)
}

/// A web server that exists to answer one `/configure` request and then go
/// away.
///
/// The token is generated per instance and threaded into the handler through
/// the router state; nothing about the server outlives [`wait`].
///
/// [`wait`]: ConfigureServer::wait
pub struct ConfigureServer {
    addr: SocketAddr,
    token: SessionToken,
    outcome: oneshot::Receiver<WebOutcome>,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ConfigureServer {
    /// Bind an ephemeral port on all interfaces and start serving.
    pub async fn start(page: PathBuf) -> Result<Self, WebError> {
        Self::start_on(DEFAULT_BIND, page).await
    }

    /// Bind an explicit address. Bind failures surface here, before any task
    /// is spawned.
    pub async fn start_on(bind: &str, page: PathBuf) -> Result<Self, WebError> {
        let listener = TcpListener::bind(bind).await.map_err(WebError::Bind)?;
        let addr = listener.local_addr().map_err(WebError::Bind)?;

        let token = SessionToken::generate();
        let (outcome_tx, outcome_rx) = oneshot::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let state = Arc::new(ConfigureState {
            token: token.clone(),
            page,
            outcome: Mutex::new(Some(outcome_tx)),
        });

        let app = configure_router(state);
        let task = tokio::spawn(async move {
            let serve = axum::serve(listener, app).with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            });
            if let Err(err) = serve.await {
                log::error!("configure server exited: {err}");
            }
        });

        log::debug!("configure server listening on {addr}");
        Ok(Self {
            addr,
            token,
            outcome: outcome_rx,
            shutdown: shutdown_tx,
            task,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// The URL the user has to open, token included.
    ///
    /// When bound to the unspecified address the loopback address is shown;
    /// users on another machine substitute the host's own address.
    pub fn configure_url(&self) -> String {
        let host = if self.addr.ip().is_unspecified() {
            "127.0.0.1".to_string()
        } else {
            self.addr.ip().to_string()
        };
        format!(
            "http://{host}:{port}/configure?token={token}",
            port = self.addr.port(),
            token = self.token.as_str()
        )
    }

    /// Block until the one request has been handled, then drain the server.
    ///
    /// `None` means the server went away without resolving an outcome; the
    /// caller treats that as the defensive unknown state.
    pub async fn wait(self) -> Option<WebOutcome> {
        let outcome = self.outcome.await.ok();
        let _ = self.shutdown.send(());
        let _ = self.task.await;
        outcome
    }
}
