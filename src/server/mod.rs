//! Portfolio server with live reload
//!
//! Content is read per request, so edits to the JSON files or detail
//! documents show up on the next page load without a rebuild.

use anyhow::Result;
use axum::{
    extract::{
        ws::{Message, WebSocket},
        Path, State, WebSocketUpgrade,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::content::{ContentLoader, DetailSource, FsDetailSource, PortfolioData};
use crate::error::AppError;
use crate::generator::Generator;
use crate::view::{DetailPanel, DetailState, PageState};
use crate::Portfolio;

/// Live reload script injected into the page
const LIVE_RELOAD_SCRIPT: &str = r#"
<script>
(function() {
    var ws = new WebSocket('ws://' + location.host + '/__livereload');
    ws.onmessage = function(msg) {
        if (msg.data === 'reload') {
            location.reload();
        }
    };
    ws.onclose = function() {
        console.log('Live reload disconnected. Attempting to reconnect...');
        setTimeout(function() { location.reload(); }, 1000);
    };
})();
</script>
</body>
"#;

/// Server state shared by all handlers
pub struct ServerState {
    loader: ContentLoader,
    details: FsDetailSource,
    generator: Generator,
    static_dir: PathBuf,
    reload_tx: broadcast::Sender<()>,
    live_reload: bool,
}

impl ServerState {
    pub fn new(portfolio: &Portfolio, live_reload: bool) -> Result<Self> {
        let (reload_tx, _) = broadcast::channel::<()>(16);

        Ok(Self {
            loader: ContentLoader::new(portfolio),
            details: FsDetailSource::new(portfolio),
            generator: Generator::new(portfolio)?,
            static_dir: portfolio.static_dir.clone(),
            reload_tx,
            live_reload,
        })
    }

    /// Sender used to tell connected pages to reload
    pub fn reload_sender(&self) -> broadcast::Sender<()> {
        self.reload_tx.clone()
    }

    fn page(&self, html: String) -> Html<String> {
        if self.live_reload {
            Html(inject_live_reload(&html))
        } else {
            Html(html)
        }
    }
}

/// Build the application router
pub fn router(state: Arc<ServerState>) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/data", get(data_handler))
        .route("/api/project/:slug", get(project_handler))
        .route("/project/:slug", get(detail_fragment_handler))
        .route("/__livereload", get(livereload_handler))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(
    portfolio: &Portfolio,
    ip: &str,
    port: u16,
    watch: bool,
    open: bool,
) -> Result<()> {
    let state = Arc::new(ServerState::new(portfolio, watch)?);
    let reload_tx = state.reload_sender();
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    if watch {
        println!("Live reload enabled. Watching for changes...");
    }
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    if watch {
        let watched = vec![
            portfolio.data_dir.clone(),
            portfolio.detail_dir.clone(),
            portfolio.static_dir.clone(),
        ];
        let config_path = portfolio.base_dir.join("_config.yml");

        tokio::task::spawn_blocking(move || {
            if let Err(e) = watch_and_reload(watched, config_path, reload_tx) {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Watch content directories and notify connected pages
fn watch_and_reload(
    dirs: Vec<PathBuf>,
    config_path: PathBuf,
    reload_tx: broadcast::Sender<()>,
) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    for dir in dirs.iter().filter(|d| d.exists()) {
        debouncer.watcher().watch(dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", dir);
    }

    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant: Vec<_> = events
                    .iter()
                    .filter(|e| {
                        let path_str = e.path.to_string_lossy();
                        !path_str.contains(".git")
                            && !path_str.contains(".DS_Store")
                            && !path_str.ends_with('~')
                    })
                    .collect();

                if relevant.is_empty() {
                    continue;
                }

                for event in &relevant {
                    println!("📝 File changed: {}", event.path.display());
                }

                if relevant.iter().any(|e| e.path == config_path) {
                    tracing::warn!("_config.yml changed; restart the server to apply it");
                }

                // No receivers just means no page is open
                let _ = reload_tx.send(());
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

/// `GET /api/data`
async fn data_handler(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<PortfolioData>, AppError> {
    Ok(Json(state.loader.load().await?))
}

/// `GET /api/project/:slug`
async fn project_handler(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let content = state.details.fetch(&slug).await?;
    Ok(Json(serde_json::json!({ "content": content })))
}

/// `GET /`
async fn index_handler(State(state): State<Arc<ServerState>>) -> Result<Response, AppError> {
    let page = PageState::load(&state.loader).await;
    let html = state.generator.render_page(&page)?;

    let status = if page.is_failed() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };

    Ok((status, state.page(html)).into_response())
}

/// `GET /project/:slug`, the detail panel fragment
async fn detail_fragment_handler(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let slug = slug.strip_suffix(".html").unwrap_or(&slug);

    // The project only supplies the heading; the document is fetched either way
    let data = match state.loader.load().await {
        Ok(data) => Some(data),
        Err(e) => {
            tracing::warn!("Rendering detail {:?} without project data: {}", slug, e.cause);
            None
        }
    };
    let project = data.as_ref().and_then(|d| d.project_by_slug(slug));

    let mut panel = DetailPanel::new();
    let detail = panel
        .load(slug, &state.details, state.generator.markdown())
        .await;

    let status = match detail {
        DetailState::NotFound { .. } => StatusCode::NOT_FOUND,
        DetailState::Error { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::OK,
    };
    let html = state.generator.render_detail(slug, project, detail)?;

    Ok((status, Html(html)).into_response())
}

/// WebSocket handler for live reload
async fn livereload_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    let reload_rx = state.reload_tx.subscribe();
    ws.on_upgrade(move |socket| handle_livereload_socket(socket, reload_rx))
}

async fn handle_livereload_socket(mut socket: WebSocket, mut reload_rx: broadcast::Receiver<()>) {
    tracing::debug!("Live reload client connected");

    loop {
        tokio::select! {
            result = reload_rx.recv() => {
                match result {
                    Ok(_) => {
                        if socket.send(Message::Text("reload".to_string())).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                }
            }
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
        }
    }

    tracing::debug!("Live reload client disconnected");
}

/// Inject live reload script into HTML content
fn inject_live_reload(html: &str) -> String {
    if html.contains("</body>") {
        html.replace("</body>", LIVE_RELOAD_SCRIPT)
    } else {
        format!("{}{}", html, LIVE_RELOAD_SCRIPT)
    }
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
