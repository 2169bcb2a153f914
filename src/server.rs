use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::{
    ops::RangeInclusive,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_STATIC_MAX_AGE_SECONDS: u64 = 3_600;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const STATIC_MAX_AGE_SECONDS_BOUNDS: RangeInclusive<u64> = 0..=365 * 24 * 60 * 60;
const SERVICE_NAME: &str = "devfolio";
const HEALTH_PATH: &str = "/healthz";
const REQUEST_ID_HEADER: &str = "x-request-id";
const ASSETS_PATH: &str = "/assets";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Declaration order is severity order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
struct HostConfig {
    port: u16,
    dist_dir: PathBuf,
    static_max_age_seconds: u64,
    log_level: LogLevel,
}

impl HostConfig {
    fn from_env() -> Self {
        let port = env_value("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let dist_dir = env_value("DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let static_max_age_seconds = bounded_u64(
            env_value("STATIC_MAX_AGE_SECONDS").as_deref(),
            DEFAULT_STATIC_MAX_AGE_SECONDS,
            &STATIC_MAX_AGE_SECONDS_BOUNDS,
        );
        let log_level = env_value("LOG_LEVEL")
            .and_then(|value| LogLevel::from_str(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            static_max_age_seconds,
            log_level,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    config: HostConfig,
}

#[derive(Serialize)]
struct HealthPayload {
    ok: bool,
    service: &'static str,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = HostConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);
    let state = AppState {
        config: config.clone(),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        &config,
        LogLevel::Info,
        "server_started",
        serde_json::json!({
            "address": format!("http://127.0.0.1:{}", config.port),
            "dist_dir": config.dist_dir.display().to_string(),
            "static_max_age_seconds": config.static_max_age_seconds,
        }),
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_event(&config, LogLevel::Info, "server_stopped", serde_json::json!({}));
    Ok(())
}

fn build_router(state: AppState) -> Router {
    let dist_dir = state.config.dist_dir.clone();
    let static_service =
        ServeDir::new(&dist_dir).not_found_service(ServeFile::new(dist_dir.join("index.html")));

    // Asset misses are a bare 404, never the page shell.
    Router::new()
        .route(HEALTH_PATH, get(health))
        .nest_service(ASSETS_PATH, ServeDir::new(dist_dir.join("assets")))
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(state.clone(), access_log))
        .with_state(state)
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn health() -> Json<HealthPayload> {
    Json(HealthPayload {
        ok: true,
        service: SERVICE_NAME,
    })
}

async fn access_log(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = resolve_request_id(request.headers());

    let mut response = next.run(request).await;
    let status = response.status();

    let headers = response.headers_mut();
    if !headers.contains_key(header::CACHE_CONTROL) {
        let policy = cache_control_for(&path, status, state.config.static_max_age_seconds);
        headers.insert(header::CACHE_CONTROL, cache_control(&policy));
    }
    if let Ok(request_id_header) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }

    log_event(
        &state.config,
        request_log_level(&method, &path, status),
        "request_completed",
        serde_json::json!({
            "request_id": request_id,
            "method": method.as_str(),
            "path": path,
            "status": status.as_u16(),
            "duration_ms": started.elapsed().as_millis() as u64,
        }),
    );

    response
}

fn request_log_level(method: &Method, path: &str, status: StatusCode) -> LogLevel {
    if status.is_server_error() {
        LogLevel::Warn
    } else if *method == Method::GET && path == HEALTH_PATH {
        LogLevel::Debug
    } else {
        LogLevel::Info
    }
}

/// The page shell must revalidate so new bundle hashes are picked up; hashed
/// assets can be cached.
fn cache_control_for(path: &str, status: StatusCode, max_age_seconds: u64) -> String {
    if path == HEALTH_PATH {
        return "no-store".to_string();
    }

    if status == StatusCode::NOT_FOUND || path.ends_with('/') || path.ends_with(".html") {
        return "no-cache".to_string();
    }

    if max_age_seconds == 0 {
        "no-cache".to_string()
    } else {
        format!("public, max-age={max_age_seconds}")
    }
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

/// Trimmed value of an environment variable; blank counts as unset.
fn env_value(name: &str) -> Option<String> {
    let value = std::env::var(name).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Out-of-range or unparsable values fall back to `default` rather than clamping.
fn bounded_u64(raw: Option<&str>, default: u64, bounds: &RangeInclusive<u64>) -> u64 {
    match raw.map(str::trim).map(str::parse::<u64>) {
        Some(Ok(value)) if bounds.contains(&value) => value,
        _ => default,
    }
}

fn since_epoch() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    match headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
    {
        Some(upstream) if !upstream.is_empty() => upstream.to_string(),
        _ => {
            let sequence = REQUEST_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
            format!("req-{}-{sequence}", since_epoch().as_millis())
        }
    }
}

fn log_event(config: &HostConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    println!("{}", log_line(level, event, fields, since_epoch().as_secs()));
}

fn log_line(level: LogLevel, event: &str, fields: serde_json::Value, ts: u64) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(ts)),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use tower::ServiceExt;

    fn test_config(dist_dir: PathBuf) -> HostConfig {
        HostConfig {
            port: DEFAULT_PORT,
            dist_dir,
            static_max_age_seconds: DEFAULT_STATIC_MAX_AGE_SECONDS,
            log_level: LogLevel::Warn,
        }
    }

    fn test_dist() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join("index.html"),
            "<!doctype html><div id=\"app\"></div>",
        )
        .expect("write index");
        std::fs::write(dir.path().join("devfolio-3f2a.js"), "export default 1;").expect("write js");
        std::fs::create_dir(dir.path().join("assets")).expect("assets dir");
        std::fs::write(dir.path().join("assets").join("resume.pdf"), "%PDF-1.4\n").expect("write pdf");
        dir
    }

    async fn send_get(app: Router, uri: &str, request_id: Option<&str>) -> Response {
        let mut builder = axum::http::Request::builder().uri(uri);
        if let Some(request_id) = request_id {
            builder = builder.header(REQUEST_ID_HEADER, request_id);
        }

        app.oneshot(builder.body(Body::empty()).expect("request"))
            .await
            .expect("router is infallible")
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    #[tokio::test]
    async fn health_reports_ok_without_caching() {
        let dist = test_dist();
        let app = build_router(AppState {
            config: test_config(dist.path().to_path_buf()),
        });

        let response = send_get(app, HEALTH_PATH, Some("req-fixed")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
        assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-fixed");

        let payload: serde_json::Value =
            serde_json::from_str(&body_text(response).await).expect("json body");
        assert_eq!(payload["ok"], true);
        assert_eq!(payload["service"], SERVICE_NAME);
    }

    #[tokio::test]
    async fn page_shell_is_served_with_revalidation() {
        let dist = test_dist();
        let app = build_router(AppState {
            config: test_config(dist.path().to_path_buf()),
        });

        let response = send_get(app, "/", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        assert!(body_text(response).await.contains("id=\"app\""));
    }

    #[tokio::test]
    async fn bundle_assets_are_cacheable() {
        let dist = test_dist();
        let app = build_router(AppState {
            config: test_config(dist.path().to_path_buf()),
        });

        let response = send_get(app, "/devfolio-3f2a.js", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "public, max-age=3600"
        );
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_the_page_shell() {
        let dist = test_dist();
        let app = build_router(AppState {
            config: test_config(dist.path().to_path_buf()),
        });

        let response = send_get(app, "/no/such/page", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");
        assert!(body_text(response).await.contains("id=\"app\""));
    }

    #[tokio::test]
    async fn resume_download_is_served_from_assets() {
        let dist = test_dist();
        let app = build_router(AppState {
            config: test_config(dist.path().to_path_buf()),
        });

        let response = send_get(app, devfolio::content::RESUME_LINK.href, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.starts_with("%PDF"));
    }

    #[tokio::test]
    async fn missing_assets_do_not_fall_back_to_the_page_shell() {
        let dist = test_dist();
        let app = build_router(AppState {
            config: test_config(dist.path().to_path_buf()),
        });

        let response = send_get(app, "/assets/missing.pdf", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");
        assert!(!body_text(response).await.contains("id=\"app\""));
    }

    #[test]
    fn cache_policy_distinguishes_shell_from_assets() {
        assert_eq!(cache_control_for("/", StatusCode::OK, 60), "no-cache");
        assert_eq!(cache_control_for("/index.html", StatusCode::OK, 60), "no-cache");
        assert_eq!(cache_control_for("/app.wasm", StatusCode::OK, 60), "public, max-age=60");
        assert_eq!(cache_control_for("/app.wasm", StatusCode::OK, 0), "no-cache");
        assert_eq!(cache_control_for("/gone.css", StatusCode::NOT_FOUND, 60), "no-cache");
        assert_eq!(cache_control_for(HEALTH_PATH, StatusCode::OK, 60), "no-store");
    }

    #[test]
    fn bounded_values_fall_back_to_default() {
        let bounds = &STATIC_MAX_AGE_SECONDS_BOUNDS;
        assert_eq!(bounded_u64(Some(" 120 "), 5, bounds), 120);
        assert_eq!(bounded_u64(Some("0"), 5, bounds), 0);
        assert_eq!(bounded_u64(Some("-1"), 5, bounds), 5);
        assert_eq!(bounded_u64(Some("99999999999"), 5, bounds), 5);
        assert_eq!(bounded_u64(Some("soon"), 5, bounds), 5);
        assert_eq!(bounded_u64(None, 5, bounds), 5);
    }

    #[test]
    fn log_levels_parse_case_insensitively_and_order() {
        assert_eq!(LogLevel::from_str("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_str("warn"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_str("trace"), None);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
    }

    #[test]
    fn request_log_level_quiets_health_and_flags_failures() {
        assert_eq!(
            request_log_level(&Method::GET, HEALTH_PATH, StatusCode::OK),
            LogLevel::Debug
        );
        assert_eq!(
            request_log_level(&Method::GET, "/", StatusCode::OK),
            LogLevel::Info
        );
        assert_eq!(
            request_log_level(&Method::GET, "/", StatusCode::INTERNAL_SERVER_ERROR),
            LogLevel::Warn
        );
    }

    #[test]
    fn request_id_is_taken_from_header_or_generated() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  upstream-7  "));
        assert_eq!(resolve_request_id(&headers), "upstream-7");

        let generated = resolve_request_id(&HeaderMap::new());
        assert!(generated.starts_with("req-"));
        assert_ne!(generated, resolve_request_id(&HeaderMap::new()));
    }

    #[test]
    fn log_line_merges_fields_after_envelope() {
        let line = log_line(
            LogLevel::Info,
            "request_completed",
            serde_json::json!({ "status": 200, "path": "/" }),
            1_700_000_000,
        );

        assert_eq!(line["ts"], 1_700_000_000u64);
        assert_eq!(line["level"], "info");
        assert_eq!(line["event"], "request_completed");
        assert_eq!(line["status"], 200);
        assert_eq!(line["path"], "/");
    }
}
