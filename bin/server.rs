// Koľko stojí realita - Web Server
// Calculator page, JSON API and the social preview card

use anyhow::{Context, Result};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use clap::Parser;
use kolko_stoji_realita::{
    children_label, texts, CostInput, EstimateReport, HousingType, InvalidInput, Region,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Server configuration (flags or environment)
#[derive(Parser, Debug, Clone)]
#[command(name = "realita-server")]
#[command(about = "Web server for the Koľko stojí realita calculator", long_about = None)]
#[command(version)]
struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "REALITA_ADDR", default_value = "0.0.0.0:3000")]
    addr: String,

    /// Public URL of the page, used in share links and preview metadata
    #[arg(long, env = "REALITA_PUBLIC_URL", default_value = "https://kolko-stoji-realita.vercel.app")]
    public_url: String,
}

/// Shared application state
#[derive(Clone)]
struct AppState {
    config: Arc<ServerConfig>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Raw query parameters, validated by the library before use
#[derive(Deserialize, Debug)]
struct EstimateQuery {
    region: Option<String>,
    housing: Option<String>,
    #[serde(default)]
    children: i64,
    #[serde(default)]
    car: bool,
    /// Page the share link should point at (defaults to the public URL)
    url: Option<String>,
}

/// Estimate response: the library report plus a ready-made share link
#[derive(Serialize)]
struct EstimateResponse {
    #[serde(flatten)]
    report: EstimateReport,
    share_url: String,
}

#[derive(Serialize)]
struct RegionOption {
    key: &'static str,
    label: &'static str,
    multiplier: f64,
}

#[derive(Serialize)]
struct HousingOption {
    key: &'static str,
    label: &'static str,
    fixed_cost: u32,
}

#[derive(Serialize)]
struct ChildrenOption {
    value: u32,
    label: String,
}

#[derive(Serialize)]
struct OptionsResponse {
    regions: Vec<RegionOption>,
    housing: Vec<HousingOption>,
    children: Vec<ChildrenOption>,
}

// ============================================================================
// Share link
// ============================================================================

/// Facebook sharer URL carrying the page URL and the share text
fn facebook_share_url(page_url: &str, share_text: &str) -> String {
    format!(
        "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
        urlencoding::encode(page_url),
        urlencoding::encode(share_text)
    )
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/options - Answer choices with their labels
async fn get_options() -> impl IntoResponse {
    let options = OptionsResponse {
        regions: Region::ALL
            .iter()
            .map(|r| RegionOption {
                key: r.key(),
                label: r.label(),
                multiplier: r.multiplier(),
            })
            .collect(),
        housing: HousingType::ALL
            .iter()
            .map(|h| HousingOption {
                key: h.key(),
                label: h.label(),
                fixed_cost: h.fixed_cost(),
            })
            .collect(),
        children: (0..=3)
            .map(|n| ChildrenOption {
                value: n,
                label: children_label(n),
            })
            .collect(),
    };

    Json(ApiResponse::ok(options))
}

fn parse_query(query: &EstimateQuery) -> std::result::Result<CostInput, String> {
    let region = query.region.as_deref().ok_or("Missing query parameter: region")?;
    let housing = query.housing.as_deref().ok_or("Missing query parameter: housing")?;

    CostInput::parse(region, housing, query.children, query.car)
        .map_err(|e: InvalidInput| {
            tracing::debug!(field = e.field(), "Invalid calculator input");
            e.to_string()
        })
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<EstimateResponse>::error(message)),
    )
        .into_response()
}

/// GET /api/estimate?region=&housing=&children=&car=&url= - Estimate for one set of answers
async fn get_estimate(
    State(state): State<AppState>,
    query: std::result::Result<Query<EstimateQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            tracing::warn!("Malformed estimate query: {}", rejection.body_text());
            return bad_request(rejection.body_text());
        }
    };

    let input = match parse_query(&query) {
        Ok(input) => input,
        Err(message) => {
            tracing::warn!(?query, "Rejected estimate request: {}", message);
            return bad_request(message);
        }
    };

    let report = EstimateReport::new(input);
    tracing::debug!(?input, estimate = report.estimate, "Estimate computed");

    let page_url = query.url.as_deref().unwrap_or(&state.config.public_url);
    let share_url = facebook_share_url(page_url, &report.share_text);

    (
        StatusCode::OK,
        Json(ApiResponse::ok(EstimateResponse { report, share_url })),
    )
        .into_response()
}

/// GET /api/og - 1200x630 preview card for social networks
async fn og_image() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        render_og_svg(),
    )
}

fn render_og_svg() -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="1200" height="630" viewBox="0 0 1200 630">
  <rect width="1200" height="630" fill="#fafafa"/>
  <g font-family="Inter, system-ui, sans-serif" text-anchor="middle">
    <text x="600" y="150" font-size="24" fill="#9ca3af" letter-spacing="3.6">KOLKO STOJI REALITA</text>
    <text x="600" y="300" font-size="120" font-weight="800" fill="#111827">1 500+</text>
    <text x="600" y="365" font-size="36" fill="#6b7280">EUR / mesiac</text>
    <text x="600" y="425" font-size="28" fill="#374151">Real cost of living in Slovakia</text>
    <rect x="390" y="470" width="420" height="80" rx="20" fill="#111827"/>
    <text x="600" y="520" font-size="26" font-weight="600" fill="#ffffff">{}</text>
  </g>
</svg>
"##,
        "Vypocitaj si svoju realitu"
    )
}

/// GET / - Serve index.html
async fn serve_index() -> impl IntoResponse {
    Html(include_str!("../web/index.html"))
}

// ============================================================================
// Router
// ============================================================================

fn create_router(config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };

    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/options", get(get_options))
        .route("/estimate", get(get_estimate))
        .route("/og", get(og_image))
        .with_state(state);

    // Build main router
    Router::new()
        .route("/", get(serve_index))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();

    let config = ServerConfig::parse();
    let addr = config.addr.clone();

    tracing::info!("🌐 {} - Web Server", texts::PROJECT_NAME);
    tracing::info!(public_url = %config.public_url, "Share links point to the public URL");

    let app = create_router(config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to address {}", addr))?;

    tracing::info!("🚀 Server running on http://{}", addr);
    tracing::info!("   API: http://{}/api/estimate?region=stred&housing=najom", addr);

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        create_router(ServerConfig {
            addr: "127.0.0.1:0".to_string(),
            public_url: "https://example.test/".to_string(),
        })
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn get_body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = get(setup_test_app(), "/api/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "OK");
    }

    #[tokio::test]
    async fn test_estimate_family_in_bratislava() {
        let response = get(
            setup_test_app(),
            "/api/estimate?region=bratislava&housing=najom&children=2&car=true",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_body_json(response).await;
        let data = &json["data"];
        assert_eq!(data["estimate"], 2010);
        assert_eq!(data["formatted"], "2 010");
        assert_eq!(data["category"], "high");
        assert_eq!(data["other_regions"].as_array().unwrap().len(), 3);

        let share_url = data["share_url"].as_str().unwrap();
        assert!(share_url.starts_with("https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.test%2F"));
        assert!(share_url.contains("&quote=Moje%20re%C3%A1lne"));
    }

    #[tokio::test]
    async fn test_estimate_defaults_children_and_car() {
        let response = get(setup_test_app(), "/api/estimate?region=vychod&housing=rodicia").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_body_json(response).await;
        assert_eq!(json["data"]["estimate"], 630);
        assert_eq!(json["data"]["category"], "modest");
    }

    #[tokio::test]
    async fn test_estimate_rejects_unknown_region() {
        let response = get(setup_test_app(), "/api/estimate?region=praha&housing=najom").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_body_json(response).await;
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("praha"));
    }

    #[tokio::test]
    async fn test_estimate_rejects_negative_children() {
        let response = get(
            setup_test_app(),
            "/api/estimate?region=stred&housing=najom&children=-1",
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_estimate_malformed_query_returns_json_error() {
        for uri in [
            "/api/estimate?region=stred&housing=najom&children=abc",
            "/api/estimate?region=stred&housing=najom&children=1.5",
            "/api/estimate?region=stred&housing=najom&car=1",
        ] {
            let response = get(setup_test_app(), uri).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);

            let json = get_body_json(response).await;
            assert_eq!(json["success"], false, "{}", uri);
            assert!(json["error"].is_string(), "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_share_url_points_at_requesting_page() {
        let response = get(
            setup_test_app(),
            "/api/estimate?region=stred&housing=najom&url=https%3A%2F%2Fmirror.test%2Fcalc",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_body_json(response).await;
        let share_url = json["data"]["share_url"].as_str().unwrap();
        assert!(share_url.contains("?u=https%3A%2F%2Fmirror.test%2Fcalc&quote="));
    }

    #[tokio::test]
    async fn test_estimate_requires_housing() {
        let response = get(setup_test_app(), "/api/estimate?region=stred").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("housing"));
    }

    #[tokio::test]
    async fn test_options_lists_all_choices() {
        let response = get(setup_test_app(), "/api/options").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_body_json(response).await;
        let data = &json["data"];
        assert_eq!(data["regions"].as_array().unwrap().len(), 4);
        assert_eq!(data["housing"].as_array().unwrap().len(), 3);
        assert_eq!(data["children"][3]["label"], "3+");
        assert_eq!(data["regions"][1]["label"], "Západ SR");
    }

    #[tokio::test]
    async fn test_og_image_is_svg() {
        let response = get(setup_test_app(), "/api/og").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/svg+xml"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let svg = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(svg.contains(r#"width="1200" height="630""#));
        assert!(svg.contains("1 500+"));
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = get(setup_test_app(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
