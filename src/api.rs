//! HTTP surface of the dashboard.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::callbacks::{CallbackInputs, Dependency};
use crate::data::site::SiteSelection;
use crate::error::DashboardError;
use crate::state::AppState;
use crate::ui::chart::ChartSpec;
use crate::ui::layout::{
    DropdownOption, Layout, PAYLOAD_SLIDER_ID, PIE_CHART_ID, SCATTER_CHART_ID, SITE_DROPDOWN_ID,
};
use crate::ui::page::INDEX_HTML;

/// Reactive update request: recompute `output` from the current input values.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub output: String,
    #[serde(default)]
    pub inputs: CallbackInputs,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub output: String,
    pub figure: ChartSpec,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub records: usize,
}

#[derive(Debug, Deserialize)]
pub struct PieQuery {
    pub site: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScatterQuery {
    pub site: Option<String>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct OptionsQuery {
    #[serde(default)]
    pub search: String,
    /// Currently committed dropdown value; always kept in the result.
    pub selected: Option<String>,
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health_check))
        .route("/api/layout", get(layout))
        .route("/api/dependencies", get(dependencies))
        .route("/api/update", post(update))
        .route("/api/pie-chart", get(pie_chart))
        .route("/api/scatter-chart", get(scatter_chart))
        .route("/api/site-options", get(site_options))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        records: state.dataset.len(),
    })
}

async fn layout(State(state): State<Arc<AppState>>) -> Json<Layout> {
    Json(state.layout.clone())
}

async fn dependencies(State(state): State<Arc<AppState>>) -> Json<Vec<Dependency>> {
    Json(state.callbacks.dependencies())
}

/// Run the callback registered for the requested output.
async fn update(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UpdateRequest>,
) -> Result<Json<UpdateResponse>, DashboardError> {
    let figure = state.callbacks.dispatch(&request.output, &request.inputs)?;
    Ok(Json(UpdateResponse {
        output: request.output,
        figure,
    }))
}

async fn pie_chart(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PieQuery>,
) -> Result<Json<ChartSpec>, DashboardError> {
    let site = query
        .site
        .unwrap_or_else(|| SiteSelection::All.value().to_string());
    let inputs = CallbackInputs::new().with(SITE_DROPDOWN_ID, json!(site));
    state.callbacks.dispatch(PIE_CHART_ID, &inputs).map(Json)
}

/// Scatter chart; a missing bound falls back to the slider's initial value.
async fn scatter_chart(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ScatterQuery>,
) -> Result<Json<ChartSpec>, DashboardError> {
    let site = query
        .site
        .unwrap_or_else(|| SiteSelection::All.value().to_string());
    let low = query.low.unwrap_or(state.dataset.min_payload());
    let high = query.high.unwrap_or(state.dataset.max_payload());

    let inputs = CallbackInputs::new()
        .with(SITE_DROPDOWN_ID, json!(site))
        .with(PAYLOAD_SLIDER_ID, json!([low, high]));
    state.callbacks.dispatch(SCATTER_CHART_ID, &inputs).map(Json)
}

async fn site_options(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OptionsQuery>,
) -> Result<Json<Vec<DropdownOption>>, DashboardError> {
    let dropdown = state
        .layout
        .dropdown(SITE_DROPDOWN_ID)
        .ok_or_else(|| DashboardError::UnknownComponent(SITE_DROPDOWN_ID.to_string()))?;
    let options = match &query.selected {
        Some(selected) => dropdown.visible_options(&query.search, selected),
        None => dropdown.filter_options(&query.search),
    };
    Ok(Json(options.into_iter().cloned().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample_dataset;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(Arc::new(AppState::new(sample_dataset()).unwrap()))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    #[tokio::test]
    async fn test_index_serves_page() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("plotly"));
        assert!(html.contains("/api/update"));
    }

    #[tokio::test]
    async fn test_health_reports_records() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["records"], 12);
    }

    #[tokio::test]
    async fn test_layout_and_dependencies() {
        let (status, layout) = get_json("/api/layout").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(layout["children"][1]["id"], SITE_DROPDOWN_ID);

        let (status, deps) = get_json("/api/dependencies").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(deps.as_array().unwrap().len(), 2);
        assert_eq!(deps[1]["output"], SCATTER_CHART_ID);
    }

    #[tokio::test]
    async fn test_update_scatter() {
        let (status, body) = post_json(
            "/api/update",
            json!({
                "output": SCATTER_CHART_ID,
                "inputs": { SITE_DROPDOWN_ID: "slc-4e", PAYLOAD_SLIDER_ID: [0, 10000] }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["output"], SCATTER_CHART_ID);
        assert_eq!(body["figure"]["kind"], "scatter");
        let series = body["figure"]["series"].as_array().unwrap();
        let points: usize = series.iter().map(|s| s["points"].as_array().unwrap().len()).sum();
        assert_eq!(points, 2);
    }

    #[tokio::test]
    async fn test_update_unknown_output_is_404() {
        let (status, body) = post_json("/api/update", json!({ "output": "nope" })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("nope"));
    }

    #[tokio::test]
    async fn test_pie_chart_endpoint() {
        let (status, body) = get_json("/api/pie-chart").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "pie");
        assert_eq!(body["title"], "Total Successful Launches by Site");
        assert_eq!(body["slices"].as_array().unwrap().len(), 4);

        let (status, body) = get_json("/api/pie-chart?site=lc-39a").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Total Successful Launches by Site LC-39A");
    }

    #[tokio::test]
    async fn test_unknown_site_is_400() {
        let (status, body) = get_json("/api/pie-chart?site=mars").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("mars"));
    }

    #[tokio::test]
    async fn test_scatter_chart_endpoint_bounds() {
        // default range is the data range [0, 9600]: both extremes excluded
        let (status, body) = get_json("/api/scatter-chart").await;
        assert_eq!(status, StatusCode::OK);
        let total: usize = body["series"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["points"].as_array().unwrap().len())
            .sum();
        assert_eq!(total, 10);

        let (status, _) = get_json("/api/scatter-chart?low=9000&high=1000").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_site_options_search() {
        let (status, body) = get_json("/api/site-options?search=VAFB").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{ "label": "VAFB SLC-4E", "value": "slc-4e" }]));

        let (_, all) = get_json("/api/site-options").await;
        assert_eq!(all.as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_site_options_keep_selected_entry() {
        let (status, body) = get_json("/api/site-options?search=slc&selected=all").await;
        assert_eq!(status, StatusCode::OK);
        let values: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["value"].as_str().unwrap())
            .collect();
        assert_eq!(values, ["all", "slc-40", "slc-4e"]);

        let (_, body) = get_json("/api/site-options?search=ksc&selected=all").await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }
}
