//! End-to-end tests for the terra API.
//!
//! Each test starts a wiremock server standing in for the upstream countries
//! provider, builds the full router with [`terra_api::app`], and drives it
//! with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use terra_api::AppState;
use terra_client::{CountriesApiConfig, CountriesClient};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// -- Helpers ------------------------------------------------------------------

fn test_app(upstream: &MockServer) -> Router {
    let config = CountriesApiConfig::local_mock(&upstream.uri()).unwrap();
    terra_api::app(AppState::new(CountriesClient::new(config).unwrap()))
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_search(app: Router, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/countries/search")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

fn country(
    cca3: &str,
    name: &str,
    population: u64,
    languages: &[(&str, &str)],
    region: &str,
    borders: &[&str],
) -> Value {
    let languages: serde_json::Map<String, Value> = languages
        .iter()
        .map(|(k, v)| (k.to_string(), json!(v)))
        .collect();
    json!({
        "cca3": cca3,
        "name": {"common": name},
        "capital": [format!("{name} City")],
        "population": population,
        "languages": languages,
        "region": region,
        "borders": borders,
    })
}

async fn mount_get(server: &MockServer, route: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

// -- Health, OpenAPI, metrics -------------------------------------------------

#[tokio::test]
async fn health_probes_answer_without_upstream() {
    let upstream = MockServer::start().await;

    let resp = test_app(&upstream)
        .oneshot(Request::builder().uri("/health/liveness").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ok");

    let resp = test_app(&upstream)
        .oneshot(Request::builder().uri("/health/readiness").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ready");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let upstream = MockServer::start().await;
    let (status, body) = get(test_app(&upstream), "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/route"].is_object());
    assert!(body["paths"]["/countries/search"].is_object());
}

#[tokio::test]
async fn metrics_without_recorder_is_404() {
    let upstream = MockServer::start().await;
    let (status, _) = get(test_app(&upstream), "/metrics").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_path_is_404() {
    let upstream = MockServer::start().await;
    let (status, _) = get(test_app(&upstream), "/countries").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// -- GET /countries/{code}/neighbors ------------------------------------------

#[tokio::test]
async fn neighbors_sums_population_and_finds_shared_languages() {
    let upstream = MockServer::start().await;
    mount_get(
        &upstream,
        "/alpha/AAA",
        200,
        json!([country("AAA", "Aland", 10, &[("eng", "English")], "Europe", &["BBB", "CCC", "DDD"])]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/alpha"))
        .and(query_param("codes", "BBB,CCC,DDD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            country("BBB", "Bland", 100, &[("eng", "English")], "Europe", &["AAA"]),
            country("CCC", "Cland", 50, &[("fra", "French")], "Europe", &["AAA"]),
            country("DDD", "Dland", 30, &[("eng", "English"), ("deu", "German")], "Europe", &["AAA"]),
        ])))
        .expect(1)
        .mount(&upstream)
        .await;

    let (status, body) = get(test_app(&upstream), "/countries/aaa/neighbors").await;
    assert_eq!(status, StatusCode::OK);
    // Own population plus every fetched neighbor.
    assert_eq!(body["total_border_population"], 190);
    assert_eq!(body["neighbors"].as_array().unwrap().len(), 3);
    assert_eq!(body["neighbors"][0]["name"], "Bland");
    assert_eq!(body["neighbors"][0]["capital"], "Bland City");
    assert_eq!(body["shared_language_neighbors"], json!(["Bland", "Dland"]));
}

#[tokio::test]
async fn neighbors_of_island_makes_one_upstream_call() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alpha/ISL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([country(
            "ISL",
            "Iceland",
            366425,
            &[("isl", "Icelandic")],
            "Europe",
            &[]
        )])))
        .expect(1)
        .mount(&upstream)
        .await;

    let (status, body) = get(test_app(&upstream), "/countries/ISL/neighbors").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "neighbors": [],
            "total_border_population": 366425,
            "shared_language_neighbors": []
        })
    );
}

#[tokio::test]
async fn neighbors_of_unknown_country_is_404() {
    let upstream = MockServer::start().await;
    mount_get(&upstream, "/alpha/ZZZ", 404, json!({"status": 404, "message": "Not Found"})).await;

    let (status, body) = get(test_app(&upstream), "/countries/ZZZ/neighbors").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn neighbors_upstream_failure_is_500_without_details() {
    let upstream = MockServer::start().await;
    mount_get(&upstream, "/alpha/FRA", 503, json!({"message": "maintenance window"})).await;

    let (status, body) = get(test_app(&upstream), "/countries/FRA/neighbors").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    assert!(!body.to_string().contains("maintenance"));
}

// -- GET /route ---------------------------------------------------------------

fn border_snapshot() -> Value {
    json!([
        {"cca3": "AAA", "borders": ["BBB", "CCC"]},
        {"cca3": "BBB", "borders": ["AAA", "DDD"]},
        {"cca3": "CCC", "borders": ["AAA", "DDD"]},
        {"cca3": "DDD", "borders": ["BBB", "CCC", "EEE"]},
        {"cca3": "EEE", "borders": ["DDD"]},
        {"cca3": "ISL", "borders": []},
    ])
}

async fn mount_snapshot(upstream: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/all"))
        .and(query_param("fields", "cca3,borders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(border_snapshot()))
        .mount(upstream)
        .await;
}

#[tokio::test]
async fn route_finds_shortest_path_with_first_listed_tie_break() {
    let upstream = MockServer::start().await;
    mount_snapshot(&upstream).await;

    let (status, body) = get(test_app(&upstream), "/route?from=AAA&to=EEE").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"connected": true, "route": ["AAA", "BBB", "DDD", "EEE"]}));
}

#[tokio::test]
async fn route_between_disconnected_countries() {
    let upstream = MockServer::start().await;
    mount_snapshot(&upstream).await;

    let (status, body) = get(test_app(&upstream), "/route?from=AAA&to=ISL").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"connected": false, "route": []}));
}

#[tokio::test]
async fn route_to_self_does_not_call_upstream() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&upstream)
        .await;

    let (status, body) = get(test_app(&upstream), "/route?from=deu&to=DEU").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"connected": true, "route": ["DEU"]}));
}

#[tokio::test]
async fn route_with_unknown_code_is_404() {
    let upstream = MockServer::start().await;
    mount_snapshot(&upstream).await;

    let (status, body) = get(test_app(&upstream), "/route?from=AAA&to=ZZZ").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"]["message"].as_str().unwrap().contains("ZZZ"));

    let (status, _) = get(test_app(&upstream), "/route?from=ZZZ&to=AAA").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn route_bulk_fetch_failure_is_500() {
    let upstream = MockServer::start().await;
    mount_get(&upstream, "/all", 502, json!({})).await;

    let (status, body) = get(test_app(&upstream), "/route?from=AAA&to=EEE").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn route_without_parameters_is_400() {
    let upstream = MockServer::start().await;
    let (status, body) = get(test_app(&upstream), "/route").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

// -- GET /regions/{region}/stats ----------------------------------------------

#[tokio::test]
async fn region_stats_aggregate_population_and_languages() {
    let upstream = MockServer::start().await;
    mount_get(
        &upstream,
        "/region/Oceania",
        200,
        json!([
            country("FJI", "Fiji", 900, &[("eng", "English"), ("fij", "Fijian")], "Oceania", &[]),
            country("AUS", "Australia", 25000, &[("eng", "English")], "Oceania", &[]),
            country("NZL", "New Zealand", 5000, &[("eng", "English"), ("mri", "Māori")], "Oceania", &[]),
            country("TON", "Tonga", 100, &[("ton", "Tongan")], "Oceania", &[]),
            country("WSM", "Samoa", 200, &[("smo", "Samoan")], "Oceania", &[]),
            country("TUV", "Tuvalu", 10, &[("tvl", "Tuvaluan")], "Oceania", &[]),
        ]),
    )
    .await;

    let (status, body) = get(test_app(&upstream), "/regions/oceania/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_countries"], 6);
    assert_eq!(body["total_population"], 31210);
    assert!((body["average_population"].as_f64().unwrap() - 31210.0 / 6.0).abs() < 1e-9);
    assert_eq!(body["unique_languages"], 6);

    let top: Vec<&str> = body["top_5_countries_by_population"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(top, ["Australia", "New Zealand", "Fiji", "Samoa", "Tonga"]);
}

#[tokio::test]
async fn region_stats_invalid_region_is_400() {
    let upstream = MockServer::start().await;
    let (status, body) = get(test_app(&upstream), "/regions/Antarctic/stats").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn region_stats_empty_region_is_404() {
    let upstream = MockServer::start().await;
    mount_get(&upstream, "/region/Africa", 200, json!([])).await;

    let (status, _) = get(test_app(&upstream), "/regions/africa/stats").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn region_stats_upstream_404_is_404() {
    let upstream = MockServer::start().await;
    mount_get(&upstream, "/region/Asia", 404, json!({"status": 404})).await;

    let (status, _) = get(test_app(&upstream), "/regions/ASIA/stats").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// -- POST /countries/search ---------------------------------------------------

fn search_population() -> Value {
    json!([
        country("ESP", "Spain", 47_000_000, &[("spa", "Spanish")], "Europe", &[]),
        country("AND", "Andorra", 77_000, &[("cat", "Catalan")], "Europe", &[]),
        country("MEX", "Mexico", 128_000_000, &[("spa", "Spanish")], "Americas", &[]),
        country("PRT", "Portugal", 10_000_000, &[("por", "Portuguese")], "Europe", &[]),
    ])
}

#[tokio::test]
async fn search_without_region_uses_bulk_endpoint() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .and(query_param("fields", "cca3,name,population,languages,region"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_population()))
        .expect(1)
        .mount(&upstream)
        .await;

    let (status, body) = post_search(
        test_app(&upstream),
        json!({"minPopulation": 1_000_000, "languages": ["Spanish"]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"total": 2, "countries": [
            {"name": "Spain", "code": "ESP"},
            {"name": "Mexico", "code": "MEX"},
        ]})
    );
}

#[tokio::test]
async fn search_empty_body_returns_everything() {
    let upstream = MockServer::start().await;
    mount_get(&upstream, "/all", 200, search_population()).await;

    let (status, body) = post_search(test_app(&upstream), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);
}

#[tokio::test]
async fn search_with_region_uses_region_endpoint() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/region/Europe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            country("ESP", "Spain", 47_000_000, &[("spa", "Spanish")], "Europe", &[]),
            country("AND", "Andorra", 77_000, &[("cat", "Catalan")], "Europe", &[]),
            country("PRT", "Portugal", 10_000_000, &[("por", "Portuguese")], "Europe", &[]),
        ])))
        .expect(1)
        .mount(&upstream)
        .await;

    let (status, body) = post_search(
        test_app(&upstream),
        json!({"region": "europe", "maxPopulation": 10_000_000}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["countries"][0]["code"], "AND");
    assert_eq!(body["countries"][1]["code"], "PRT");
}

#[tokio::test]
async fn search_region_unknown_upstream_is_404() {
    let upstream = MockServer::start().await;
    mount_get(&upstream, "/region/Oceania", 404, json!({"status": 404})).await;

    let (status, body) = post_search(test_app(&upstream), json!({"region": "Oceania"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert!(body["error"]["message"].as_str().unwrap().contains("Oceania"));
}

#[tokio::test]
async fn search_region_with_no_countries_is_empty() {
    let upstream = MockServer::start().await;
    mount_get(&upstream, "/region/Oceania", 200, json!([])).await;

    let (status, body) = post_search(test_app(&upstream), json!({"region": "Oceania"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"total": 0, "countries": []}));
}

#[tokio::test]
async fn search_rejects_bad_input() {
    let upstream = MockServer::start().await;

    let (status, body) = post_search(test_app(&upstream), json!({"region": "Atlantis"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    let (status, body) = post_search(
        test_app(&upstream),
        json!({"minPopulation": 500, "maxPopulation": 100}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let req = Request::builder()
        .method("POST")
        .uri("/countries/search")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = send(test_app(&upstream), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_upstream_failure_is_500() {
    let upstream = MockServer::start().await;
    mount_get(&upstream, "/all", 500, json!({})).await;

    let (status, body) = post_search(test_app(&upstream), json!({})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["message"], "Error fetching countries data");
}
