//! End-to-end flow through the router: load, submit, reset

use bytes::Bytes;
use formling::handlers::build_router;
use formling::schema::detail_schema;
use formling::session::{FormController, SimulatedBackend};
use formling_http::Request;
use formling_urls::DefaultRouter;
use hyper::{Method, StatusCode};
use std::sync::Arc;
use std::time::Duration;

fn router() -> DefaultRouter {
	let schema = Arc::new(detail_schema());
	let backend = SimulatedBackend::new(schema.clone()).with_latency(Duration::ZERO);
	let controller = Arc::new(FormController::new(Arc::new(backend)));
	build_router(schema, controller)
}

fn form_post(path: &str, body: &str) -> Request {
	Request::builder()
		.method(Method::POST)
		.uri(path)
		.body(Bytes::from(body.to_string()))
		.build()
}

fn json_get(path: &str) -> Request {
	Request::builder()
		.method(Method::GET)
		.uri(path)
		.header("accept", "application/json")
		.build()
}

#[tokio::test]
async fn test_landing_page_serves_html() {
	let router = router();
	let request = Request::builder().method(Method::GET).uri("/").build();

	let response = router.route(request).await.unwrap();

	assert_eq!(response.status, StatusCode::OK);
	let body = String::from_utf8(response.body.to_vec()).unwrap();
	assert!(body.contains("/detail"));
}

#[tokio::test]
async fn test_detail_get_serves_defaults() {
	let router = router();

	let response = router.route(json_get("/detail")).await.unwrap();
	assert_eq!(response.status, StatusCode::OK);

	let state: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
	assert_eq!(state["phase"], "idle");
	assert_eq!(state["token"], 1);
	assert_eq!(state["values"]["user"], serde_json::Value::Null);
	assert_eq!(state["values"]["gender"], "");
	assert_eq!(state["values"]["agree"], serde_json::json!([]));
}

#[tokio::test]
async fn test_valid_submit_redirects_see_other() {
	let router = router();
	router.route(json_get("/detail")).await.unwrap();

	let response = router
		.route(form_post(
			"/detail",
			"user=Kim&age=25&gender=male&country=korea&agree=1&agree=2",
		))
		.await
		.unwrap();

	assert_eq!(response.status, StatusCode::SEE_OTHER);
	assert_eq!(
		response.headers.get("location").unwrap().to_str().unwrap(),
		"/"
	);
}

#[tokio::test]
async fn test_invalid_submit_returns_field_errors() {
	let router = router();
	router.route(json_get("/detail")).await.unwrap();

	let request = Request::builder()
		.method(Method::POST)
		.uri("/detail")
		.header("accept", "application/json")
		.body(Bytes::from(
			"user=Kim&age=17&gender=&country=korea&agree=1&agree=2",
		))
		.build();
	let response = router.route(request).await.unwrap();

	assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
	let body: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
	assert_eq!(body["errors"]["age"][0], "must be at least 18");
	assert_eq!(body["errors"]["gender"][0], "please select");
	assert!(body["errors"].get("user").is_none());
}

#[tokio::test]
async fn test_invalid_submit_html_echoes_entered_values() {
	let router = router();
	router.route(json_get("/detail")).await.unwrap();

	let response = router
		.route(form_post("/detail", "user=Kim&age=17&country=korea"))
		.await
		.unwrap();

	assert_eq!(response.status, StatusCode::OK);
	let html = String::from_utf8(response.body.to_vec()).unwrap();
	assert!(html.contains("value=\"Kim\""));
	assert!(html.contains("value=\"17\""));
	assert!(html.contains("<p class=\"error\">please select</p>"));
}

#[tokio::test]
async fn test_reset_restores_defaults_and_bumps_token() {
	let router = router();
	router.route(json_get("/detail")).await.unwrap();
	router.route(form_post("/detail", "age=17")).await.unwrap();

	let request = Request::builder()
		.method(Method::POST)
		.uri("/detail/reset")
		.header("accept", "application/json")
		.build();
	let response = router.route(request).await.unwrap();

	assert_eq!(response.status, StatusCode::OK);
	let state: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
	assert_eq!(state["phase"], "idle");
	assert_eq!(state["token"], 2);
	assert!(state.get("errors").is_none());
	assert!(state.get("entered").is_none());
	assert_eq!(state["values"]["gender"], "");
}

#[tokio::test]
async fn test_unknown_path_is_404() {
	let router = router();
	let request = Request::builder().method(Method::GET).uri("/missing").build();

	let response = router.route(request).await.unwrap();
	assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_405() {
	let router = router();

	let delete = Request::builder()
		.method(Method::DELETE)
		.uri("/detail")
		.build();
	let response = router.route(delete).await.unwrap();
	assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);

	let get_reset = Request::builder()
		.method(Method::GET)
		.uri("/detail/reset")
		.build();
	let response = router.route(get_reset).await.unwrap();
	assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}
