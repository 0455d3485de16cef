use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::Value;

use course_recommender::{
    api::{create_router, AppState},
    config::Config,
    models::{Dashboard, HomeResponse, Recommendation},
    services::Catalog,
};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/courses.csv");

fn create_test_server() -> TestServer {
    let catalog = Catalog::load(FIXTURE).unwrap();
    let config = Config {
        recommendation_count: 3,
        ..Config::default()
    };
    let app = create_router(AppState::new(catalog, &config));
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();
    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("trace-42"),
        )
        .await;
    assert_eq!(response.headers().get("x-request-id").unwrap(), "trace-42");

    let response = server.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_home_get_is_empty() {
    let server = create_test_server();
    let page: HomeResponse = server.get("/").await.json();
    assert_eq!(page, HomeResponse::default());
}

#[tokio::test]
async fn test_home_post_exact_title_recommends() {
    let server = create_test_server();
    let response = server
        .post("/")
        .form(&[("course", "Web Programming with Python")])
        .await;
    response.assert_status_ok();

    let page: HomeResponse = response.json();
    assert!(page.show_title);
    assert!(!page.show_error);
    assert_eq!(page.course, "Web Programming with Python");
    assert_eq!(page.courses.len(), 3);
    assert_eq!(page.courses[0].course_title, "Learn Python Programming Masterclass");
    assert!(page
        .courses
        .iter()
        .all(|c| c.course_title != "Web Programming with Python"));
}

#[tokio::test]
async fn test_home_post_unknown_title_falls_back_to_search() {
    let server = create_test_server();
    let page: HomeResponse = server
        .post("/")
        .form(&[("course", "python")])
        .await
        .json();

    assert!(page.show_title);
    let titles: Vec<&str> = page.courses.iter().map(|c| c.course_title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Learn Python Programming Masterclass", "Web Programming with Python"]
    );
}

#[tokio::test]
async fn test_home_post_nothing_found() {
    let server = create_test_server();
    let page: HomeResponse = server
        .post("/")
        .form(&[("course", "underwater basket weaving")])
        .await
        .json();

    assert!(!page.show_title);
    assert!(page.show_error);
    assert!(page.courses.is_empty());
}

#[tokio::test]
async fn test_home_post_without_course_is_rejected() {
    let server = create_test_server();
    let response = server
        .post("/")
        .form(&[("title", "python")])
        .expect_failure()
        .await;
    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_api_recommendations() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("title", "Javascript for Beginners")
        .add_query_param("n", 2)
        .await;
    response.assert_status_ok();

    let results: Vec<Recommendation> = response.json();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].course_title, "Learn Javascript & JQuery From Scratch");
    assert!(results
        .iter()
        .all(|r| r.course_title != "Javascript for Beginners"));
    assert!(results[0].similarity_score >= results[1].similarity_score);
}

#[tokio::test]
async fn test_api_recommendations_unknown_title() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("title", "Rust for Everyone")
        .expect_failure()
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Rust for Everyone"));
}

#[tokio::test]
async fn test_api_search() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/courses/search")
        .add_query_param("q", "LEARN")
        .await;
    response.assert_status_ok();

    let results: Vec<Value> = response.json();
    let subscribers: Vec<u64> = results
        .iter()
        .map(|c| c["num_subscribers"].as_u64().unwrap())
        .collect();
    assert_eq!(subscribers, vec![75499, 61583, 2685, 1300]);
}

#[tokio::test]
async fn test_dashboard() {
    let server = create_test_server();
    let response = server.get("/dashboard").await;
    response.assert_status_ok();
    let dashboard: Dashboard = response.json();

    assert_eq!(dashboard.subject_counts.values.iter().sum::<u64>(), 10);
    assert_eq!(dashboard.level_counts.values.iter().sum::<u64>(), 10);
    assert_eq!(dashboard.subject_counts.labels[0], "Web Development");
    assert_eq!(dashboard.subject_counts.values[0], 6);

    // The guitar course has no usable publish date
    let dated: u64 = dashboard.yearly_subscribers.values.iter().sum();
    assert_eq!(dated, 352_045 - 1300);
    assert_eq!(
        dashboard.yearly_profit.labels,
        vec![2012, 2013, 2014, 2015, 2016, 2017]
    );

    let api: Dashboard = server.get("/api/v1/dashboard").await.json();
    assert_eq!(api, dashboard);
}
