//! Tests for GET and POST /search

use std::sync::Arc;

use birdsearch_domain::ReadinessState;
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::{Client, LocalResponse};
use serde_json::Value;

use crate::test_utils::{StubSearchService, client_for, owls};

async fn json_body(response: LocalResponse<'_>) -> Value {
    let body = response.into_string().await.expect("response body");
    serde_json::from_str(&body).expect("JSON body")
}

async fn post_json(client: &Client, body: &str) -> (Status, Value) {
    let response = client
        .post("/search")
        .header(ContentType::JSON)
        .body(body)
        .dispatch()
        .await;
    (response.status(), json_body(response).await)
}

#[rocket::async_test]
async fn test_get_search_returns_ranked_results() {
    let service = Arc::new(StubSearchService::ready(owls()));
    let client = client_for(Arc::clone(&service)).await;

    let response = client.get("/search?query=large%20owl&topK=2").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    let json = json_body(response).await;
    assert_eq!(json["query"], "large owl");
    assert_eq!(json["resultsCount"], 2);
    assert_eq!(json["results"][0]["name"], "Indian Eagle-Owl");
    assert_eq!(json["results"][0]["scientificName"], "Bubo bengalensis");
    assert_eq!(json["results"][1]["name"], "Brown Fish Owl");
    assert!(json["results"][0]["score"].is_number());
    assert!(
        json["results"][0]["content"]
            .as_str()
            .unwrap()
            .starts_with("Indian Eagle-Owl (Bubo bengalensis)")
    );
    assert_eq!(service.searches(), vec![("large owl".to_string(), 2)]);
}

#[rocket::async_test]
async fn test_get_search_defaults_top_k_to_five() {
    let service = Arc::new(StubSearchService::ready(owls()));
    let client = client_for(Arc::clone(&service)).await;

    let response = client.get("/search?query=owl").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(service.searches(), vec![("owl".to_string(), 5)]);
}

#[rocket::async_test]
async fn test_get_search_parameter_names_ignore_case() {
    let service = Arc::new(StubSearchService::ready(owls()));
    let client = client_for(Arc::clone(&service)).await;

    let response = client.get("/search?Query=owl&topk=1").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(service.searches(), vec![("owl".to_string(), 1)]);
}

#[rocket::async_test]
async fn test_get_search_requires_query() {
    let service = Arc::new(StubSearchService::ready(owls()));
    let client = client_for(Arc::clone(&service)).await;

    for uri in ["/search", "/search?query=", "/search?query=%20%20&topK=3"] {
        let response = client.get(uri).dispatch().await;

        assert_eq!(response.status(), Status::BadRequest, "{uri}");
        assert_eq!(json_body(response).await["error"], "Query parameter is required");
    }
    assert!(service.searches().is_empty());
}

#[rocket::async_test]
async fn test_get_search_rejects_top_k_out_of_range() {
    let service = Arc::new(StubSearchService::ready(owls()));
    let client = client_for(Arc::clone(&service)).await;

    for top_k in ["0", "51", "-3", "many"] {
        let response = client
            .get(format!("/search?query=owl&topK={top_k}"))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest, "topK={top_k}");
        assert_eq!(json_body(response).await["error"], "topK must be between 1 and 50");
    }
    assert!(service.searches().is_empty());
}

#[rocket::async_test]
async fn test_top_k_bounds_are_inclusive() {
    let service = Arc::new(StubSearchService::ready(owls()));
    let client = client_for(Arc::clone(&service)).await;

    for top_k in [1, 50] {
        let response = client
            .get(format!("/search?query=owl&topK={top_k}"))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok, "topK={top_k}");
    }
}

#[rocket::async_test]
async fn test_search_while_initializing_is_unavailable() {
    let service = Arc::new(StubSearchService::in_state(ReadinessState::Initializing));
    let client = client_for(service).await;

    let response = client.get("/search?query=owl").dispatch().await;

    assert_eq!(response.status(), Status::ServiceUnavailable);
    assert_eq!(
        json_body(response).await["error"],
        "Service is initializing, please try again shortly"
    );
}

#[rocket::async_test]
async fn test_search_failure_hides_internal_error() {
    let service = Arc::new(StubSearchService::failing_search());
    let client = client_for(service).await;

    let response = client.get("/search?query=owl").dispatch().await;

    assert_eq!(response.status(), Status::InternalServerError);
    let body = response.into_string().await.unwrap();
    assert!(body.contains("An error occurred processing your search"));
    assert!(!body.contains("deployment overloaded"));
}

#[rocket::async_test]
async fn test_post_search_returns_results() {
    let service = Arc::new(StubSearchService::ready(owls()));
    let client = client_for(Arc::clone(&service)).await;

    let (status, json) = post_json(&client, r#"{"query": "owl", "topK": 3}"#).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(json["query"], "owl");
    assert_eq!(json["resultsCount"], 3);
    assert_eq!(json["results"].as_array().unwrap().len(), 3);
    assert_eq!(service.searches(), vec![("owl".to_string(), 3)]);
}

#[rocket::async_test]
async fn test_post_search_defaults_top_k_to_five() {
    let service = Arc::new(StubSearchService::ready(owls()));
    let client = client_for(Arc::clone(&service)).await;

    let (status, _) = post_json(&client, r#"{"query": "owl"}"#).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(service.searches(), vec![("owl".to_string(), 5)]);
}

#[rocket::async_test]
async fn test_post_search_validation() {
    let service = Arc::new(StubSearchService::ready(owls()));
    let client = client_for(Arc::clone(&service)).await;

    let (status, json) = post_json(&client, r#"{"query": "   ", "topK": 3}"#).await;
    assert_eq!(status, Status::BadRequest);
    assert_eq!(json["error"], "Query is required");

    let (status, json) = post_json(&client, r#"{"topK": 3}"#).await;
    assert_eq!(status, Status::BadRequest);
    assert_eq!(json["error"], "Query is required");

    let (status, json) = post_json(&client, r#"{"query": "owl", "topK": -1}"#).await;
    assert_eq!(status, Status::BadRequest);
    assert_eq!(json["error"], "topK must be between 1 and 50");

    let (status, json) = post_json(&client, r#"{"query": "owl", "topK": 51}"#).await;
    assert_eq!(status, Status::BadRequest);
    assert_eq!(json["error"], "topK must be between 1 and 50");

    assert!(service.searches().is_empty());
}

#[rocket::async_test]
async fn test_post_search_malformed_body_is_bad_request() {
    let service = Arc::new(StubSearchService::ready(owls()));
    let client = client_for(Arc::clone(&service)).await;

    for body in [r#"{"query": "owl""#, r#"{"query": "owl", "topK": "5"}"#, "[1, 2]"] {
        let (status, json) = post_json(&client, body).await;

        assert_eq!(status, Status::BadRequest, "{body}");
        assert_eq!(json["error"], "Request body must be a JSON object with a query");
    }
    assert!(service.searches().is_empty());
}

#[rocket::async_test]
async fn test_post_search_null_fields_count_as_absent() {
    let service = Arc::new(StubSearchService::ready(owls()));
    let client = client_for(Arc::clone(&service)).await;

    let (status, _) = post_json(&client, r#"{"query": "owl", "topK": null}"#).await;
    assert_eq!(status, Status::Ok);
    assert_eq!(service.searches(), vec![("owl".to_string(), 5)]);

    let (status, json) = post_json(&client, r#"{"query": null, "topK": 2}"#).await;
    assert_eq!(status, Status::BadRequest);
    assert_eq!(json["error"], "Query is required");
}

#[rocket::async_test]
async fn test_post_search_non_integer_top_k_is_out_of_range() {
    let service = Arc::new(StubSearchService::ready(owls()));
    let client = client_for(Arc::clone(&service)).await;

    for top_k in ["1e3", "2.5", "-0.5"] {
        let (status, json) =
            post_json(&client, &format!(r#"{{"query": "owl", "topK": {top_k}}}"#)).await;

        assert_eq!(status, Status::BadRequest, "topK={top_k}");
        assert_eq!(json["error"], "topK must be between 1 and 50");
    }
    assert!(service.searches().is_empty());
}

#[rocket::async_test]
async fn test_post_search_without_content_type_is_accepted() {
    let service = Arc::new(StubSearchService::ready(owls()));
    let client = client_for(Arc::clone(&service)).await;

    let response = client
        .post("/search")
        .body(r#"{"query": "owl", "topK": 1}"#)
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(service.searches(), vec![("owl".to_string(), 1)]);
}

#[rocket::async_test]
async fn test_unknown_route_is_json_not_found() {
    let client = client_for(Arc::new(StubSearchService::ready(owls()))).await;

    let response = client.get("/birds").dispatch().await;

    assert_eq!(response.status(), Status::NotFound);
    assert_eq!(json_body(response).await["error"], "Not Found");
}
