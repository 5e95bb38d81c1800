//! Catalog, filter and page view integration tests

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::common::{json_request, parse_body, TestApp};

async fn get(uri: &str) -> (StatusCode, Value) {
    let app = TestApp::new();
    let response = app
        .router
        .oneshot(json_request(Method::GET, uri, None))
        .await
        .unwrap();
    let status = response.status();
    (status, parse_body(response).await)
}

fn ids(projects: &Value) -> Vec<u64> {
    projects
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect()
}

mod projects {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let app = TestApp::new();
        let response = app
            .router
            .oneshot(json_request(Method::GET, "/health", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn test_list_all_in_catalog_order() {
        let (status, body) = get("/api/projects").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(body[0]["title"], "Launch Film");
        assert_eq!(body[0]["assets"][0]["type"], "video");
    }

    #[tokio::test]
    async fn test_all_tag_is_identity() {
        let (_, unfiltered) = get("/api/projects").await;
        let (_, all) = get("/api/projects?tag=all").await;
        assert_eq!(unfiltered, all);
    }

    #[tokio::test]
    async fn test_filter_by_tag_keeps_order() {
        let (_, body) = get("/api/projects?tag=brand").await;
        assert_eq!(ids(&body), vec![1, 3, 6, 7]);

        let (_, body) = get("/api/projects?tag=ux/ui").await;
        assert_eq!(ids(&body), vec![2]);
    }

    #[tokio::test]
    async fn test_unknown_tag_is_empty() {
        let (status, body) = get("/api/projects?tag=photography").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_unknown_asset_type_is_other() {
        let (_, body) = get("/api/projects/5").await;
        assert_eq!(body["assets"][0]["type"], "other");
    }

    #[tokio::test]
    async fn test_get_project() {
        let (status, body) = get("/api/projects/4").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Narrative");
        assert_eq!(body["tag"], "strategy");
    }

    #[tokio::test]
    async fn test_get_unknown_project() {
        let (status, body) = get("/api/projects/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Project 99 not found" }));

        let (status, body) = get("/api/projects/abc").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Project abc not found" }));
    }

    #[tokio::test]
    async fn test_filters_mark_active_preset() {
        let (status, body) = get("/api/filters?active=go-to-market").await;
        assert_eq!(status, StatusCode::OK);

        let buttons = body.as_array().unwrap();
        let labels: Vec<&str> = buttons.iter().map(|b| b["label"].as_str().unwrap()).collect();
        assert_eq!(labels, vec!["All", "Brand", "UX/UI", "Strategy", "Go to Market"]);

        let active: Vec<&str> = buttons
            .iter()
            .filter(|b| b["active"] == true)
            .map(|b| b["tag"].as_str().unwrap())
            .collect();
        assert_eq!(active, vec!["go-to-market"]);
    }

    #[tokio::test]
    async fn test_filters_default_to_all() {
        let (_, body) = get("/api/filters").await;
        assert_eq!(body[0]["tag"], "all");
        assert_eq!(body[0]["active"], true);
    }
}

mod page {
    use super::*;

    fn card_ids(page: &Value) -> Vec<u64> {
        ids(&page["main"]["cards"])
    }

    fn card_spans(page: &Value) -> Vec<u64> {
        page["main"]["cards"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["span"].as_u64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_default_page_is_full_grid() {
        let (status, page) = get("/api/page").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["active_filter"], "all");
        assert_eq!(page["main"]["kind"], "grid");
        // Project 6 has no assets
        assert_eq!(card_ids(&page), vec![1, 2, 3, 4, 5, 7]);
        assert_eq!(card_spans(&page), vec![2, 2, 3, 3, 2, 2]);
    }

    #[tokio::test]
    async fn test_card_media_per_asset_kind() {
        let (_, page) = get("/api/page").await;
        let media: Vec<&str> = page["main"]["cards"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["media"]["type"].as_str().unwrap())
            .collect();
        assert_eq!(
            media,
            vec!["video", "figma", "image", "image", "placeholder", "image"]
        );
    }

    #[tokio::test]
    async fn test_filtered_grid() {
        let (_, page) = get("/api/page?filter=brand").await;

        assert_eq!(page["active_filter"], "brand");
        assert_eq!(card_ids(&page), vec![1, 3, 7]);
        assert_eq!(card_spans(&page), vec![2, 2, 3]);

        let active: Vec<&Value> = page["header"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|b| b["active"] == true)
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0]["label"], "Brand");
    }

    #[tokio::test]
    async fn test_selection_shows_detail() {
        let (status, page) = get("/api/page?filter=brand&selected=3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["main"]["kind"], "detail");
        assert_eq!(page["main"]["id"], 3);
        assert_eq!(page["main"]["title"], "Identity");
        assert!(page["main"].get("cards").is_none());
    }

    #[tokio::test]
    async fn test_selection_outside_filter_is_not_found() {
        let (status, body) = get("/api/page?filter=brand&selected=2").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Project 2 not found" }));
    }

    #[tokio::test]
    async fn test_non_numeric_selection_is_json_error() {
        let (status, body) = get("/api/page?selected=abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid query string" }));
    }

    #[tokio::test]
    async fn test_project_without_assets_can_still_open() {
        let (status, page) = get("/api/page?selected=6").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["main"]["kind"], "detail");
        assert_eq!(page["main"]["media"]["type"], "placeholder");
    }

    #[tokio::test]
    async fn test_unknown_filter_gives_empty_grid() {
        let (status, page) = get("/api/page?filter=photography").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["main"]["cards"], json!([]));
        assert!(page["header"]
            .as_array()
            .unwrap()
            .iter()
            .all(|b| b["active"] == false));
    }

    #[tokio::test]
    async fn test_sidebar_and_ticker() {
        let (_, page) = get("/api/page").await;

        assert_eq!(page["sidebar"]["profile"]["name"], "Alejandro");
        assert_eq!(page["sidebar"]["press"].as_array().unwrap().len(), 3);
        assert_eq!(page["ticker"]["logos"].as_array().unwrap().len(), 15);
        assert_eq!(page["ticker"]["slides_to_show"], 5);
    }
}
