use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use serde_json::Value;
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, Value) {
    let resp = app()
        .oneshot(Request::builder().uri(uri).body(String::new()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes: bytes::Bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// --- envelope ---

#[tokio::test]
async fn ok_envelope_has_status_and_result() {
    let (status, body) = get("/api/contest.list?gym=false").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert!(body["result"].is_array());
    assert!(body.get("comment").is_none());
}

#[tokio::test]
async fn failed_envelope_is_400_with_comment() {
    let (status, body) = get("/api/user.info?handles=tourist;nobody").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "FAILED");
    assert_eq!(body["comment"], "handles: User with handle nobody not found");
    assert!(body.get("result").is_none());
}

#[tokio::test]
async fn unknown_method_fails() {
    let (status, body) = get("/api/blog.entry?blogEntryId=79").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["comment"], "Unknown method blog.entry");
}

// --- contest ---

#[tokio::test]
async fn contest_list_splits_gyms() {
    let (_, regular) = get("/api/contest.list?gym=false").await;
    let (_, gyms) = get("/api/contest.list?gym=true").await;
    assert_eq!(regular["result"].as_array().unwrap().len(), 3);
    assert_eq!(gyms["result"][0]["id"], 100001);
}

#[tokio::test]
async fn contest_hacks_requires_known_contest() {
    let (_, body) = get("/api/contest.hacks?contestId=374").await;
    assert_eq!(body["result"][0]["verdict"], "HACK_SUCCESSFUL");

    let (status, body) = get("/api/contest.hacks?contestId=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["comment"], "contestId: Field should contain only digits");
}

#[tokio::test]
async fn standings_filters_and_pages() {
    let (_, body) = get("/api/contest.standings?contestId=374&from=2&count=1").await;
    let result = &body["result"];
    assert_eq!(result["contest"]["id"], 374);
    assert_eq!(result["problems"].as_array().unwrap().len(), 2);
    let rows = result["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["party"]["members"][0]["handle"], "tourist");

    let (_, body) = get("/api/contest.standings?contestId=374&handles=Egor;Petr").await;
    assert_eq!(body["result"]["rows"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn standings_hides_unofficial_by_default() {
    let (_, official) = get("/api/contest.standings?contestId=374").await;
    let (_, all) = get("/api/contest.standings?contestId=374&showUnofficial=true").await;
    assert_eq!(official["result"]["rows"].as_array().unwrap().len(), 3);
    assert_eq!(all["result"]["rows"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn contest_status_newest_first_for_handle() {
    let (_, body) = get("/api/contest.status?contestId=374&handle=tourist&from=1").await;
    let ids: Vec<i64> = body["result"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1003, 1002]);
}

// --- problemset ---

#[tokio::test]
async fn problemset_problems_requires_all_tags() {
    let (_, body) = get("/api/problemset.problems?tags=greedy;implementation").await;
    let problems = body["result"]["problems"].as_array().unwrap();
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0]["name"], "Inna and Pink Pony");
    assert_eq!(body["result"]["problemStatistics"][0]["solvedCount"], 5123);
}

#[tokio::test]
async fn problemset_problems_by_problemset_name() {
    let (_, body) = get("/api/problemset.problems?problemsetName=acmsguru").await;
    assert_eq!(body["result"]["problems"][0]["index"], "100");
}

#[tokio::test]
async fn recent_status_enforces_count_range() {
    let (status, _) = get("/api/problemset.recentStatus?count=1001").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = get("/api/problemset.recentStatus?count=2").await;
    assert_eq!(body["result"][0]["id"], 1006);
    assert_eq!(body["result"].as_array().unwrap().len(), 2);
}

// --- user ---

#[tokio::test]
async fn user_rated_list_active_only() {
    let (_, all) = get("/api/user.ratedList?activeOnly=false").await;
    let (_, active) = get("/api/user.ratedList?activeOnly=true").await;
    assert_eq!(all["result"].as_array().unwrap().len(), 4);
    assert_eq!(active["result"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn user_rating_history() {
    let (_, body) = get("/api/user.rating?handle=tourist").await;
    assert_eq!(body["result"].as_array().unwrap().len(), 2);

    let (status, body) = get("/api/user.rating").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["comment"], "handle: Field should not be empty");
}

#[tokio::test]
async fn user_status_pages() {
    let (_, body) = get("/api/user.status?handle=tourist&from=2&count=5").await;
    let ids: Vec<i64> = body["result"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1003, 1002]);
}
