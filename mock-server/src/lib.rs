pub mod data;

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::debug;

pub use data::Dataset;

pub type Db = Arc<Dataset>;

/// `EnvFilter` directives used when `RUST_LOG` is unset. Per-method request
/// logs are `debug!`, so this crate is raised above the global `info`.
pub const DEFAULT_LOG_FILTER: &str = "info,mock_server=debug";

/// A method's result, or the comment of a `FAILED` answer.
pub type Outcome = Result<Value, String>;

pub fn app() -> Router {
    app_with(Dataset::sample())
}

pub fn app_with(dataset: Dataset) -> Router {
    Router::new()
        .route("/api/{method}", get(dispatch))
        .with_state(Arc::new(dataset))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn dispatch(
    State(db): State<Db>,
    Path(method): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    debug!(%method, ?query, "serving");
    let args = Args(query);
    let outcome = match method.as_str() {
        "contest.hacks" => contest_hacks(&db, &args),
        "contest.list" => contest_list(&db, &args),
        "contest.standings" => contest_standings(&db, &args),
        "contest.status" => contest_status(&db, &args),
        "problemset.problems" => problemset_problems(&db, &args),
        "problemset.recentStatus" => problemset_recent_status(&db, &args),
        "user.info" => user_info(&db, &args),
        "user.ratedList" => user_rated_list(&db, &args),
        "user.rating" => user_rating(&db, &args),
        "user.status" => user_status(&db, &args),
        other => Err(format!("Unknown method {other}")),
    };
    envelope(outcome)
}

/// Wraps an outcome the way the real service does: `OK` with HTTP 200, or
/// `FAILED` with HTTP 400.
pub fn envelope(outcome: Outcome) -> Response {
    match outcome {
        Ok(result) => Json(json!({"status": "OK", "result": result})).into_response(),
        Err(comment) => (
            StatusCode::BAD_REQUEST,
            Json(json!({"status": "FAILED", "comment": comment})),
        )
            .into_response(),
    }
}

struct Args(HashMap<String, String>);

impl Args {
    fn str(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str).filter(|s| !s.is_empty())
    }

    fn required(&self, name: &str) -> Result<&str, String> {
        self.str(name)
            .ok_or_else(|| format!("{name}: Field should not be empty"))
    }

    fn int(&self, name: &str) -> Result<Option<i64>, String> {
        self.str(name)
            .map(|raw| {
                raw.parse::<i64>()
                    .map_err(|_| format!("{name}: Field should contain only digits"))
            })
            .transpose()
    }

    fn required_int(&self, name: &str) -> Result<i64, String> {
        self.int(name)?
            .ok_or_else(|| format!("{name}: Field should not be empty"))
    }

    fn bool(&self, name: &str) -> bool {
        self.str(name).is_some_and(|s| s.eq_ignore_ascii_case("true"))
    }

    fn list(&self, name: &str) -> Option<Vec<&str>> {
        self.str(name)
            .map(|raw| raw.split(';').filter(|s| !s.is_empty()).collect())
    }

    /// `from` (1-based, default 1) and optional `count`.
    fn window(&self) -> Result<(usize, Option<usize>), String> {
        let from = self.int("from")?.unwrap_or(1);
        if from < 1 {
            return Err("from: Field should be no less than 1".to_string());
        }
        let count = match self.int("count")? {
            Some(c) if c < 1 => return Err("count: Field should be no less than 1".to_string()),
            Some(c) => Some(c as usize),
            None => None,
        };
        Ok((from as usize, count))
    }
}

fn page(items: Vec<Value>, (from, count): (usize, Option<usize>)) -> Vec<Value> {
    let items = items.into_iter().skip(from - 1);
    match count {
        Some(count) => items.take(count).collect(),
        None => items.collect(),
    }
}

fn has_member(party: &Value, handle: &str) -> bool {
    party["members"].as_array().is_some_and(|members| {
        members
            .iter()
            .any(|m| m["handle"].as_str().is_some_and(|h| h.eq_ignore_ascii_case(handle)))
    })
}

fn newest_first(mut submissions: Vec<Value>) -> Vec<Value> {
    submissions.sort_by_key(|s| std::cmp::Reverse(s["id"].as_i64().unwrap_or_default()));
    submissions
}

fn known_contest(db: &Dataset, args: &Args) -> Result<i64, String> {
    let id = args.required_int("contestId")?;
    db.contest(id)
        .map(|_| id)
        .ok_or_else(|| format!("contestId: Contest with id {id} not found"))
}

fn known_handle<'a>(db: &Dataset, name: &str, handle: &'a str) -> Result<&'a str, String> {
    db.user(handle)
        .map(|_| handle)
        .ok_or_else(|| format!("{name}: User with handle {handle} not found"))
}

fn contest_hacks(db: &Dataset, args: &Args) -> Outcome {
    let id = known_contest(db, args)?;
    let hacks: Vec<Value> = db
        .hacks
        .iter()
        .filter(|h| h["problem"]["contestId"] == id)
        .cloned()
        .collect();
    Ok(json!(hacks))
}

fn contest_list(db: &Dataset, args: &Args) -> Outcome {
    let gym = args.bool("gym");
    let contests: Vec<Value> = db
        .contests
        .iter()
        .filter(|c| (c["id"].as_i64().unwrap_or_default() >= 100_000) == gym)
        .cloned()
        .collect();
    Ok(json!(contests))
}

fn contest_standings(db: &Dataset, args: &Args) -> Outcome {
    let id = known_contest(db, args)?;
    let window = args.window()?;
    let handles = args.list("handles");
    if handles.as_ref().is_some_and(|h| h.len() > 10_000) {
        return Err("handles: Field should contain no more than 10000 items".to_string());
    }
    let unofficial = args.bool("showUnofficial");

    let problems: Vec<Value> = db
        .problems
        .iter()
        .filter(|p| p["contestId"] == id)
        .cloned()
        .collect();
    let rows: Vec<Value> = db
        .ranklist
        .iter()
        .filter(|r| r["party"]["contestId"] == id)
        .filter(|r| unofficial || r["party"]["participantType"] == "CONTESTANT")
        .filter(|r| match &handles {
            Some(handles) => handles.iter().any(|h| has_member(&r["party"], h)),
            None => true,
        })
        .cloned()
        .collect();

    Ok(json!({
        "contest": db.contest(id),
        "problems": problems,
        "rows": page(rows, window),
    }))
}

fn contest_status(db: &Dataset, args: &Args) -> Outcome {
    let id = known_contest(db, args)?;
    let handle = args
        .str("handle")
        .map(|h| known_handle(db, "handle", h))
        .transpose()?;
    let window = args.window()?;

    let submissions: Vec<Value> = db
        .submissions
        .iter()
        .filter(|s| s["contestId"] == id)
        .filter(|s| handle.map_or(true, |h| has_member(&s["author"], h)))
        .cloned()
        .collect();
    Ok(json!(page(newest_first(submissions), window)))
}

fn problemset_problems(db: &Dataset, args: &Args) -> Outcome {
    let tags = args.list("tags").unwrap_or_default();
    let problemset = args.str("problemsetName");

    let in_set = |p: &Value| p["problemsetName"].as_str() == problemset;
    let has_tags = |p: &Value| {
        tags.iter().all(|tag| {
            p["tags"]
                .as_array()
                .is_some_and(|ts| ts.iter().any(|t| t == tag))
        })
    };

    let problems: Vec<Value> = db
        .problems
        .iter()
        .filter(|p| in_set(*p) && has_tags(*p))
        .cloned()
        .collect();
    let statistics: Vec<Value> = db
        .problem_statistics
        .iter()
        .filter(|s| {
            problems
                .iter()
                .any(|p| p["contestId"] == s["contestId"] && p["index"] == s["index"])
        })
        .cloned()
        .collect();

    Ok(json!({"problems": problems, "problemStatistics": statistics}))
}

fn problemset_recent_status(db: &Dataset, args: &Args) -> Outcome {
    let count = args.required_int("count")?;
    if !(1..=1000).contains(&count) {
        return Err("count: Field should be between 1 and 1000".to_string());
    }
    Ok(json!(page(
        newest_first(db.submissions.clone()),
        (1, Some(count as usize))
    )))
}

fn user_info(db: &Dataset, args: &Args) -> Outcome {
    let handles = args
        .list("handles")
        .ok_or_else(|| "handles: Field should not be empty".to_string())?;
    if handles.len() > 10_000 {
        return Err("handles: Field should contain no more than 10000 items".to_string());
    }
    let users = handles
        .iter()
        .map(|h| {
            db.user(h)
                .cloned()
                .ok_or_else(|| format!("handles: User with handle {h} not found"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(json!(users))
}

fn user_rated_list(db: &Dataset, args: &Args) -> Outcome {
    let active_only = args.bool("activeOnly");
    let mut users: Vec<Value> = db
        .users
        .iter()
        .filter(|u| u["rating"].is_i64())
        .filter(|u| {
            !active_only || u["lastOnlineTimeSeconds"].as_i64().unwrap_or_default() >= data::ACTIVE_SINCE
        })
        .cloned()
        .collect();
    users.sort_by_key(|u| std::cmp::Reverse(u["rating"].as_i64().unwrap_or_default()));
    Ok(json!(users))
}

fn user_rating(db: &Dataset, args: &Args) -> Outcome {
    let handle = known_handle(db, "handle", args.required("handle")?)?;
    let changes: Vec<Value> = db
        .rating_changes
        .iter()
        .filter(|c| c["handle"].as_str().is_some_and(|h| h.eq_ignore_ascii_case(handle)))
        .cloned()
        .collect();
    Ok(json!(changes))
}

fn user_status(db: &Dataset, args: &Args) -> Outcome {
    let handle = known_handle(db, "handle", args.required("handle")?)?;
    let window = args.window()?;
    let submissions: Vec<Value> = db
        .submissions
        .iter()
        .filter(|s| has_member(&s["author"], handle))
        .cloned()
        .collect();
    Ok(json!(page(newest_first(submissions), window)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> Args {
        Args(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn page_applies_from_and_count() {
        let items: Vec<Value> = (1..=5).map(|i| json!(i)).collect();
        assert_eq!(page(items.clone(), (2, Some(2))), vec![json!(2), json!(3)]);
        assert_eq!(page(items.clone(), (4, None)), vec![json!(4), json!(5)]);
        assert!(page(items, (9, None)).is_empty());
    }

    #[test]
    fn window_rejects_zero() {
        assert!(args(&[("from", "0")]).window().is_err());
        assert!(args(&[("count", "0")]).window().is_err());
        assert_eq!(args(&[]).window().unwrap(), (1, None));
    }

    #[test]
    fn int_reports_non_digits() {
        let err = args(&[("contestId", "abc")]).int("contestId").unwrap_err();
        assert_eq!(err, "contestId: Field should contain only digits");
    }

    #[test]
    fn list_splits_on_semicolon() {
        let a = args(&[("handles", "tourist;Petr;")]);
        assert_eq!(a.list("handles").unwrap(), vec!["tourist", "Petr"]);
    }

    #[test]
    fn unknown_contest_is_reported() {
        let db = Dataset::sample();
        let err = contest_hacks(&db, &args(&[("contestId", "9999")])).unwrap_err();
        assert_eq!(err, "contestId: Contest with id 9999 not found");
    }

    #[test]
    fn rated_list_is_sorted_by_rating() {
        let db = Dataset::sample();
        let users = user_rated_list(&db, &args(&[("activeOnly", "false")])).unwrap();
        let ratings: Vec<i64> = users
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["rating"].as_i64().unwrap())
            .collect();
        assert_eq!(ratings, vec![3828, 3200, 2600, 1800]);
    }

    #[test]
    fn sample_dataset_lookups() {
        let db = Dataset::sample();
        assert!(db.user("TOURIST").is_some());
        assert!(db.user("nobody").is_none());
        assert_eq!(db.contest(1919).unwrap()["name"], "Hello 2024");
    }

    #[test]
    fn default_log_filter_shows_served_methods() {
        let filter = tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).unwrap();
        assert_eq!(
            filter.max_level_hint(),
            Some(tracing_subscriber::filter::LevelFilter::DEBUG)
        );
    }
}
