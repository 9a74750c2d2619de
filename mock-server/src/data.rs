//! In-memory dataset served by the mock API.
//!
//! Objects are kept as raw JSON in the exact shape the real service sends,
//! so the client crate decodes them with its own types and any schema drift
//! shows up in its integration tests.

use serde_json::{json, Value};

/// Users whose `lastOnlineTimeSeconds` is at or after this count as active.
pub const ACTIVE_SINCE: i64 = 1_700_000_000;

#[derive(Debug, Clone)]
pub struct Dataset {
    pub users: Vec<Value>,
    pub contests: Vec<Value>,
    pub problems: Vec<Value>,
    pub problem_statistics: Vec<Value>,
    pub submissions: Vec<Value>,
    pub hacks: Vec<Value>,
    pub rating_changes: Vec<Value>,
    /// Ranklist rows, each tagged with its contest through `party.contestId`.
    pub ranklist: Vec<Value>,
}

impl Dataset {
    pub fn contest(&self, id: i64) -> Option<&Value> {
        self.contests.iter().find(|c| c["id"] == id)
    }

    pub fn user(&self, handle: &str) -> Option<&Value> {
        self.users
            .iter()
            .find(|u| u["handle"].as_str().is_some_and(|h| h.eq_ignore_ascii_case(handle)))
    }

    /// A built-in sample covering every API method.
    pub fn sample() -> Self {
        let problems = vec![
            problem(374, "A", "Inna and Pink Pony", 500.0, 2000, &["greedy", "implementation"]),
            problem(374, "B", "Inna and Nine", 1000.0, 1500, &["combinatorics", "greedy"]),
            problem(1919, "A", "Wallet Exchange", 500.0, 800, &["games", "math"]),
            problem(1919, "F2", "Wine Factory (Hard Version)", 1750.0, 2800, &["data structures", "dp"]),
            json!({"problemsetName": "acmsguru", "index": "100", "name": "A+B",
                   "type": "PROGRAMMING", "tags": []}),
        ];
        let problem_statistics = vec![
            json!({"contestId": 374, "index": "A", "solvedCount": 5123}),
            json!({"contestId": 374, "index": "B", "solvedCount": 2311}),
            json!({"contestId": 1919, "index": "A", "solvedCount": 31000}),
            json!({"contestId": 1919, "index": "F2", "solvedCount": 412}),
            json!({"index": "100", "solvedCount": 9000}),
        ];

        let submissions = vec![
            submission(1001, 374, &problems[0], "Petr", "OK", 12, 900),
            submission(1002, 374, &problems[1], "tourist", "WRONG_ANSWER", 3, 1500),
            submission(1003, 374, &problems[0], "tourist", "OK", 12, 1600),
            submission(1004, 1919, &problems[2], "tourist", "OK", 20, 300),
            submission(1005, 1919, &problems[3], "Egor", "TIME_LIMIT_EXCEEDED", 7, 5000),
            submission(1006, 1919, &problems[2], "DmitriyH", "OK", 20, 700),
        ];

        let hacks = vec![json!({
            "id": 51, "creationTimeSeconds": 1387381500,
            "hacker": party(374, "Petr", "CONTESTANT"),
            "defender": party(374, "Egor", "CONTESTANT"),
            "verdict": "HACK_SUCCESSFUL",
            "problem": problems[0].clone(),
            "test": "1 1 1 1 1 1",
            "judgeProtocol": {"manual": "false", "protocol": "Solution verdict: WRONG_ANSWER",
                              "verdict": "Successful hacking attempt"}
        })];

        let ranklist = vec![
            row(374, "Petr", "CONTESTANT", 1, 1480.0, &[480.0, 1000.0]),
            row(374, "tourist", "CONTESTANT", 2, 1410.0, &[460.0, 950.0]),
            row(374, "Egor", "CONTESTANT", 3, 420.0, &[420.0, 0.0]),
            row(374, "DmitriyH", "VIRTUAL", 4, 300.0, &[300.0, 0.0]),
        ];

        Self {
            users: vec![
                user("tourist", Some(("Gennady", "Korotkevich")), Some((3828, "legendary grandmaster")), 1_760_000_000),
                user("Petr", Some(("Petr", "Mitrichev")), Some((3200, "legendary grandmaster")), 1_750_000_000),
                user("Egor", None, Some((2600, "international grandmaster")), 1_600_000_000),
                user("DmitriyH", None, Some((1800, "expert")), 1_710_000_000),
                user("Fefer_Ivan", Some(("Ivan", "Fefer")), None, 1_500_000_000),
            ],
            contests: vec![
                contest(374, "Codeforces Round 220 (Div. 2)", "CF", "FINISHED"),
                contest(1919, "Hello 2024", "CF", "FINISHED"),
                contest(2100, "Codeforces Round 1000 (Div. 1)", "CF", "BEFORE"),
                contest(100001, "2013-2014 ACM-ICPC NEERC", "ICPC", "FINISHED"),
            ],
            problems,
            problem_statistics,
            submissions,
            hacks,
            rating_changes: vec![
                rating_change(374, "Codeforces Round 220 (Div. 2)", "tourist", 2, 3500, 3540),
                rating_change(1919, "Hello 2024", "tourist", 1, 3779, 3818),
                rating_change(374, "Codeforces Round 220 (Div. 2)", "Petr", 1, 3100, 3200),
            ],
            ranklist,
        }
    }
}

fn problem(contest_id: i64, index: &str, name: &str, points: f64, rating: i64, tags: &[&str]) -> Value {
    json!({
        "contestId": contest_id, "index": index, "name": name, "type": "PROGRAMMING",
        "points": points, "rating": rating, "tags": tags,
    })
}

fn party(contest_id: i64, handle: &str, participant_type: &str) -> Value {
    json!({
        "contestId": contest_id, "members": [{"handle": handle}],
        "participantType": participant_type, "ghost": false, "room": 7,
        "startTimeSeconds": 1387380600,
    })
}

fn submission(id: i64, contest_id: i64, problem: &Value, handle: &str, verdict: &str, passed: i64, millis: i64) -> Value {
    json!({
        "id": id, "contestId": contest_id, "creationTimeSeconds": 1387380600 + id,
        "relativeTimeSeconds": 600 + id, "problem": problem.clone(),
        "author": party(contest_id, handle, "CONTESTANT"),
        "programmingLanguage": "GNU C++20 (64)", "verdict": verdict, "testset": "TESTS",
        "passedTestCount": passed, "timeConsumedMillis": millis, "memoryConsumedBytes": 262144,
    })
}

fn row(contest_id: i64, handle: &str, participant_type: &str, rank: i64, points: f64, results: &[f64]) -> Value {
    let problem_results: Vec<Value> = results
        .iter()
        .map(|p| json!({"points": p, "rejectedAttemptCount": 0, "type": "FINAL"}))
        .collect();
    json!({
        "party": party(contest_id, handle, participant_type),
        "rank": rank, "points": points, "penalty": 0,
        "successfulHackCount": 0, "unsuccessfulHackCount": 0,
        "problemResults": problem_results,
    })
}

fn contest(id: i64, name: &str, contest_type: &str, phase: &str) -> Value {
    json!({
        "id": id, "name": name, "type": contest_type, "phase": phase, "frozen": false,
        "durationSeconds": 7200, "startTimeSeconds": 1387380600,
    })
}

fn user(handle: &str, name: Option<(&str, &str)>, rating: Option<(i64, &str)>, last_online: i64) -> Value {
    let mut user = json!({
        "handle": handle, "contribution": 0, "friendOfCount": 10,
        "lastOnlineTimeSeconds": last_online, "registrationTimeSeconds": 1265987288,
        "avatar": "https://userpic.codeforces.org/no-avatar.jpg",
        "titlePhoto": "https://userpic.codeforces.org/no-title.jpg",
    });
    if let Some((first, last)) = name {
        user["firstName"] = json!(first);
        user["lastName"] = json!(last);
    }
    if let Some((value, rank)) = rating {
        user["rating"] = json!(value);
        user["maxRating"] = json!(value);
        user["rank"] = json!(rank);
        user["maxRank"] = json!(rank);
    }
    user
}

fn rating_change(contest_id: i64, contest_name: &str, handle: &str, rank: i64, old: i64, new: i64) -> Value {
    json!({
        "contestId": contest_id, "contestName": contest_name, "handle": handle, "rank": rank,
        "ratingUpdateTimeSeconds": 1387390000 + contest_id, "oldRating": old, "newRating": new,
    })
}
