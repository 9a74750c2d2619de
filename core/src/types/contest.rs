use serde::{Deserialize, Serialize};

use super::party::Party;
use super::problem::Problem;

/// Scoring system of a contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContestType {
    Cf,
    Ioi,
    Icpc,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContestPhase {
    Before,
    Coding,
    PendingSystemTest,
    SystemTest,
    Finished,
    #[serde(other)]
    Unknown,
}

/// A contest or a gym.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub contest_type: ContestType,
    pub phase: ContestPhase,
    /// Standings are frozen.
    #[serde(default)]
    pub frozen: bool,
    pub duration_seconds: i64,
    #[serde(default)]
    pub freeze_duration_seconds: Option<i64>,
    #[serde(default)]
    pub start_time_seconds: Option<i64>,
    /// Negative before the start.
    #[serde(default)]
    pub relative_time_seconds: Option<i64>,
    #[serde(default)]
    pub prepared_by: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// 1 to 5, gyms only.
    #[serde(default)]
    pub difficulty: Option<i32>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub icpc_region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
}

impl Contest {
    pub fn is_finished(&self) -> bool {
        self.phase == ContestPhase::Finished
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemResultType {
    /// May still change, e.g. after system tests.
    Preliminary,
    Final,
    #[serde(other)]
    Unknown,
}

/// A party's result on one problem of the ranklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemResult {
    pub points: f64,
    /// ICPC-style contests only.
    #[serde(default)]
    pub penalty: Option<i64>,
    pub rejected_attempt_count: i64,
    #[serde(rename = "type")]
    pub result_type: ProblemResultType,
    #[serde(default)]
    pub best_submission_time_seconds: Option<i64>,
}

/// One row of the standings. `problem_results` is positional: entry `i`
/// belongs to `Standings::problems[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RanklistRow {
    pub party: Party,
    pub rank: i64,
    pub points: f64,
    pub penalty: i64,
    pub successful_hack_count: i64,
    pub unsuccessful_hack_count: i64,
    pub problem_results: Vec<ProblemResult>,
    #[serde(default)]
    pub last_submission_time_seconds: Option<i64>,
}

/// Result of `contest.standings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    pub contest: Contest,
    pub problems: Vec<Problem>,
    pub rows: Vec<RanklistRow>,
}

impl Standings {
    /// Pairs each problem with the row's result on it.
    pub fn results_of<'a>(
        &'a self,
        row: &'a RanklistRow,
    ) -> impl Iterator<Item = (&'a Problem, &'a ProblemResult)> {
        self.problems.iter().zip(row.problem_results.iter())
    }
}

/// One rated contest in a user's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingChange {
    pub contest_id: i64,
    pub contest_name: String,
    pub handle: String,
    pub rank: i64,
    /// When the rating was updated, not when the contest ended.
    pub rating_update_time_seconds: i64,
    pub old_rating: i32,
    pub new_rating: i32,
}

impl RatingChange {
    pub fn delta(&self) -> i32 {
        self.new_rating - self.old_rating
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HackVerdict {
    HackSuccessful,
    HackUnsuccessful,
    InvalidInput,
    GeneratorIncompilable,
    GeneratorCrashed,
    Ignored,
    Testing,
    Other,
    #[serde(other)]
    Unknown,
}

/// Judge details of a hack, all three fields as sent by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeProtocol {
    /// `"true"` or `"false"`.
    #[serde(default)]
    pub manual: String,
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub verdict: String,
}

impl JudgeProtocol {
    pub fn is_manual(&self) -> bool {
        self.manual == "true"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hack {
    pub id: i64,
    pub creation_time_seconds: i64,
    pub hacker: Party,
    pub defender: Party,
    #[serde(default)]
    pub verdict: Option<HackVerdict>,
    pub problem: Problem,
    #[serde(default)]
    pub test: Option<String>,
    #[serde(default)]
    pub judge_protocol: Option<JudgeProtocol>,
}
