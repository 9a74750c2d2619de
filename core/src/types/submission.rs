use serde::{Deserialize, Serialize};

use super::party::Party;
use super::problem::Problem;

/// Judging outcome of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Failed,
    Ok,
    Partial,
    CompilationError,
    RuntimeError,
    WrongAnswer,
    PresentationError,
    TimeLimitExceeded,
    MemoryLimitExceeded,
    IdlenessLimitExceeded,
    SecurityViolated,
    Crashed,
    InputPreparationCrashed,
    Challenged,
    Skipped,
    Testing,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl Verdict {
    pub fn is_accepted(self) -> bool {
        self == Verdict::Ok
    }
}

/// Which tests a submission was judged on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Testset {
    Samples,
    Pretests,
    Tests,
    Challenges,
    Tests1,
    Tests2,
    Tests3,
    Tests4,
    Tests5,
    Tests6,
    Tests7,
    Tests8,
    Tests9,
    Tests10,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    #[serde(default)]
    pub contest_id: Option<i64>,
    pub creation_time_seconds: i64,
    /// Seconds since the party started the contest; `i32::MAX` outside one.
    pub relative_time_seconds: i64,
    pub problem: Problem,
    pub author: Party,
    pub programming_language: String,
    /// Absent while the submission waits in the queue.
    #[serde(default)]
    pub verdict: Option<Verdict>,
    pub testset: Testset,
    pub passed_test_count: i64,
    pub time_consumed_millis: i64,
    pub memory_consumed_bytes: i64,
    #[serde(default)]
    pub points: Option<f64>,
}
