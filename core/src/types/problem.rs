use serde::{Deserialize, Serialize};

/// Kind of a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemType {
    Programming,
    Question,
    #[serde(other)]
    Unknown,
}

/// A problem from a contest or from a problemset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Absent for problems that belong only to a problemset.
    #[serde(default)]
    pub contest_id: Option<i64>,
    #[serde(default)]
    pub problemset_name: Option<String>,
    /// Letter or letter+digit, e.g. `A` or `B1`.
    pub index: String,
    pub name: String,
    #[serde(rename = "type")]
    pub problem_type: ProblemType,
    #[serde(default)]
    pub points: Option<f64>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Problem {
    /// Short identifier as shown on the site, e.g. `374A`.
    pub fn id(&self) -> String {
        match (self.contest_id, &self.problemset_name) {
            (Some(contest_id), _) => format!("{contest_id}{}", self.index),
            (None, Some(problemset)) => format!("{problemset}/{}", self.index),
            (None, None) => self.index.clone(),
        }
    }
}

/// How many participants solved a problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemStatistics {
    #[serde(default)]
    pub contest_id: Option<i64>,
    pub index: String,
    pub solved_count: i64,
}

/// Result of `problemset.problems`: two parallel lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problemset {
    pub problems: Vec<Problem>,
    pub problem_statistics: Vec<ProblemStatistics>,
}
