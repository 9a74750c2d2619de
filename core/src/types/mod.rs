//! Typed records returned by the API.
//!
//! # Design
//! Records mirror the remote JSON objects field for field (camelCase on the
//! wire, snake_case here) and are never mutated after decoding. Fields the
//! server may omit are `Option`s; unknown fields are ignored. Enumerations
//! carry an `Unknown` fallback so a value added on the server side does not
//! break decoding of the whole response.

mod contest;
mod party;
mod problem;
mod submission;
mod user;

pub use contest::{
    Contest, ContestPhase, ContestType, Hack, HackVerdict, JudgeProtocol, ProblemResult,
    ProblemResultType, RanklistRow, RatingChange, Standings,
};
pub use party::{Member, ParticipantType, Party};
pub use problem::{Problem, ProblemStatistics, ProblemType, Problemset};
pub use submission::{Submission, Testset, Verdict};
pub use user::User;
