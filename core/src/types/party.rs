use serde::{Deserialize, Serialize};

/// How a party took part in a contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipantType {
    Contestant,
    Practice,
    Virtual,
    Manager,
    OutOfCompetition,
    #[serde(other)]
    Unknown,
}

/// One member of a party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub handle: String,
    /// Display name, only known for some gym contests.
    #[serde(default)]
    pub name: Option<String>,
}

/// A participant of a contest: a single user or a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    #[serde(default)]
    pub contest_id: Option<i64>,
    pub members: Vec<Member>,
    pub participant_type: ParticipantType,
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub team_name: Option<String>,
    /// Ghosts took part in the original contest but are not registered users.
    #[serde(default)]
    pub ghost: bool,
    #[serde(default)]
    pub room: Option<i64>,
    #[serde(default)]
    pub start_time_seconds: Option<i64>,
}

impl Party {
    pub fn handles(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.handle.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_team_party() {
        let json = r#"{
            "contestId": 1500, "participantType": "OUT_OF_COMPETITION",
            "teamId": 42, "teamName": "Three Musketeers",
            "members": [{"handle":"athos"},{"handle":"porthos"},{"handle":"aramis"}],
            "ghost": false, "startTimeSeconds": 1615377900
        }"#;
        let party: Party = serde_json::from_str(json).unwrap();
        assert_eq!(party.participant_type, ParticipantType::OutOfCompetition);
        assert_eq!(party.team_name.as_deref(), Some("Three Musketeers"));
        assert_eq!(party.handles().collect::<Vec<_>>(), ["athos", "porthos", "aramis"]);
        assert!(party.room.is_none());
    }

    #[test]
    fn ghost_defaults_to_false() {
        let json = r#"{"members":[{"handle":"tourist"}],"participantType":"CONTESTANT"}"#;
        let party: Party = serde_json::from_str(json).unwrap();
        assert!(!party.ghost);
        assert!(party.contest_id.is_none());
    }
}
