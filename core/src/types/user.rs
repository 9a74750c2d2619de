use serde::{Deserialize, Serialize};

/// A registered user.
///
/// Personal fields are only present when the user chose to publish them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub handle: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub vk_id: Option<String>,
    #[serde(default)]
    pub open_id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub contribution: i64,
    #[serde(default)]
    pub rank: Option<String>,
    /// Absent for users who never took part in a rated contest.
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub max_rank: Option<String>,
    #[serde(default)]
    pub max_rating: Option<i32>,
    #[serde(default)]
    pub last_online_time_seconds: i64,
    #[serde(default)]
    pub registration_time_seconds: i64,
    #[serde(default)]
    pub friend_of_count: i64,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub title_photo: String,
}

impl User {
    /// First and last name joined by a space, if either is published.
    pub fn full_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(name), None) | (None, Some(name)) => Some(name.to_string()),
            (None, None) => None,
        }
    }
}
