//! Stateless request builder and response parser for the Codeforces API.
//!
//! # Design
//! `CodeforcesClient` holds only the API root and carries no state between
//! calls. Each remote method has a `build_*` method that validates its
//! arguments and produces an `HttpRequest`; `parse` consumes the matching
//! `HttpResponse`. Validation failures surface before any request exists, so
//! nothing reaches the network. Parameter names are the remote API's own,
//! including the reserved word `from`.

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::envelope::check_response;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::params::{build_url, Params};

/// Largest handle list the API accepts in one call.
pub const MAX_HANDLES: usize = 10_000;

/// Upper bound for `problemset.recentStatus`'s `count`.
pub const MAX_RECENT_STATUS_COUNT: u32 = 1_000;

pub const CONTEST_HACKS: &str = "contest.hacks";
pub const CONTEST_LIST: &str = "contest.list";
pub const CONTEST_STANDINGS: &str = "contest.standings";
pub const CONTEST_STATUS: &str = "contest.status";
pub const PROBLEMSET_PROBLEMS: &str = "problemset.problems";
pub const PROBLEMSET_RECENT_STATUS: &str = "problemset.recentStatus";
pub const USER_INFO: &str = "user.info";
pub const USER_RATED_LIST: &str = "user.ratedList";
pub const USER_RATING: &str = "user.rating";
pub const USER_STATUS: &str = "user.status";

/// Optional arguments of `contest.standings`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsOptions {
    /// 1-based index of the first row.
    pub from: u32,
    pub count: Option<u32>,
    /// Restricts the rows to these handles.
    pub handles: Option<Vec<String>>,
    pub room: Option<u32>,
    /// Include virtual and out-of-competition participants.
    pub show_unofficial: Option<bool>,
}

impl Default for StandingsOptions {
    fn default() -> Self {
        Self {
            from: 1,
            count: None,
            handles: None,
            room: None,
            show_unofficial: None,
        }
    }
}

impl StandingsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_from(mut self, from: u32) -> Self {
        self.from = from;
        self
    }

    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    #[must_use]
    pub fn with_handles<I, S>(mut self, handles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.handles = Some(handles.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_room(mut self, room: u32) -> Self {
        self.room = Some(room);
        self
    }

    #[must_use]
    pub fn with_show_unofficial(mut self, show_unofficial: bool) -> Self {
        self.show_unofficial = Some(show_unofficial);
        self
    }
}

/// Builds API requests and parses API responses without touching the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeforcesClient {
    base_url: String,
}

impl CodeforcesClient {
    /// `base_url` is the API root, e.g. `http://codeforces.com/api/`.
    pub fn new(base_url: &str) -> Self {
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        Self { base_url }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: &str, params: &Params) -> HttpRequest {
        HttpRequest {
            method: method.to_string(),
            url: build_url(&self.base_url, method, params),
        }
    }

    pub fn build_contest_hacks(&self, contest_id: i64) -> Result<HttpRequest, ApiError> {
        check_contest_id(contest_id)?;
        let params = Params::new().with("contestId", contest_id);
        Ok(self.request(CONTEST_HACKS, &params))
    }

    pub fn build_contest_list(&self, gym: bool) -> HttpRequest {
        self.request(CONTEST_LIST, &Params::new().with("gym", gym))
    }

    pub fn build_contest_standings(
        &self,
        contest_id: i64,
        options: &StandingsOptions,
    ) -> Result<HttpRequest, ApiError> {
        check_contest_id(contest_id)?;
        check_at_least_one("from", options.from)?;
        if let Some(count) = options.count {
            check_at_least_one("count", count)?;
        }
        if let Some(room) = options.room {
            check_at_least_one("room", room)?;
        }
        let handles = options.handles.as_deref().filter(|h| !h.is_empty());
        if let Some(handles) = handles {
            check_handles(handles)?;
        }

        let params = Params::new()
            .with("contestId", contest_id)
            .with("from", options.from)
            .with_opt("count", options.count)
            .with_opt("handles", handles)
            .with_opt("room", options.room)
            .with_opt("showUnofficial", options.show_unofficial);
        Ok(self.request(CONTEST_STANDINGS, &params))
    }

    pub fn build_contest_status(
        &self,
        contest_id: i64,
        handle: Option<&str>,
        from: u32,
        count: Option<u32>,
    ) -> Result<HttpRequest, ApiError> {
        check_contest_id(contest_id)?;
        if let Some(handle) = handle {
            check_handle(handle)?;
        }
        check_at_least_one("from", from)?;
        if let Some(count) = count {
            check_at_least_one("count", count)?;
        }

        let params = Params::new()
            .with("contestId", contest_id)
            .with_opt("handle", handle)
            .with("from", from)
            .with_opt("count", count);
        Ok(self.request(CONTEST_STATUS, &params))
    }

    /// An empty `tags` slice means no tag filter.
    pub fn build_problemset_problems<S: AsRef<str>>(
        &self,
        tags: &[S],
        problemset_name: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        for tag in tags {
            check_list_item("tag", tag.as_ref())?;
        }
        let tags = (!tags.is_empty()).then_some(tags);

        let params = Params::new()
            .with_opt("tags", tags)
            .with_opt("problemsetName", problemset_name);
        Ok(self.request(PROBLEMSET_PROBLEMS, &params))
    }

    pub fn build_problemset_recent_status(
        &self,
        count: u32,
        problemset_name: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        if count == 0 || count > MAX_RECENT_STATUS_COUNT {
            return Err(ApiError::validation(format!(
                "count must be between 1 and {MAX_RECENT_STATUS_COUNT}, got {count}"
            )));
        }
        let params = Params::new()
            .with("count", count)
            .with_opt("problemsetName", problemset_name);
        Ok(self.request(PROBLEMSET_RECENT_STATUS, &params))
    }

    pub fn build_user_info<S: AsRef<str>>(&self, handles: &[S]) -> Result<HttpRequest, ApiError> {
        if handles.is_empty() {
            return Err(ApiError::validation("at least one handle is required"));
        }
        check_handles(handles)?;
        let params = Params::new().with("handles", handles);
        Ok(self.request(USER_INFO, &params))
    }

    pub fn build_user_rated_list(&self, active_only: bool) -> HttpRequest {
        self.request(USER_RATED_LIST, &Params::new().with("activeOnly", active_only))
    }

    pub fn build_user_rating(&self, handle: &str) -> Result<HttpRequest, ApiError> {
        check_handle(handle)?;
        Ok(self.request(USER_RATING, &Params::new().with("handle", handle)))
    }

    pub fn build_user_status(
        &self,
        handle: &str,
        from: u32,
        count: Option<u32>,
    ) -> Result<HttpRequest, ApiError> {
        check_handle(handle)?;
        check_at_least_one("from", from)?;
        if let Some(count) = count {
            check_at_least_one("count", count)?;
        }

        let params = Params::new()
            .with("handle", handle)
            .with("from", from)
            .with_opt("count", count);
        Ok(self.request(USER_STATUS, &params))
    }

    /// Checks the envelope and maps `result` into `T`.
    pub fn parse<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        let result = check_response(response)?;
        serde_json::from_value(result).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

fn check_contest_id(contest_id: i64) -> Result<(), ApiError> {
    if contest_id <= 0 {
        return Err(ApiError::validation(format!(
            "contest_id must be positive, got {contest_id}"
        )));
    }
    Ok(())
}

fn check_at_least_one(name: &str, value: u32) -> Result<(), ApiError> {
    if value == 0 {
        return Err(ApiError::validation(format!("{name} must be at least 1")));
    }
    Ok(())
}

fn check_handle(handle: &str) -> Result<(), ApiError> {
    check_list_item("handle", handle)
}

fn check_handles<S: AsRef<str>>(handles: &[S]) -> Result<(), ApiError> {
    if handles.len() > MAX_HANDLES {
        return Err(ApiError::validation(format!(
            "no more than {MAX_HANDLES} handles are accepted, got {}",
            handles.len()
        )));
    }
    handles.iter().try_for_each(|h| check_handle(h.as_ref()))
}

/// `;` would split the value when it is sent as part of a list.
fn check_list_item(what: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{what} cannot be empty")));
    }
    if value.contains(';') {
        return Err(ApiError::validation(format!(
            "{what} {value:?} cannot contain ';'"
        )));
    }
    Ok(())
}
