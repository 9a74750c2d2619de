//! One blocking call per remote API method.
//!
//! `CodeforcesApi` glues a `CodeforcesClient` to a `Transport`: build (and
//! validate), execute once, check the envelope, decode into typed records.
//! Every error aborts the call that triggered it; nothing is retried.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::{CodeforcesClient, StandingsOptions};
use crate::config::{ClientConfig, Language};
use crate::error::ApiError;
use crate::http::{HttpRequest, Transport, UreqTransport};
use crate::types::{Contest, Hack, Problemset, RatingChange, Standings, Submission, User};

/// Typed facade over the Codeforces public API.
#[derive(Debug, Clone)]
pub struct CodeforcesApi<T = UreqTransport> {
    config: ClientConfig,
    client: CodeforcesClient,
    transport: T,
}

impl CodeforcesApi<UreqTransport> {
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration does not validate.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let transport = UreqTransport::new(&config);
        Ok(Self::with_transport_unchecked(config, transport))
    }

    /// English host, library defaults.
    pub fn with_defaults() -> Result<Self, ApiError> {
        Self::new(ClientConfig::default())
    }

    pub fn with_language(language: Language) -> Result<Self, ApiError> {
        Self::new(ClientConfig::new(language))
    }
}

impl<T: Transport> CodeforcesApi<T> {
    /// Uses `transport` instead of the default HTTP agent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration does not validate.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, ApiError> {
        config.validate()?;
        Ok(Self::with_transport_unchecked(config, transport))
    }

    fn with_transport_unchecked(config: ClientConfig, transport: T) -> Self {
        let client = CodeforcesClient::from_config(&config);
        Self {
            config,
            client,
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn language(&self) -> Language {
        self.config.language
    }

    pub fn client(&self) -> &CodeforcesClient {
        &self.client
    }

    fn fetch<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        let response = self.transport.execute(&request)?;
        let result = self.client.parse(response)?;
        debug!(method = %request.method, "decoded result");
        Ok(result)
    }

    /// Hacks in a contest. Only the caller's own hacks are visible while the
    /// contest is running.
    pub fn contest_hacks(&self, contest_id: i64) -> Result<Vec<Hack>, ApiError> {
        self.fetch(self.client.build_contest_hacks(contest_id)?)
    }

    /// All regular contests, or all gyms when `gym` is set.
    pub fn contest_list(&self, gym: bool) -> Result<Vec<Contest>, ApiError> {
        self.fetch(self.client.build_contest_list(gym))
    }

    /// The contest, its problems, and the requested slice of the ranklist.
    pub fn contest_standings(
        &self,
        contest_id: i64,
        options: &StandingsOptions,
    ) -> Result<Standings, ApiError> {
        self.fetch(self.client.build_contest_standings(contest_id, options)?)
    }

    /// Submissions in a contest, newest first, optionally for one handle.
    pub fn contest_status(
        &self,
        contest_id: i64,
        handle: Option<&str>,
        from: u32,
        count: Option<u32>,
    ) -> Result<Vec<Submission>, ApiError> {
        self.fetch(
            self.client
                .build_contest_status(contest_id, handle, from, count)?,
        )
    }

    /// Problems with their solve counts, filtered by all of `tags`.
    pub fn problemset_problems<S: AsRef<str>>(
        &self,
        tags: &[S],
        problemset_name: Option<&str>,
    ) -> Result<Problemset, ApiError> {
        self.fetch(self.client.build_problemset_problems(tags, problemset_name)?)
    }

    /// The latest `count` (1 to 1000) submissions, newest first.
    pub fn problemset_recent_status(
        &self,
        count: u32,
        problemset_name: Option<&str>,
    ) -> Result<Vec<Submission>, ApiError> {
        self.fetch(
            self.client
                .build_problemset_recent_status(count, problemset_name)?,
        )
    }

    pub fn user_info<S: AsRef<str>>(&self, handles: &[S]) -> Result<Vec<User>, ApiError> {
        self.fetch(self.client.build_user_info(handles)?)
    }

    /// Rated users by decreasing rating; with `active_only`, only those who
    /// took part in a rated contest during the last month.
    pub fn user_rated_list(&self, active_only: bool) -> Result<Vec<User>, ApiError> {
        self.fetch(self.client.build_user_rated_list(active_only))
    }

    pub fn user_rating(&self, handle: &str) -> Result<Vec<RatingChange>, ApiError> {
        self.fetch(self.client.build_user_rating(handle)?)
    }

    /// A user's submissions, newest first.
    pub fn user_status(
        &self,
        handle: &str,
        from: u32,
        count: Option<u32>,
    ) -> Result<Vec<Submission>, ApiError> {
        self.fetch(self.client.build_user_status(handle, from, count)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpResponse;
    use std::cell::RefCell;

    /// Answers every request with one fixed body and records the URLs.
    struct Scripted {
        status: u16,
        body: String,
        urls: RefCell<Vec<String>>,
    }

    impl Scripted {
        fn ok(result: &str) -> Self {
            Self::raw(200, &format!(r#"{{"status":"OK","result":{result}}}"#))
        }

        fn raw(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.to_string(),
                urls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for Scripted {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            self.urls.borrow_mut().push(request.url.clone());
            Ok(HttpResponse {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    fn api(transport: &Scripted) -> CodeforcesApi<&Scripted> {
        CodeforcesApi::with_transport(ClientConfig::default(), transport).unwrap()
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = ClientConfig::default().with_base_url("codeforces.com/api");
        assert!(matches!(
            CodeforcesApi::new(config),
            Err(ApiError::InvalidConfig(_))
        ));
    }

    #[test]
    fn language_picks_host() {
        let transport = Scripted::ok("[]");
        let config = ClientConfig::new(Language::Ru);
        let api = CodeforcesApi::with_transport(config, &transport).unwrap();
        api.contest_list(true).unwrap();
        assert_eq!(api.language(), Language::Ru);
        assert_eq!(
            transport.urls.borrow()[0],
            "http://codeforces.ru/api/contest.list?gym=true"
        );
    }

    #[test]
    fn validation_failure_sends_nothing() {
        let transport = Scripted::ok("[]");
        let handles: Vec<String> = (0..10_001).map(|i| format!("h{i}")).collect();
        let options = StandingsOptions::new().with_handles(handles);

        let err = api(&transport).contest_standings(374, &options).unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert!(transport.urls.borrow().is_empty());
    }

    #[test]
    fn recent_status_out_of_range_sends_nothing() {
        let transport = Scripted::ok("[]");
        assert!(api(&transport).problemset_recent_status(1001, None).is_err());
        assert!(transport.urls.borrow().is_empty());
    }

    #[test]
    fn remote_failure_message_is_comment() {
        let transport = Scripted::raw(
            400,
            r#"{"status":"FAILED","comment":"handle: User with handle nobody_xyz not found"}"#,
        );
        let err = api(&transport).user_rating("nobody_xyz").unwrap_err();
        assert_eq!(err.to_string(), "handle: User with handle nobody_xyz not found");
        assert_eq!(transport.urls.borrow().len(), 1);
    }

    #[test]
    fn missing_status_is_malformed() {
        let transport = Scripted::raw(200, r#"{"result":[]}"#);
        let err = api(&transport).contest_list(false).unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse { field } if field == "status"));
    }

    #[test]
    fn user_info_maps_each_element() {
        let transport = Scripted::ok(
            r#"[{"handle":"DmitriyH","rating":1800},{"handle":"Fefer_Ivan","rating":2100}]"#,
        );
        let users = api(&transport).user_info(&["DmitriyH", "Fefer_Ivan"]).unwrap();
        let handles: Vec<_> = users.iter().map(|u| u.handle.as_str()).collect();
        assert_eq!(handles, ["DmitriyH", "Fefer_Ivan"]);
        assert_eq!(
            transport.urls.borrow()[0],
            "http://codeforces.com/api/user.info?handles=DmitriyH;Fefer_Ivan"
        );
    }

    #[test]
    fn standings_maps_composite_result() {
        let transport = Scripted::ok(
            r#"{"contest":{"id":374,"name":"Round 220","type":"CF","phase":"FINISHED","frozen":false,"durationSeconds":7200},
                "problems":[{"contestId":374,"index":"A","name":"Pony","type":"PROGRAMMING","tags":[]}],
                "rows":[]}"#,
        );
        let standings = api(&transport)
            .contest_standings(374, &StandingsOptions::new().with_count(5))
            .unwrap();
        assert_eq!(standings.contest.id, 374);
        assert_eq!(standings.problems.len(), 1);
        assert!(standings.rows.is_empty());
        assert_eq!(
            transport.urls.borrow()[0],
            "http://codeforces.com/api/contest.standings?contestId=374&from=1&count=5"
        );
    }

    #[test]
    fn problemset_maps_both_lists() {
        let transport = Scripted::ok(
            r#"{"problems":[{"contestId":4,"index":"A","name":"Watermelon","type":"PROGRAMMING","tags":["math"]}],
                "problemStatistics":[{"contestId":4,"index":"A","solvedCount":100}]}"#,
        );
        let set = api(&transport).problemset_problems(&["math"], None).unwrap();
        assert_eq!(set.problems[0].id(), "4A");
        assert_eq!(set.problem_statistics[0].solved_count, 100);
    }
}
