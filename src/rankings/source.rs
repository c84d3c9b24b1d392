use super::parse::parse_rankings;
use crate::types::{AppResult, RankingTable};
use std::time::Duration;

pub const RANKINGS_URL: &str = "https://cornhole.kr/html/sub5_1.jsp";
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);
const USER_AGENT: &str = "Mozilla/5.0";

/// Anything that can produce a fresh ranking table. The production source
/// scrapes the federation page; tests substitute their own.
pub trait RankingSource {
    fn fetch(&self) -> AppResult<RankingTable>;
}

/// Live ranking lookup against the federation website. Requests are
/// time-bounded; any transport or status failure surfaces as an error for
/// the cache layer to absorb.
pub struct FederationSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl FederationSource {
    pub fn new() -> AppResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            url: RANKINGS_URL.to_string(),
        })
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }
}

impl RankingSource for FederationSource {
    fn fetch(&self) -> AppResult<RankingTable> {
        let body = self
            .client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .text()?;
        Ok(parse_rankings(&body))
    }
}
