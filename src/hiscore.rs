use std::time::Duration;

use anyhow::{bail, Context, Result};

pub const HISCORE_BASE_URL: &str = "https://secure.runescape.com";
/// Old School display names cap at twelve characters.
pub const MAX_USERNAME_LEN: usize = 12;

// index_lite.ws emits one "rank,level,xp" line per skill; prayer is the
// seventh line.
const PRAYER_LINE_INDEX: usize = 6;
const XP_FIELD_INDEX: usize = 2;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the Old School hiscore lite endpoint.
#[derive(Debug, Clone)]
pub struct HiscoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl HiscoreClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(HISCORE_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build hiscore HTTP client")?;
        Ok(HiscoreClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Look up a player's prayer XP. Unranked accounts come back as -1.
    pub async fn fetch_prayer_xp(&self, username: &str) -> Result<i64> {
        let username = username.trim();
        if username.is_empty() {
            bail!("Username is empty");
        }
        if username.len() > MAX_USERNAME_LEN {
            bail!("Username is longer than {} characters", MAX_USERNAME_LEN);
        }

        let url = format!(
            "{}/m=hiscore_oldschool/index_lite.ws?player={}",
            self.base_url,
            urlencoding::encode(username)
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch hiscores")?;
        if !response.status().is_success() {
            bail!(
                "Hiscore lookup for {} returned {}",
                username,
                response.status()
            );
        }
        let body = response
            .text()
            .await
            .context("Failed to read hiscore response")?;

        parse_prayer_xp(&body).context("Malformed hiscore response")
    }
}

/// Pull the prayer XP field out of an index_lite body.
pub fn parse_prayer_xp(body: &str) -> Option<i64> {
    let line = body.lines().nth(PRAYER_LINE_INDEX)?;
    let field = line.split(',').nth(XP_FIELD_INDEX)?;
    field.trim().parse().ok()
}
