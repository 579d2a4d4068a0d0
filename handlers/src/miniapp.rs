//! Mini-app URL resolver: picks the web view address attached to the `/start` button.

use dbot_core::DbotError;
use reqwest::Url;

/// Resolves the companion web view URL for a user. `None` means no button is attached.
pub trait MiniAppUrlResolver: Send + Sync {
    fn resolve(&self, user_id: i64) -> Option<Url>;
}

/// Path layout under a candidate base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiniAppLayout {
    /// `<base>/miniapp/?user_id=<id>`
    Hosted,
    /// `<base>/telegram-miniapp/index.html?user_id=<id>`
    Static,
}

impl MiniAppLayout {
    fn path(self) -> &'static str {
        match self {
            MiniAppLayout::Hosted => "miniapp/",
            MiniAppLayout::Static => "telegram-miniapp/index.html",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiniAppCandidate {
    pub base: Url,
    pub layout: MiniAppLayout,
}

impl MiniAppCandidate {
    pub fn new(base: Url, layout: MiniAppLayout) -> Self {
        Self { base, layout }
    }

    /// Parses a base URL or a bare host. A host list (`a.example,b.example`) uses its first entry;
    /// a missing scheme defaults to https.
    pub fn parse(raw: &str, layout: MiniAppLayout) -> Result<Self, DbotError> {
        let first = raw
            .split(',')
            .map(str::trim)
            .find(|s| !s.is_empty())
            .ok_or_else(|| DbotError::Config("empty mini-app host".to_string()))?;
        let with_scheme = if first.contains("://") {
            first.to_string()
        } else {
            format!("https://{}", first)
        };
        let base = Url::parse(&with_scheme)
            .map_err(|e| DbotError::Config(format!("invalid mini-app url '{}': {}", first, e)))?;
        Ok(Self::new(base, layout))
    }

    /// Full URL for `user_id`, with the id as the `user_id` query value.
    pub fn url_for(&self, user_id: i64) -> Option<Url> {
        let base = self.base.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{}/{}", base, self.layout.path())).ok()?;
        url.query_pairs_mut()
            .clear()
            .append_pair("user_id", &user_id.to_string());
        Some(url)
    }
}

/// Tries candidates in preference order; the first that yields a URL wins.
#[derive(Debug, Clone, Default)]
pub struct CandidateUrlResolver {
    candidates: Vec<MiniAppCandidate>,
}

impl CandidateUrlResolver {
    pub fn new(candidates: Vec<MiniAppCandidate>) -> Self {
        Self { candidates }
    }

    /// Builds from the configured primary URL (hosted layout) and fallback host (static layout).
    pub fn from_settings(
        primary_url: Option<&str>,
        fallback_host: Option<&str>,
    ) -> Result<Self, DbotError> {
        let mut candidates = Vec::new();
        if let Some(primary) = primary_url {
            candidates.push(MiniAppCandidate::parse(primary, MiniAppLayout::Hosted)?);
        }
        if let Some(fallback) = fallback_host {
            candidates.push(MiniAppCandidate::parse(fallback, MiniAppLayout::Static)?);
        }
        Ok(Self::new(candidates))
    }

    pub fn candidates(&self) -> &[MiniAppCandidate] {
        &self.candidates
    }
}

impl MiniAppUrlResolver for CandidateUrlResolver {
    fn resolve(&self, user_id: i64) -> Option<Url> {
        self.candidates.iter().find_map(|c| c.url_for(user_id))
    }
}
