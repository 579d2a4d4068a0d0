//! Mini-app URL candidates for the `/start` button.

use anyhow::Result;
use handlers::CandidateUrlResolver;
use std::env;

#[derive(Debug, Clone, Default)]
pub struct MiniAppConfig {
    /// MINIAPP_PRIMARY_URL: hosted layout, preferred when set
    pub primary_url: Option<String>,
    /// MINIAPP_FALLBACK_HOST or REPLIT_DOMAINS: static layout; comma-separated, first entry used
    pub fallback_host: Option<String>,
}

fn non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}

impl MiniAppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            primary_url: non_empty("MINIAPP_PRIMARY_URL"),
            fallback_host: non_empty("MINIAPP_FALLBACK_HOST").or_else(|| non_empty("REPLIT_DOMAINS")),
        })
    }

    /// Builds the resolver; fails on an unparseable candidate.
    pub fn resolver(&self) -> Result<CandidateUrlResolver> {
        Ok(CandidateUrlResolver::from_settings(
            self.primary_url.as_deref(),
            self.fallback_host.as_deref(),
        )?)
    }

    pub fn validate(&self) -> Result<()> {
        self.resolver().map(|_| ())
    }
}
