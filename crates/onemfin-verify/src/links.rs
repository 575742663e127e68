//! Assessment link issuance and back-fill.

use onemfin_core::config::LinkConfig;
use onemfin_core::constants::USERS_TABLE;
use onemfin_core::errors::{ConfigError, OnemfinResult};
use onemfin_core::models::User;
use onemfin_core::traits::IRecordStore;
use serde::Serialize;

use crate::events;
use crate::predicates;

/// A link minted for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedLink {
    pub user_id: String,
    pub link: String,
    /// False for a dry run.
    pub persisted: bool,
}

/// Builds `{base_url}/{path_prefix}/{token}` links with a fresh token each call.
#[derive(Debug, Clone)]
pub struct AssessmentLinkIssuer {
    base_url: String,
    path_prefix: String,
}

impl AssessmentLinkIssuer {
    pub fn new(base_url: impl Into<String>, path_prefix: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path_prefix: path_prefix.into(),
        }
    }

    /// Fails when `links.base_url` is unset.
    pub fn from_config(config: &LinkConfig) -> Result<Self, ConfigError> {
        let base_url = config
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .ok_or_else(|| ConfigError::Missing {
                field: "links.base_url".to_string(),
                env_hint: "ONEMFIN_LINK_BASE_URL".to_string(),
            })?;
        Ok(Self::new(base_url, config.path_prefix.clone()))
    }

    /// Mint a new link for `user`. The token is a random UUID in simple form.
    pub fn issue(&self, user: &User) -> String {
        let token = uuid::Uuid::new_v4().simple().to_string();
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.path_prefix.trim_matches('/');
        tracing::trace!(user_id = %user.id, "minting assessment link");
        if prefix.is_empty() {
            format!("{base}/{token}")
        } else {
            format!("{base}/{prefix}/{token}")
        }
    }

    /// Issue a link for every user without one and, unless `dry_run`, store it.
    /// Stops at the first store error.
    pub fn backfill(&self, store: &dyn IRecordStore, dry_run: bool) -> OnemfinResult<Vec<IssuedLink>> {
        let users = store.fetch_users()?;
        events::fetch_completed(USERS_TABLE, users.len());

        let mut issued = Vec::new();
        for user in users
            .iter()
            .filter(|u| predicates::has_assessment_link(u).is_violated())
        {
            let link = self.issue(user);
            if !dry_run {
                store.update_assessment_link(&user.id, &link)?;
            }
            events::link_issued(&user.id, !dry_run);
            issued.push(IssuedLink {
                user_id: user.id.clone(),
                link,
                persisted: !dry_run,
            });
        }
        Ok(issued)
    }
}
