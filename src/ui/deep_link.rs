//! Deep-link adapter.
//!
//! Turns raw URL text into an [`AppIntent::OpenDeepLink`]. The resulting
//! intent writes the app route directly, possibly several levels deep, without
//! going through the presentation intents. A view that has not yet observed
//! the new state may still send intents addressed to the route that was active
//! before; those are dropped and reported by the route scope.
//!
//! Accepted forms, with `scheme` taken from config:
//!
//! ```text
//! scheme://intermediate-a
//! scheme://intermediate-b/leaf
//! scheme://nothing            (configured fallback)
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use url::Url;

use crate::ui::scenes::app::{AppIntent, AppRoute, AppRouteTag};
use crate::ui::scenes::intermediate::IntermediateState;

/// Host used by links that carry no target of their own.
const PLACEHOLDER_HOST: &str = "nothing";

#[derive(Debug, Error)]
pub enum DeepLinkError {
    #[error("Malformed deep link '{input}': {source}")]
    Malformed {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Deep link scheme '{found}' does not match '{expected}'")]
    SchemeMismatch { expected: String, found: String },

    #[error("Unknown deep link target '{0}'")]
    UnknownTarget(String),
}

/// Where a deep link lands once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeepLinkTarget {
    pub intermediate: AppRouteTag,
    /// Also present the intermediate scene's leaf.
    pub leaf: bool,
}

impl DeepLinkTarget {
    /// Build the full route subtree for this target.
    pub fn into_route(self) -> AppRoute {
        let letter_id = self.intermediate.letter_id();
        let state = if self.leaf {
            IntermediateState::with_leaf(letter_id)
        } else {
            IntermediateState::new(letter_id)
        };
        AppRoute::from_tag(self.intermediate, state)
    }
}

impl FromStr for DeepLinkTarget {
    type Err = DeepLinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || DeepLinkError::UnknownTarget(s.to_string());
        let mut segments = s.trim_matches('/').split('/');

        let intermediate = match segments.next() {
            Some("intermediate-a") => AppRouteTag::IntermediateA,
            Some("intermediate-b") => AppRouteTag::IntermediateB,
            _ => return Err(unknown()),
        };
        let leaf = match segments.next() {
            None => false,
            Some("leaf") => true,
            Some(_) => return Err(unknown()),
        };
        if segments.next().is_some() {
            return Err(unknown());
        }

        Ok(Self { intermediate, leaf })
    }
}

impl fmt::Display for DeepLinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.intermediate)?;
        if self.leaf {
            f.write_str("/leaf")?;
        }
        Ok(())
    }
}

/// Resolves raw URL text against the configured scheme.
#[derive(Debug, Clone)]
pub struct DeepLinkAdapter {
    scheme: String,
    fallback: DeepLinkTarget,
}

impl DeepLinkAdapter {
    pub fn new(scheme: impl Into<String>, fallback: DeepLinkTarget) -> Self {
        Self {
            scheme: scheme.into(),
            fallback,
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn resolve(&self, raw: &str) -> Result<DeepLinkTarget, DeepLinkError> {
        let url = Url::parse(raw.trim()).map_err(|source| DeepLinkError::Malformed {
            input: raw.to_string(),
            source,
        })?;

        if !url.scheme().eq_ignore_ascii_case(&self.scheme) {
            return Err(DeepLinkError::SchemeMismatch {
                expected: self.scheme.clone(),
                found: url.scheme().to_string(),
            });
        }

        let target = format!("{}{}", url.host_str().unwrap_or_default(), url.path());
        let target = target.trim_matches('/');
        if target.is_empty() || target == PLACEHOLDER_HOST {
            tracing::debug!(
                url = %url,
                fallback = %self.fallback,
                "deep link has no target, using fallback"
            );
            return Ok(self.fallback);
        }
        target.parse()
    }

    /// Resolve `raw` into the intent the app store should receive.
    pub fn intent_for(&self, raw: &str) -> Result<AppIntent, DeepLinkError> {
        self.resolve(raw).map(AppIntent::OpenDeepLink)
    }
}
