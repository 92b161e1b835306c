//! Offline feed: canned statuses standing in for the remote service.
//!
//! The fixture is a JSON object mapping source names to status arrays:
//!
//! ```json
//! {
//!   "home":     [{"id": 1, "created_at": 1338508800000, "user": "alice", "text": "hi #rust"}],
//!   "mentions": []
//! }
//! ```
//!
//! `search` and `user` don't have their own arrays; they filter everything in
//! the fixture.

use std::collections::BTreeMap;
use std::path::Path;
use std::rc::Rc;

use perch_timeline::{Status, Timeline, UpdateError};
use serde::Deserialize;
use serde_json::Value;

use crate::config::{ConfigError, Source, TimelineConfig};

/// Errors from answering a fetch.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("source '{source_name}' expects {expected}, got {got}")]
    BadArgs {
        source_name: Source,
        expected: &'static str,
        got: String,
    },
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct Feed {
    sources: BTreeMap<String, Vec<Status>>,
}

impl Feed {
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let feed = Self::from_json(&crate::config::read(path)?)?;
        tracing::info!(path = %path.display(), sources = feed.sources.len(), "feed loaded");
        Ok(feed)
    }

    fn all(&self) -> impl Iterator<Item = &Status> {
        self.sources.values().flatten()
    }

    /// Answer a fetch for `source` called with `arg`.
    pub fn fetch(&self, source: Source, arg: Option<&Value>) -> Result<Vec<Status>, FeedError> {
        let statuses = match source {
            Source::Search => {
                let terms = search_terms(arg).ok_or_else(|| bad_args(source, "a term or list of terms", arg))?;
                self.all()
                    .filter(|s| terms.iter().any(|t| s.mentions(t)))
                    .cloned()
                    .collect()
            }
            Source::User => {
                let user = arg
                    .and_then(Value::as_str)
                    .ok_or_else(|| bad_args(source, "a screen name", arg))?;
                self.all().filter(|s| s.user == user).cloned().collect()
            }
            _ => self
                .sources
                .get(&source.to_string())
                .cloned()
                .unwrap_or_default(),
        };
        tracing::debug!(%source, fetched = statuses.len(), "feed fetch");
        Ok(statuses)
    }

    /// Build the timeline described by `config`, refreshed from this feed.
    pub fn timeline(self: &Rc<Self>, config: &TimelineConfig) -> Timeline {
        let feed = Rc::clone(self);
        let source = config.source;
        Timeline::new(config.name.clone()).with_update(
            move |arg| feed.fetch(source, arg).map_err(UpdateError::from),
            config.args.clone(),
        )
    }
}

/// A single search term, or an array of them.
fn search_terms(arg: Option<&Value>) -> Option<Vec<&str>> {
    match arg? {
        Value::String(term) => Some(vec![term.as_str()]),
        Value::Array(items) => items.iter().map(Value::as_str).collect(),
        _ => None,
    }
}

fn bad_args(source: Source, expected: &'static str, arg: Option<&Value>) -> FeedError {
    FeedError::BadArgs {
        source_name: source,
        expected,
        got: arg.map_or_else(|| "nothing".to_string(), Value::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perch_timeline::{ActiveList, UpdateArgs};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const FIXTURE: &str = r##"{
        "home": [
            {"id": 1, "created_at": 100, "user": "alice", "text": "morning #rust"},
            {"id": 2, "created_at": 300, "user": "bob", "text": "lunch"}
        ],
        "mentions": [
            {"id": 3, "created_at": 200, "user": "carol", "text": "@me #python rocks"}
        ]
    }"##;

    fn feed() -> Rc<Feed> {
        Rc::new(Feed::from_json(FIXTURE).unwrap())
    }

    fn ids(statuses: &[Status]) -> Vec<u64> {
        statuses.iter().map(|s| s.id.get()).collect()
    }

    #[test]
    fn test_named_sources() {
        let feed = feed();
        assert_eq!(ids(&feed.fetch(Source::Home, None).unwrap()), vec![1, 2]);
        assert_eq!(ids(&feed.fetch(Source::Mentions, None).unwrap()), vec![3]);
        assert!(feed.fetch(Source::Favorites, None).unwrap().is_empty());
    }

    #[test]
    fn test_search_single_and_many_terms() {
        let feed = feed();
        let one = feed.fetch(Source::Search, Some(&json!("#python"))).unwrap();
        assert_eq!(ids(&one), vec![3]);

        let many = feed.fetch(Source::Search, Some(&json!(["#python", "#RUST"]))).unwrap();
        assert_eq!(ids(&many), vec![1, 3]);
    }

    #[test]
    fn test_search_without_terms_fails() {
        let err = feed().fetch(Source::Search, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "source 'search' expects a term or list of terms, got nothing"
        );
        assert!(feed().fetch(Source::Search, Some(&json!(42))).is_err());
    }

    #[test]
    fn test_user_source() {
        let feed = feed();
        let bob = feed.fetch(Source::User, Some(&json!("bob"))).unwrap();
        assert_eq!(ids(&bob), vec![2]);
    }

    #[test]
    fn test_timeline_refreshes_from_feed() {
        let feed = feed();
        let mut timeline = feed.timeline(&TimelineConfig {
            name: "#python".into(),
            source: Source::Search,
            args: UpdateArgs::single("#python"),
        });

        assert_eq!(timeline.update().unwrap(), 1);
        assert_eq!(timeline.name(), "#python");
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.update().unwrap(), 0);
    }

    #[test]
    fn test_bad_fixture() {
        assert!(matches!(Feed::from_json("[1, 2]"), Err(ConfigError::Feed(_))));
    }
}
