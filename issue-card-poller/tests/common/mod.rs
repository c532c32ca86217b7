#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use issue_card_poller::{
    CardEvent, ConfigSource, DispatchError, Dispatcher, FetchError, Issue, IssueSource,
    SecretError, SecretSource, ACCESS_TOKEN_SECRET,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// 2024-03-10T12:00:00Z
pub fn reference_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
}

pub fn issue(number: u64, title: &str) -> Issue {
    Issue {
        id: 1000 + number,
        number,
        title: title.to_string(),
        repository_html_url: "https://github.com/acme/app".to_string(),
        html_url: format!("https://github.com/acme/app/issues/{number}"),
        ..Issue::default()
    }
}

/// Config values from a fixed map.
#[derive(Debug, Default)]
pub struct MapConfigSource(BTreeMap<String, String>);

impl MapConfigSource {
    pub fn new<const N: usize>(pairs: [(&str, &str); N]) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl ConfigSource for MapConfigSource {
    fn lookup(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

/// Secrets held in memory.
#[derive(Debug, Default)]
pub struct InMemorySecrets(BTreeMap<String, Vec<u8>>);

impl InMemorySecrets {
    pub fn with_token(token: &str) -> Self {
        let mut secrets = BTreeMap::new();
        secrets.insert(ACCESS_TOKEN_SECRET.to_string(), token.as_bytes().to_vec());
        Self(secrets)
    }
}

impl SecretSource for InMemorySecrets {
    fn get_secret(&self, name: &str) -> Result<Vec<u8>, SecretError> {
        self.0.get(name).cloned().ok_or_else(|| SecretError::NotFound {
            name: name.to_string(),
            searched: Vec::new(),
        })
    }
}

/// Returns a fixed list of issues and records each checkpoint it was asked for.
#[derive(Debug, Clone, Default)]
pub struct FakeIssueSource {
    issues: Vec<Issue>,
    pub checkpoints: Arc<Mutex<Vec<DateTime<Utc>>>>,
}

impl FakeIssueSource {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self {
            issues,
            checkpoints: Arc::default(),
        }
    }
}

#[async_trait]
impl IssueSource for FakeIssueSource {
    async fn list_issues_since(&self, checkpoint: DateTime<Utc>) -> Result<Vec<Issue>, FetchError> {
        self.checkpoints.lock().unwrap().push(checkpoint);
        Ok(self.issues.clone())
    }
}

/// Records every event; fails the dispatches at the given one-based positions.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    fail_at: Vec<usize>,
    pub attempts: Arc<Mutex<Vec<CardEvent>>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(positions: &[usize]) -> Self {
        Self {
            fail_at: positions.to_vec(),
            attempts: Arc::default(),
        }
    }

    pub fn titles(&self) -> Vec<String> {
        self.attempts
            .lock()
            .unwrap()
            .iter()
            .map(|event| event.title.clone())
            .collect()
    }
}

#[async_trait]
impl Dispatcher for RecordingDispatcher {
    async fn dispatch(&self, event: &CardEvent) -> Result<(), DispatchError> {
        let position = {
            let mut attempts = self.attempts.lock().unwrap();
            attempts.push(event.clone());
            attempts.len()
        };

        if self.fail_at.contains(&position) {
            return Err(DispatchError::RequestError {
                endpoint: "http://[invalid".to_string(),
                source: url::ParseError::InvalidIpv6Address,
            });
        }
        Ok(())
    }
}

/// An address nothing listens on.
pub fn closed_local_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/function/trellocard")
}
