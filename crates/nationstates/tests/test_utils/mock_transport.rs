//! Mock transport for testing.

use async_trait::async_trait;
use nationstates::{CollectedData, NationstatesResult, RequestIdentity, Transport, TransportError};
use serde_json::{Map, Value, json};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always obtain the given response
    Success(CollectedData),
    /// Report that no data was obtained
    NoData,
    /// Always fail with a transport error carrying this message
    Error(String),
}

/// Mock transport for testing.
///
/// Records how it was configured and called so tests can verify what the
/// request client handed to the transport. Cloning gives an independent
/// mock with its own counters.
#[derive(Debug, Clone)]
pub struct MockTransport {
    behavior: MockBehavior,
    call_count: usize,
    last_user_agent: Option<String>,
    identity: Option<RequestIdentity>,
    loaded: bool,
}

impl MockTransport {
    /// Create a mock that always obtains `response`.
    pub fn new_success(response: Value) -> Self {
        let response = match response {
            Value::Object(map) => map,
            other => panic!("mock response must be a JSON object, got {other}"),
        };
        Self::new_with_behavior(MockBehavior::Success(response))
    }

    /// Create a mock that answers every load with "no data".
    pub fn new_no_data() -> Self {
        Self::new_with_behavior(MockBehavior::NoData)
    }

    /// Create a mock that always fails with a transport error.
    pub fn new_error(message: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Error(message.into()))
    }

    /// Create a mock with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: 0,
            last_user_agent: None,
            identity: None,
            loaded: false,
        }
    }

    /// Testlandia's full name, the canonical fixture.
    pub fn testlandia() -> Self {
        Self::new_success(json!({
            "nation": {
                "fullname": "The Republic of Testlandia",
                "motto": "Test, test, test",
            }
        }))
    }

    /// Replace the behavior, keeping the counters.
    pub fn set_behavior(&mut self, behavior: MockBehavior) {
        self.behavior = behavior;
    }

    /// Number of times `load` was called.
    pub fn call_count(&self) -> usize {
        self.call_count
    }

    /// User agent passed to the last `load`.
    pub fn last_user_agent(&self) -> Option<&str> {
        self.last_user_agent.as_deref()
    }

    /// Identity from the last `configure`.
    pub fn identity(&self) -> Option<&RequestIdentity> {
        self.identity.as_ref()
    }

    fn api(&self) -> &str {
        self.identity
            .as_ref()
            .map(|identity| identity.api().as_str())
            .unwrap_or("nation")
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn configure(&mut self, identity: &RequestIdentity) {
        self.identity = Some(identity.clone());
    }

    async fn load(&mut self, user_agent: Option<&str>) -> NationstatesResult<bool> {
        self.call_count += 1;
        self.last_user_agent = user_agent.map(str::to_string);

        match &self.behavior {
            MockBehavior::Success(_) => {
                self.loaded = true;
                Ok(true)
            }
            MockBehavior::NoData => {
                self.loaded = true;
                Ok(false)
            }
            MockBehavior::Error(message) => Err(TransportError::new(message.clone()).into()),
        }
    }

    fn collect(&self) -> CollectedData {
        match &self.behavior {
            MockBehavior::Success(response) => response.clone(),
            _ => Map::new(),
        }
    }

    fn all_data(&self) -> Option<Map<String, Value>> {
        if !self.loaded {
            return None;
        }
        let mut data = Map::new();
        data.insert("url".to_string(), Value::String(format!("{}&resolved", self.get_url())));
        Some(data)
    }

    fn get_url(&self) -> String {
        let value = self
            .identity
            .as_ref()
            .and_then(|identity| identity.value().clone())
            .unwrap_or_default();
        format!("https://www.nationstates.net/cgi-bin/api.cgi?{}={}", self.api(), value)
    }
}
