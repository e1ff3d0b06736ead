use std::time::Duration;
use tonic::transport::Endpoint;

/// HTTP/2 PING settings; the connection is dropped when a ping goes
/// unanswered for `timeout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeepAlive {
  pub interval: Duration,
  pub timeout: Duration,
}

impl Default for KeepAlive {
  fn default() -> Self {
    Self {
      interval: Duration::from_secs(30),
      timeout: Duration::from_secs(10),
    }
  }
}

/// Client endpoint settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelConfig {
  pub connect_timeout: Duration,
  /// Deadline of every call made through the channel
  pub request_timeout: Duration,
  pub keep_alive: Option<KeepAlive>,
}

impl Default for ChannelConfig {
  fn default() -> Self {
    Self {
      connect_timeout: Duration::from_secs(5),
      request_timeout: Duration::from_secs(30),
      keep_alive: Some(KeepAlive::default()),
    }
  }
}

impl ChannelConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
    self.connect_timeout = timeout;
    self
  }

  pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
    self.request_timeout = timeout;
    self
  }

  pub fn without_keep_alive(mut self) -> Self {
    self.keep_alive = None;
    self
  }

  pub(crate) fn apply_to_endpoint(&self, endpoint: Endpoint) -> Endpoint {
    let endpoint = endpoint
      .connect_timeout(self.connect_timeout)
      .timeout(self.request_timeout)
      .tcp_nodelay(true);

    match self.keep_alive {
      Some(keep_alive) => endpoint
        .http2_keep_alive_interval(keep_alive.interval)
        .keep_alive_timeout(keep_alive.timeout)
        .keep_alive_while_idle(true)
        .tcp_keepalive(Some(keep_alive.interval)),
      None => endpoint,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let config = ChannelConfig::default();
    assert_eq!(config.connect_timeout, Duration::from_secs(5));
    assert_eq!(config.request_timeout, Duration::from_secs(30));
    assert_eq!(config.keep_alive, Some(KeepAlive::default()));
  }

  #[test]
  fn test_builder() {
    let config = ChannelConfig::new()
      .with_connect_timeout(Duration::from_secs(1))
      .with_request_timeout(Duration::from_secs(5))
      .without_keep_alive();

    assert_eq!(config.connect_timeout, Duration::from_secs(1));
    assert_eq!(config.request_timeout, Duration::from_secs(5));
    assert!(config.keep_alive.is_none());
  }
}
