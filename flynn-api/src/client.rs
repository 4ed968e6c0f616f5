use reqwest::RequestBuilder;

/// Represents a Flynn controller API client
pub struct Client {
  pub(crate) client: reqwest::Client,
  pub(crate) base_url: String,
  pub(crate) api_key: Option<String>,
}

impl Client {
  /// Create a new controller client
  pub fn new(base_url: &str, api_key: Option<String>) -> Self {
    Self {
      client: reqwest::Client::new(),
      base_url: base_url.trim_end_matches('/').to_string(),
      api_key,
    }
  }

  /// The base URL this client talks to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  // The controller authenticates with an empty user and the API key as
  // password.
  pub(crate) fn authenticated(&self, request: RequestBuilder) -> RequestBuilder {
    match &self.api_key {
      Some(key) => request.basic_auth("", Some(key)),
      None => request,
    }
  }
}
