//! API client construction from the invocation context.

use flynn_api::Client;
use flynn_core::RuntimeContext;

/// Build a controller client against the context's resolved API URL and
/// key.
pub(crate) fn api_client(ctx: &RuntimeContext) -> Client {
  Client::new(ctx.api_url(), ctx.api_key().map(str::to_string))
}
