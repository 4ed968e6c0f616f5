//! Controller endpoint implementations, grouped by resource.

mod apps;
mod jobs;
