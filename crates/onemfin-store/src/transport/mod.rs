//! Transport layer: blocking HTTP client and PostgREST query encoding.

pub mod http_client;
pub mod query;

pub use http_client::{classify_failure, decode_rows, HttpClient, HttpClientConfig};
pub use query::TableQuery;
