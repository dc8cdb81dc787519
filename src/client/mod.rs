// Client module - DofusDB API client
pub mod api;
pub mod error;
pub mod query;

pub use api::DofusDbClient;
pub use error::LookupError;
pub use query::{build_query, encode_uri_component};
