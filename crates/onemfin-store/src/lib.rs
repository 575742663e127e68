//! # onemfin-store
//!
//! The data access adapter: [`RestStore`] implements
//! [`onemfin_core::traits::IRecordStore`] over the hosted store's PostgREST API.
//!
//! Every call is one blocking round trip. No caching, no retries: a failure is
//! surfaced to the caller as a [`onemfin_core::errors::StoreError`] and the
//! run ends there.

pub mod rest_store;
pub mod transport;

pub use rest_store::RestStore;
pub use transport::{HttpClient, HttpClientConfig, TableQuery};
