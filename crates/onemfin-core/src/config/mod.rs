//! Configuration system for OneMFin.
//! TOML-based, 3-layer resolution: env > config file > defaults.

pub mod defaults;
pub mod link_config;
pub mod observability_config;
pub mod onemfin_config;
pub mod store_config;
pub mod verifier_config;

pub use link_config::LinkConfig;
pub use observability_config::ObservabilityConfig;
pub use onemfin_config::OnemfinConfig;
pub use store_config::StoreConfig;
pub use verifier_config::VerifierConfig;
