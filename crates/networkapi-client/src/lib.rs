//! NetworkAPI client
//!
//! A Rust client library for the NetworkAPI network-management service: environments,
//! VLANs, networks, IP addresses, equipment, load-balancer pools and VIPs.
//!
//! The server exposes two families of resources. The legacy ones speak XML under a
//! `<networkapi versao="1.0">` root and report failures as numeric codes; the
//! `api/v3` and `api/v4` ones speak JSON and report failures in a `detail` field.
//! Both are reached through [`ClientFactory`], which shares one transport across
//! every façade it creates.
//!
//! # Example
//!
//! ```no_run
//! use networkapi_client::{ApiResource, ClientConfig, ClientFactory, QueryOptions};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), networkapi_client::NetworkApiError> {
//! let config = ClientConfig::from_env()?;
//! let factory = ClientFactory::new(config)?;
//!
//! // Legacy XML resource: responses are maps with string leaves
//! let environment = factory.create_environment().get_by_id(7).await?;
//! println!("{}", environment["nome_divisao"]);
//!
//! // v3 JSON resource
//! let vlans = factory
//!     .create_api_vlan()
//!     .search(&QueryOptions::search(json!({ "extends_search": [{ "num_vlan": 10 }] })))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Legacy resources**: typed parameters, validated before any request is sent
//! - **Error table**: every server error code maps to an [`ApiErrorKind`]
//! - **v3/v4 resources**: shared search/get/create/update/delete through [`ApiResource`]
//! - **Mocking**: the `test-util` feature exposes [`MockTransport`]

pub mod api;
pub mod codes;
pub mod common;
pub mod config;
pub mod error;
pub mod factory;
pub mod legacy;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;
pub mod models;
pub mod transport;
pub mod validation;
pub mod xml;

pub use api::{ApiResource, Deployable};
pub use codes::ApiErrorKind;
pub use common::{ApiClient, GenericClient};
pub use config::ClientConfig;
pub use error::{NetworkApiError, Result};
pub use factory::ClientFactory;
#[cfg(any(test, feature = "test-util"))]
pub use mock::MockTransport;
pub use models::{Pagination, QueryOptions};
pub use transport::{ApiRequest, HttpMethod, HttpTransport, RawResponse, Transport};
pub use validation::IdParam;
