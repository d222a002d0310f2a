//! Blocking bridge from the synchronous provider traits to async HTTP.
//!
//! The provider traits are synchronous to keep the core library embeddable
//! in synchronous contexts. [`HttpBackend`] owns a reusable `reqwest` client
//! and a current-thread Tokio runtime and blocks on futures as needed.

use std::future::Future;

use kerbside_core::ProviderError;
use reqwest::Client;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use super::config::{HttpProviderConfig, ProviderBuildError};

/// HTTP client plus the runtime used to drive it.
///
/// # Runtime behaviour
///
/// When called from outside any Tokio runtime, the backend uses its own
/// stored runtime. When called from within an existing multi-threaded Tokio
/// runtime it uses that runtime's handle with
/// [`tokio::task::block_in_place`] to avoid nested runtime panics.
///
/// When called from within a `current_thread` Tokio runtime, the backend
/// falls back to its own runtime. This avoids the panic that
/// `block_in_place` would cause, but may deadlock if the caller's runtime is
/// driving IO or timers that the request depends on.
pub(crate) struct HttpBackend {
    client: Client,
    config: HttpProviderConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpBackend")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpBackend {
    pub(crate) fn new(config: HttpProviderConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    pub(crate) const fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) const fn config(&self) -> &HttpProviderConfig {
        &self.config
    }

    /// Drive `future` to completion from synchronous code.
    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // No runtime detected, or current_thread runtime: use our own runtime.
            _ => self.runtime.block_on(future),
        }
    }

    /// Send a prepared request and decode its JSON body as `T`.
    pub(crate) async fn fetch_json<T>(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<T, ProviderError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, url))?;
        let body = response
            .text()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?;
        serde_json::from_str(&body).map_err(|err| ProviderError::ParseError {
            message: err.to_string(),
        })
    }

    /// Convert a reqwest error to a `ProviderError`.
    pub(crate) fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> ProviderError {
        if error.is_timeout() {
            return ProviderError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return ProviderError::HttpError {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        ProviderError::NetworkError {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}
