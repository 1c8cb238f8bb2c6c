//! HTTP side of the spin: talks to the outcome authority.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use spinwheel_shared::constants::{SPIN_ENDPOINT, STATUS_ENDPOINT};
use spinwheel_shared::spin_client::{classify_spin_response, classify_status_response};
use spinwheel_shared::wheel::StatusResponse;
use spinwheel_shared::{SpinClient, SpinOutcome, SpinRequestError};

pub struct HttpSpinClient {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl HttpSpinClient {
    /// Fails when the HTTP client cannot be built with a session cookie
    /// store and the deadline; there is no degraded client to fall back to.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: build_client(timeout)?,
            timeout,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send once and hand back the status code and body.
    async fn send(&self, request: RequestBuilder) -> Result<(u16, Vec<u8>), SpinRequestError> {
        let exchange = async {
            let response = with_credentials(request).send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, body.to_vec()))
        };

        match with_deadline(exchange, self.timeout).await {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(e)) => {
                log::warn!("Network error talking to spin authority: {}", e);
                Err(SpinRequestError::Unavailable)
            }
            None => {
                log::warn!("Spin authority did not answer within {:?}", self.timeout);
                Err(SpinRequestError::Unavailable)
            }
        }
    }
}

impl SpinClient for HttpSpinClient {
    async fn request_spin(&self) -> Result<SpinOutcome, SpinRequestError> {
        let (status, body) = self.send(self.client.post(self.url(SPIN_ENDPOINT))).await?;
        classify_spin_response(status, &body)
    }

    async fn fetch_status(&self) -> Result<StatusResponse, SpinRequestError> {
        let (status, body) = self.send(self.client.get(self.url(STATUS_ENDPOINT))).await?;
        classify_status_response(status, &body)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder().cookie_store(true).timeout(timeout).build()
}

#[cfg(target_arch = "wasm32")]
fn build_client(_timeout: Duration) -> reqwest::Result<Client> {
    Client::builder().build()
}

// The session cookie is what lets the authority refuse a second spin.
#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

#[cfg(target_arch = "wasm32")]
async fn with_deadline<F: Future>(future: F, timeout: Duration) -> Option<F::Output> {
    use futures::future::{select, Either};
    use gloo_timers::future::TimeoutFuture;

    let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
    let future = std::pin::pin!(future);
    let deadline = std::pin::pin!(TimeoutFuture::new(millis));
    match select(future, deadline).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}

// Native clients enforce the deadline inside reqwest itself.
#[cfg(not(target_arch = "wasm32"))]
async fn with_deadline<F: Future>(future: F, _timeout: Duration) -> Option<F::Output> {
    Some(future.await)
}
