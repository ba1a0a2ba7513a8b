use reqwest::{Client, Method, RequestBuilder, Response, header::ACCEPT};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

use crate::error::ClientError;
use crate::query_builder::{GetOptions, append_options};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    pub status: u16,
    pub ok: bool,
    pub status_text: Option<String>,
}

impl From<&Response> for ResponseMeta {
    fn from(response: &Response) -> Self {
        let status = response.status();
        Self {
            status: status.as_u16(),
            ok: status.is_success(),
            status_text: status.canonical_reason().map(str::to_string),
        }
    }
}

/// Outcome of one call. `err` is set exactly when the call failed locally or
/// the server answered with a non-success status; `response` is absent when
/// no response was received.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientResult {
    pub response: Option<ResponseMeta>,
    pub data: Option<Value>,
    pub err: Option<ClientError>,
}

impl ClientResult {
    fn failed(err: ClientError) -> Self {
        Self {
            err: Some(err),
            ..Default::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.err.is_none()
    }
}

fn error_message(data: Option<&Value>, meta: &ResponseMeta) -> String {
    data.and_then(|body| body.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| meta.status_text.clone())
        .unwrap_or_else(|| format!("Unknown error while fetching: status {}", meta.status))
}

#[derive(Debug, Clone)]
pub struct AciiverseClient {
    base_url: Url,
    client: Client,
}

impl AciiverseClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            base_url,
            client: Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `path` below the base url, without a trailing slash.
    pub fn url(&self, path: &str) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()));

        Ok(url)
    }

    pub async fn get(&self, path: &str, options: Option<&GetOptions>) -> ClientResult {
        let mut url = match self.url(path) {
            Ok(url) => url,
            Err(e) => return ClientResult::failed(e),
        };
        if let Some(options) = options
            && let Err(e) = append_options(&mut url, options)
        {
            error!("{}", e);
            return ClientResult::failed(e);
        }

        self.send(self.client.request(Method::GET, url)).await
    }

    pub async fn create<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> ClientResult {
        self.send_json(Method::POST, path, body).await
    }

    pub async fn update<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> ClientResult {
        self.send_json(Method::PUT, path, body).await
    }

    pub async fn remove(&self, path: &str) -> ClientResult {
        match self.url(path) {
            Ok(url) => self.send(self.client.request(Method::DELETE, url)).await,
            Err(e) => ClientResult::failed(e),
        }
    }

    async fn send_json<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &T,
    ) -> ClientResult {
        match self.url(path) {
            Ok(url) => self.send(self.client.request(method, url).json(body)).await,
            Err(e) => ClientResult::failed(e),
        }
    }

    async fn send(&self, request: RequestBuilder) -> ClientResult {
        let response = match request
            .header(ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Request failed: {}", e);
                return ClientResult::failed(ClientError::Request(e.to_string()));
            }
        };

        let meta = ResponseMeta::from(&response);
        let body = response.json::<Value>().await;

        if !meta.ok {
            let data = body.ok();
            let message = error_message(data.as_ref(), &meta);
            error!(status = meta.status, "Request returned an error: {}", message);

            return ClientResult {
                err: Some(ClientError::Status {
                    status: meta.status,
                    message,
                }),
                response: Some(meta),
                data,
            };
        }

        match body {
            Ok(data) => ClientResult {
                response: Some(meta),
                data: Some(data),
                err: None,
            },
            Err(e) => {
                debug!(status = meta.status, "Response body is not JSON: {}", e);
                ClientResult {
                    response: Some(meta),
                    data: None,
                    err: Some(ClientError::Decode(e.to_string())),
                }
            }
        }
    }
}
