use base64::{engine::general_purpose::STANDARD, Engine};
use check_json_core::{Error, Result};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

const DEFAULT_USER_AGENT: &str = concat!("check_json/", env!("CARGO_PKG_VERSION"));

/// Where the document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub tls: bool,
}

impl Endpoint {
    /// `http[s]://host[:port][/path]`
    #[must_use]
    pub fn url(&self) -> String {
        let scheme = if self.tls { "https" } else { "http" };
        let mut url = format!("{scheme}://{}", self.host);
        if let Some(port) = self.port {
            url.push_str(&format!(":{port}"));
        }
        if let Some(path) = &self.path {
            url.push('/');
            url.push_str(path.trim_start_matches('/'));
        }
        url
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

/// Request settings that are not part of the URL
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub timeout: Option<Duration>,
    /// `username:password`, sent base64-encoded as given
    pub basic_auth: Option<String>,
}

/// Performs the single GET of a check run
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    url: Url,
    display_url: String,
    authorization: Option<HeaderValue>,
}

impl HttpFetcher {
    pub fn new(endpoint: &Endpoint, options: FetchOptions) -> Result<Self> {
        let display_url = endpoint.url();
        let url = Url::parse(&display_url)
            .map_err(|e| Error::fetch_transport(&display_url, format!("invalid URL: {e}")))?;

        let mut builder = reqwest::Client::builder().user_agent(DEFAULT_USER_AGENT);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::fetch_transport(&display_url, e.to_string()))?;

        let authorization = options
            .basic_auth
            .as_deref()
            .map(|credentials| {
                let mut value =
                    HeaderValue::from_str(&format!("Basic {}", STANDARD.encode(credentials)))
                        .map_err(|e| Error::fetch_transport(&display_url, e.to_string()))?;
                value.set_sensitive(true);
                Ok::<_, Error>(value)
            })
            .transpose()?;

        Ok(Self {
            client,
            url,
            display_url,
            authorization,
        })
    }

    /// The URL as it appears in status messages
    #[must_use]
    pub fn url(&self) -> &str {
        &self.display_url
    }

    /// Fetch the response body.
    ///
    /// Statuses of 400 and above are protocol failures; anything that stops
    /// a response from arriving or being read is a transport failure.
    pub async fn fetch(&self) -> Result<String> {
        info!(url = %self.display_url, "fetching document");

        let mut request = self.client.get(self.url.clone());
        if let Some(authorization) = &self.authorization {
            request = request.header(AUTHORIZATION, authorization.clone());
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::fetch_transport(&self.display_url, transport_reason(&e)))?;

        let status = response.status();
        debug!(status = status.as_u16(), "response received");
        if status.is_client_error() || status.is_server_error() {
            return Err(Error::fetch_protocol(&self.display_url, status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| Error::fetch_transport(&self.display_url, transport_reason(&e)))
    }
}

fn transport_reason(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        return "timed out".to_string();
    }

    let mut cause: &dyn std::error::Error = error;
    while let Some(next) = cause.source() {
        cause = next;
    }
    cause.to_string()
}
