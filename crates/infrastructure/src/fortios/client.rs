use gatewarden_domain::config::{ApiPathsConfig, FirewallConfig};
use gatewarden_domain::DomainError;
use reqwest::{Method, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Status code and decoded JSON body of one appliance call.
///
/// Bodies that are empty or not JSON decode to `Value::Null`; the status
/// code still tells callers what happened.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub body: Value,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Thin REST client for the FortiOS API.
///
/// Knows how to render path templates, attach the bearer token and the
/// `vdom` parameter; it does not interpret responses.
pub struct FortiOsClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
    paths: ApiPathsConfig,
}

impl FortiOsClient {
    pub fn new(config: &FirewallConfig, paths: ApiPathsConfig) -> Result<Self, DomainError> {
        let base_url = Url::parse(&config.base_url()).map_err(|e| {
            DomainError::Validation(format!("Invalid firewall address '{}': {}", config.address, e))
        })?;

        if !config.verify_ssl {
            warn!(url = %base_url, "TLS certificate verification disabled");
        }

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .danger_accept_invalid_certs(!config.verify_ssl)
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| DomainError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
            paths,
        })
    }

    pub fn paths(&self) -> &ApiPathsConfig {
        &self.paths
    }

    /// Renders `template` against the base URL, substituting `{name}`
    /// placeholders with percent-encoded values.
    pub fn render_url(
        &self,
        template: &str,
        placeholders: &[(&str, &str)],
    ) -> Result<Url, DomainError> {
        render_url(&self.base_url, template, placeholders)
    }

    pub async fn request(
        &self,
        method: Method,
        template: &str,
        placeholders: &[(&str, &str)],
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<HttpReply, DomainError> {
        let url = self.render_url(template, placeholders)?;
        debug!(method = %method, url = %url, "Sending firewall request");

        let mut builder = self.http.request(method.clone(), url.clone());
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            DomainError::Transport(format!("{} {} failed: {}", method, url.path(), e))
        })?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| {
            DomainError::Transport(format!(
                "Failed to read response of {} {}: {}",
                method,
                url.path(),
                e
            ))
        })?;
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        debug!(
            method = %method,
            path = url.path(),
            status,
            response_len = bytes.len(),
            "Firewall response received"
        );
        Ok(HttpReply { status, body })
    }
}

pub(crate) fn render_url(
    base: &Url,
    template: &str,
    placeholders: &[(&str, &str)],
) -> Result<Url, DomainError> {
    let mut url = base.clone();
    {
        let mut segments = url.path_segments_mut().map_err(|_| {
            DomainError::Validation(format!("Firewall address {} cannot take a path", base))
        })?;
        segments.pop_if_empty();
        for segment in template.split('/').filter(|s| !s.is_empty()) {
            let mut rendered = String::with_capacity(segment.len());
            let mut rest = segment;
            while let Some(open) = rest.find('{') {
                rendered.push_str(&rest[..open]);
                let token = &rest[open + 1..];
                let value = token.find('}').and_then(|close| {
                    let name = &token[..close];
                    placeholders
                        .iter()
                        .find(|(key, _)| *key == name)
                        .map(|(_, value)| (*value, close))
                });
                let Some((value, close)) = value else {
                    return Err(DomainError::Validation(format!(
                        "Unresolved placeholder in path template {}",
                        template
                    )));
                };
                rendered.push_str(value);
                rest = &token[close + 1..];
            }
            rendered.push_str(rest);
            segments.push(&rendered);
        }
    }
    Ok(url)
}

/// Query parameters carrying the partition, if any.
pub(crate) fn vdom_query(vdom: Option<&str>) -> Vec<(&'static str, String)> {
    vdom.map(|v| vec![("vdom", v.to_string())])
        .unwrap_or_default()
}
