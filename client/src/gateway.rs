use crate::cfg::Config;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use std::net::Ipv4Addr;
use std::sync::Arc;
use timeclock::TokenStore;
use tracing::info;

//--------------------------------------------------------------------------------------------------
// Base URL selection
//--------------------------------------------------------------------------------------------------

// Deployments on the office network talk to the backend over its LAN address; everything else
// goes through the public endpoint. Decided once at startup.

fn is_private_host(host: &str) -> bool {
    if host == "localhost" || host.ends_with(".local") {
        return true;
    }

    match host.parse::<Ipv4Addr>() {
        Ok(ip) => ip.is_loopback() || ip.is_private(),
        Err(_) => false,
    }
}

pub(crate) fn select_base_url(cfg: &Config) -> String {
    if let Some(lan_url) = &cfg.lan_api_url {
        let host = cfg.host.clone().or_else(|| std::env::var("HOSTNAME").ok());

        if cfg.prefer_lan || host.as_deref().is_some_and(is_private_host) {
            return lan_url.trim_end_matches('/').to_string();
        }
    }

    cfg.api_url.trim_end_matches('/').to_string()
}

//--------------------------------------------------------------------------------------------------
// API Gateway
//--------------------------------------------------------------------------------------------------

// The one chokepoint for outbound calls. Attaches the stored token when there is one; when there
// isn't, the request goes out unauthenticated and the backend does the rejecting.

pub struct ApiGateway {
    http: reqwest::Client,
    base_url: String,
    store: Arc<TokenStore>,
}

impl ApiGateway {
    pub fn new(cfg: &Config, store: Arc<TokenStore>) -> Self {
        let base_url = select_base_url(cfg);
        info!("API base URL: {}", base_url);

        ApiGateway {
            http: reqwest::Client::new(),
            base_url,
            store,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = self.store.read() {
            builder = builder.bearer_auth(token.as_str());
        }

        builder
    }

    // Failures are the caller's to present - no retries or translation here

    pub async fn get(&self, path: &str) -> Result<Response, reqwest::Error> {
        self.request(Method::GET, path).send().await
    }

    pub async fn post_json<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response, reqwest::Error> {
        self.request(Method::POST, path).json(body).send().await
    }
}

//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;
    use timeclock::{RawToken, StorageScope};

    fn cfg(prefer_lan: bool, host: Option<&str>) -> Config {
        Config {
            debug: false,
            api_url: "https://api.example.com/".to_string(),
            lan_api_url: Some("http://192.168.1.50:8000".to_string()),
            prefer_lan,
            host: host.map(|h| h.to_string()),
            data_dir: ".timeclock".to_string(),
        }
    }

    fn gateway(store: Arc<TokenStore>) -> ApiGateway {
        ApiGateway::new(&cfg(false, Some("kiosk.example.com")), store)
    }

    #[test]
    fn public_endpoint_for_public_hosts() {
        assert_eq!(
            select_base_url(&cfg(false, Some("kiosk.example.com"))),
            "https://api.example.com"
        );
    }

    #[test]
    fn lan_endpoint_for_private_hosts() {
        for host in ["localhost", "127.0.0.1", "10.0.0.12", "192.168.1.7", "172.20.3.4", "kiosk.local"] {
            assert_eq!(select_base_url(&cfg(false, Some(host))), "http://192.168.1.50:8000");
        }
    }

    #[test]
    fn prefer_lan_flag_overrides_host_detection() {
        assert_eq!(
            select_base_url(&cfg(true, Some("kiosk.example.com"))),
            "http://192.168.1.50:8000"
        );
    }

    #[test]
    fn no_lan_endpoint_configured_means_public() {
        let mut cfg = cfg(true, Some("localhost"));
        cfg.lan_api_url = None;
        assert_eq!(select_base_url(&cfg), "https://api.example.com");
    }

    #[test]
    fn requests_without_a_stored_token_go_out_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(TokenStore::new(dir.path()));
        let gateway = gateway(store);

        let request = gateway.request(Method::GET, "/attendance/today").build().unwrap();

        assert!(request.headers().get(AUTHORIZATION).is_none());
        assert_eq!(request.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn requests_with_a_stored_token_carry_a_bearer_header() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(TokenStore::new(dir.path()));
        store
            .save(RawToken::new("tok-123".to_string()), StorageScope::Ephemeral)
            .unwrap();
        let gateway = gateway(store);

        let request = gateway.request(Method::GET, "/attendance/today").build().unwrap();

        assert_eq!(request.headers().get(AUTHORIZATION).unwrap(), "Bearer tok-123");
    }
}

//--------------------------------------------------------------------------------------------------
