//! Traffic Manager HTTP client for REST API interactions

use futures::stream::{self, StreamExt, TryStreamExt};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::{api, defaults};
use crate::error::{Result, VtmError};
use crate::vtm::resources::ResourceType;
use crate::vtm::settings::Settings;
use crate::vtm::traits::{ChildrenResponse, DetailResponse};

/// Traffic Manager REST API client
pub struct VtmClient {
    client: Client,
    url: String,
    user: String,
    password: String,
    /// Maximum number of detail requests in flight
    concurrency: usize,
}

impl VtmClient {
    /// Create a new client from resolved settings
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .danger_accept_invalid_certs(settings.insecure)
            .build()?;

        Ok(Self {
            client,
            url: settings.url.clone(),
            user: settings.user.clone(),
            password: settings.password.clone(),
            concurrency: defaults::CONCURRENCY,
        })
    }

    /// Set the detail fetch concurrency (1 fetches strictly one at a time)
    pub fn set_concurrency(&mut self, concurrency: usize) {
        self.concurrency = concurrency.max(1);
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        format!("{}{}", self.url, api::BASE_PATH)
    }

    /// URL of a category listing
    pub(crate) fn resource_url(&self, resource: ResourceType) -> String {
        format!("{}/{}", self.base_url(), resource.key())
    }

    /// URL of a single instance
    pub(crate) fn instance_url(&self, resource: ResourceType, name: &str) -> String {
        format!(
            "{}/{}",
            self.resource_url(resource),
            urlencoding::encode(name)
        )
    }

    /// Create a GET request builder with basic auth
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .basic_auth(&self.user, Some(&self.password))
            .header("Accept", "application/json")
    }

    /// GET a URL and decode the JSON body
    ///
    /// Non-success status maps to `Api`, an undecodable body to `Parse`.
    pub(crate) async fn fetch_json<T>(&self, url: &str, error_context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!("Fetching {} from: {}", error_context, url);

        let response = self.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = match status.as_u16() {
                401 => format!("Authentication failed while fetching {}", error_context),
                403 => format!("Access denied to {}", error_context),
                404 => format!("{} not found", error_context),
                _ => format!("Failed to fetch {}", error_context),
            };
            return Err(VtmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| VtmError::Parse(format!("Failed to parse {}: {}", error_context, e)))
    }

    /// List categories the appliance advertises at the configuration root
    pub async fn list_api_resources(&self) -> Result<Vec<String>> {
        let url = format!("{}/", self.base_url());
        let resp: ChildrenResponse = self.fetch_json(&url, "resource catalog").await?;
        Ok(resp.into_names())
    }

    /// List instance names of a category, in API order
    pub async fn list_resource_names(&self, resource: ResourceType) -> Result<Vec<String>> {
        let url = self.resource_url(resource);
        let resp: ChildrenResponse = self.fetch_json(&url, resource.key()).await?;
        let names = resp.into_names();
        debug!("Found {} {}", names.len(), resource);
        Ok(names)
    }

    /// Raw configuration of one instance, unmodified
    pub async fn get_resource_detail(
        &self,
        resource: ResourceType,
        name: &str,
    ) -> Result<serde_json::Value> {
        let url = self.instance_url(resource, name);
        self.fetch_json(&url, &format!("{} '{}'", resource.singular(), name))
            .await
    }

    /// Decode the `properties.basic` group of one instance
    pub async fn fetch_basic<B>(&self, resource: ResourceType, name: &str) -> Result<B>
    where
        B: DeserializeOwned,
    {
        let url = self.instance_url(resource, name);
        let detail: DetailResponse<B> = self
            .fetch_json(&url, &format!("{} '{}'", resource.singular(), name))
            .await?;
        Ok(detail.into_basic())
    }

    /// List a category, fetch every instance and project it into a row
    ///
    /// Detail requests run concurrently up to `concurrency`; rows keep the
    /// listing order. The first failure aborts the whole listing.
    pub async fn fetch_projected<B, R, F>(&self, resource: ResourceType, project: F) -> Result<Vec<R>>
    where
        B: DeserializeOwned,
        F: Fn(String, B) -> Result<R>,
    {
        let names = self.list_resource_names(resource).await?;
        let project = &project;

        debug!(
            "Fetching {} {} details (max {} concurrent)",
            names.len(),
            resource,
            self.concurrency
        );

        stream::iter(names.into_iter().map(|name| async move {
            let basic = self.fetch_basic::<B>(resource, &name).await?;
            project(name, basic)
        }))
        .buffered(self.concurrency)
        .try_collect()
        .await
    }
}

#[cfg(test)]
impl VtmClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        let settings = Settings {
            url: base_url.trim_end_matches('/').to_string(),
            user: "admin".to_string(),
            password: "secret".to_string(),
            insecure: false,
        };
        Self::new(&settings).expect("test client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{basic_auth, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BASE: &str = "/api/tm/6.0/config/active";

    #[test]
    fn test_base_url() {
        let client = VtmClient::test_client("https://vtm.example.com:9070/");
        assert_eq!(
            client.base_url(),
            "https://vtm.example.com:9070/api/tm/6.0/config/active"
        );
    }

    #[test]
    fn test_instance_url_encodes_name() {
        let client = VtmClient::test_client("https://vtm");
        assert_eq!(
            client.instance_url(ResourceType::Pools, "my pool"),
            "https://vtm/api/tm/6.0/config/active/pools/my%20pool"
        );
    }

    #[test]
    fn test_concurrency_floor() {
        let mut client = VtmClient::test_client("https://vtm");
        client.set_concurrency(0);
        assert_eq!(client.concurrency(), 1);
    }

    #[tokio::test]
    async fn test_list_resource_names_preserves_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("{}/monitors", BASE)))
            .and(basic_auth("admin", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "children": [
                    {"name": "ping", "href": "/api/tm/6.0/config/active/monitors/ping"},
                    {"name": "http", "href": "/api/tm/6.0/config/active/monitors/http"},
                    {"name": "connect", "href": "/api/tm/6.0/config/active/monitors/connect"}
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = VtmClient::test_client(&mock_server.uri());
        let names = client
            .list_resource_names(ResourceType::Monitors)
            .await
            .unwrap();

        assert_eq!(names, vec!["ping", "http", "connect"]);
    }

    #[tokio::test]
    async fn test_list_resource_names_unauthorized() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("{}/rules", BASE)))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = VtmClient::test_client(&mock_server.uri());
        let err = client
            .list_resource_names(ResourceType::Rules)
            .await
            .unwrap_err();

        match err {
            VtmError::Api { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("rules"));
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_resource_names_malformed_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("{}/pools", BASE)))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = VtmClient::test_client(&mock_server.uri());
        let err = client
            .list_resource_names(ResourceType::Pools)
            .await
            .unwrap_err();

        assert!(matches!(err, VtmError::Parse(ref m) if m.contains("pools")));
    }

    #[tokio::test]
    async fn test_transport_error() {
        // Nothing listens on the discard port
        let client = VtmClient::test_client("http://127.0.0.1:9");
        let err = client
            .list_resource_names(ResourceType::Pools)
            .await
            .unwrap_err();
        assert!(matches!(err, VtmError::Http(_)));
    }

    #[tokio::test]
    async fn test_list_api_resources() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("{}/", BASE)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "children": [
                    {"name": "pools", "href": "/api/tm/6.0/config/active/pools/"},
                    {"name": "rules", "href": "/api/tm/6.0/config/active/rules/"}
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = VtmClient::test_client(&mock_server.uri());
        let names = client.list_api_resources().await.unwrap();
        assert_eq!(names, vec!["pools", "rules"]);
    }

    #[tokio::test]
    async fn test_get_resource_detail_is_pass_through() {
        let mock_server = MockServer::start().await;
        let body = serde_json::json!({
            "properties": {
                "basic": {"note": "", "type": "ping", "timeout": 3},
                "http": {"path": "/", "status_regex": "^[234][0-9][0-9]$"}
            }
        });

        Mock::given(method("GET"))
            .and(path(format!("{}/monitors/ping", BASE)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&mock_server)
            .await;

        let client = VtmClient::test_client(&mock_server.uri());
        let detail = client
            .get_resource_detail(ResourceType::Monitors, "ping")
            .await
            .unwrap();

        assert_eq!(detail, body);
    }

    #[tokio::test]
    async fn test_get_resource_detail_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("{}/pools/missing", BASE)))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = VtmClient::test_client(&mock_server.uri());
        let err = client
            .get_resource_detail(ResourceType::Pools, "missing")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("pool 'missing' not found"));
    }
}
