//! Virtual server API operations

use crate::error::Result;
use crate::vtm::{ResourceType, VtmClient};

use super::models::{VirtualServerBasic, VirtualServerRow};

impl VtmClient {
    /// Fetch every virtual server and project it into a row
    pub async fn get_virtual_server_rows(&self) -> Result<Vec<VirtualServerRow>> {
        self.fetch_projected::<VirtualServerBasic, _, _>(
            ResourceType::VirtualServers,
            VirtualServerRow::project,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VtmError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BASE: &str = "/api/tm/6.0/config/active";

    #[tokio::test]
    async fn test_get_virtual_server_rows() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("{}/virtual_servers", BASE)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "children": [{"name": "vs-web"}, {"name": "vs-api"}]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("{}/virtual_servers/vs-web", BASE)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "properties": {"basic": {
                    "enabled": true,
                    "listen_on_traffic_ips": ["tip-web"],
                    "pool": "web-pool",
                    "port": 80,
                    "protocol": "http"
                }}
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("{}/virtual_servers/vs-api", BASE)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "properties": {"basic": {
                    "enabled": false,
                    "listen_on_traffic_ips": ["tip-a", "tip-b"],
                    "pool": "api-pool",
                    "port": 8443
                }}
            })))
            .mount(&mock_server)
            .await;

        let client = VtmClient::test_client(&mock_server.uri());
        let rows = client.get_virtual_server_rows().await.unwrap();

        assert_eq!(
            rows,
            vec![
                VirtualServerRow {
                    name: "vs-web".to_string(),
                    port: 80,
                    enabled: true,
                    pool: "web-pool".to_string(),
                    vips: "tip-web".to_string(),
                },
                VirtualServerRow {
                    name: "vs-api".to_string(),
                    port: 8443,
                    enabled: false,
                    pool: "api-pool".to_string(),
                    vips: "tip-a,tip-b".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_basic_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("{}/virtual_servers", BASE)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "children": [{"name": "odd"}]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("{}/virtual_servers/odd", BASE)))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"properties": {}})),
            )
            .mount(&mock_server)
            .await;

        let client = VtmClient::test_client(&mock_server.uri());
        let err = client.get_virtual_server_rows().await.unwrap_err();

        assert!(matches!(err, VtmError::Parse(ref m) if m.contains("virtual_server 'odd'")));
    }
}
