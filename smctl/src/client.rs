use anyhow::{Context, Result};
use reqwest::{blocking::Client, Url};
use resources::{
    config::CliConfig,
    models::ApiResponse,
    objects::{ServiceBinding, ServiceBindings, ServiceInstance},
};
use serde::de::DeserializeOwned;

use crate::utils::{gen_list_url, gen_url, normalize_base_url, BINDINGS_PATH, INSTANCES_PATH};

/// Calls the service manager API.
pub trait SmClient {
    /// List bindings, filtered by name on the server side when `name` is set.
    /// The returned records may be summaries.
    fn list_bindings(&self, name: Option<&str>) -> Result<ServiceBindings>;
    fn get_binding_by_id(&self, id: &str) -> Result<ServiceBinding>;
    fn get_instance_by_id(&self, id: &str) -> Result<ServiceInstance>;
}

pub struct HttpClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpClient {
    pub fn new(config: &CliConfig) -> Result<HttpClient> {
        let base_url = Url::parse(config.url.as_str())
            .with_context(|| format!("Invalid service manager URL {}", config.url))?;
        Ok(HttpClient {
            client: Client::new(),
            base_url: normalize_base_url(base_url),
            token: config.token.to_owned(),
        })
    }

    fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!("GET {}", url);
        let mut req = self.client.get(url);
        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }
        let body = req.send()?.text()?;
        decode(body.as_str())
    }
}

/// Decode a reply body, turning an error body into an error.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    let res = serde_json::from_str::<ApiResponse<T>>(body)
        .with_context(|| format!("Unexpected reply from service manager: {}", body))?;
    Ok(res.into_result()?)
}

impl SmClient for HttpClient {
    fn list_bindings(&self, name: Option<&str>) -> Result<ServiceBindings> {
        let url = gen_list_url(&self.base_url, BINDINGS_PATH, name)?;
        self.get(url)
    }

    fn get_binding_by_id(&self, id: &str) -> Result<ServiceBinding> {
        let url = gen_url(&self.base_url, BINDINGS_PATH, Some(id))?;
        self.get(url)
    }

    fn get_instance_by_id(&self, id: &str) -> Result<ServiceInstance> {
        let url = gen_url(&self.base_url, INSTANCES_PATH, Some(id))?;
        self.get(url)
    }
}


#[cfg(test)]
mod tests {
    use resources::config::CliConfig;

    use super::*;

    #[test]
    fn decode_error_body() {
        let body = r#"{"error": "Unauthorized", "description": "invalid token"}"#;
        let err = decode::<ServiceInstance>(body).unwrap_err();
        assert_eq!(err.to_string(), "Unauthorized: invalid token");
    }

    #[test]
    fn decode_non_json_body() {
        let err = decode::<ServiceBindings>("<html>Bad Gateway</html>").unwrap_err();
        assert!(err.to_string().contains("Bad Gateway"));
    }

    #[test]
    fn decode_instance_body() {
        let instance: ServiceInstance = decode(r#"{"id": "1", "name": "instance-name1"}"#).unwrap();
        assert_eq!(instance, ServiceInstance::new("1", "instance-name1"));
    }

    #[test]
    fn invalid_url_is_rejected() {
        let config = CliConfig {
            url: "not a url".to_string(),
            ..CliConfig::default()
        };
        assert!(HttpClient::new(&config).is_err());
    }

    #[test]
    fn base_url_is_normalized() {
        let config = CliConfig {
            url: "http://sm.example.com/api".to_string(),
            ..CliConfig::default()
        };
        let client = HttpClient::new(&config).unwrap();
        assert_eq!(client.base_url.as_str(), "http://sm.example.com/api/");
    }
}
