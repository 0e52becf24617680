use anyhow::Result;
use reqwest::Url;

pub const BINDINGS_PATH: &str = "v1/service_bindings";
pub const INSTANCES_PATH: &str = "v1/service_instances";

/// Make sure `url` ends with a slash so that joining keeps its last segment.
pub fn normalize_base_url(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(path.as_str());
    }
    url
}

pub fn gen_url(base_url: &Url, path: &str, id: Option<&str>) -> Result<Url> {
    let path = if let Some(id) = id {
        format!("{}/{}", path, id)
    } else {
        path.to_string()
    };
    Ok(base_url.join(path.as_str())?)
}

pub fn gen_list_url(base_url: &Url, path: &str, name: Option<&str>) -> Result<Url> {
    let mut url = gen_url(base_url, path, None)?;
    if let Some(name) = name {
        url.query_pairs_mut()
            .append_pair("fieldQuery", format!("name eq '{}'", name).as_str());
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        normalize_base_url(Url::parse("http://sm.example.com/api").unwrap())
    }

    #[test]
    fn base_url_keeps_last_segment() {
        let url = gen_url(&base(), INSTANCES_PATH, Some("1")).unwrap();
        assert_eq!(url.as_str(), "http://sm.example.com/api/v1/service_instances/1");
    }

    #[test]
    fn list_url_without_filter_has_no_query() {
        let url = gen_list_url(&base(), BINDINGS_PATH, None).unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn list_url_filters_by_name() {
        let url = gen_list_url(&base(), BINDINGS_PATH, Some("binding1")).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![("fieldQuery".to_string(), "name eq 'binding1'".to_string())]
        );
    }
}
