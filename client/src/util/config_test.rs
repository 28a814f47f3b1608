use super::*;

#[test]
fn new_appends_trailing_slash() {
    assert_eq!(ClientConfig::new("http://localhost:3001").asset_base_url, "http://localhost:3001/");
    assert_eq!(ClientConfig::new("/static/").asset_base_url, "/static/");
}

#[test]
fn image_url_joins_without_double_slash() {
    let config = ClientConfig::new("http://localhost:3001/");
    assert_eq!(config.image_url("images/react-lake.jpg"), "http://localhost:3001/images/react-lake.jpg");
    assert_eq!(config.image_url("/images/react-lake.jpg"), "http://localhost:3001/images/react-lake.jpg");
}

#[test]
fn default_base_resolves_root_relative_paths() {
    let config = ClientConfig::new(DEFAULT_ASSET_BASE_URL);
    assert_eq!(config.image_url("images/chrome-river.jpg"), "/images/chrome-river.jpg");
}
