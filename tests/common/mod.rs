//! Common test utilities for vk-album-backup E2E tests

use std::path::PathBuf;

use serde_json::{Value, json};
use wiremock::ResponseTemplate;

use vk_album_backup::config::{Config, DiskConfig, OutputConfig, VkConfig};

/// Album item with ascending size variants; the last one is the highest
/// resolution.
pub fn album_item(id: i64, likes: u64, sizes: &[(u64, u64, &str)]) -> Value {
    let sizes: Vec<Value> = sizes
        .iter()
        .map(|(height, width, url)| json!({"height": height, "width": width, "url": url}))
        .collect();
    json!({"id": id, "likes": {"count": likes}, "sizes": sizes})
}

/// Successful album listing envelope
pub fn album_body(items: &[Value]) -> Value {
    json!({"response": {"count": items.len(), "items": items}})
}

/// VK structured error envelope
#[allow(dead_code)]
pub fn vk_error_body(code: i64, message: &str) -> Value {
    json!({"error": {"error_code": code, "error_msg": message}})
}

/// Storage response for a created folder
pub fn folder_created() -> ResponseTemplate {
    ResponseTemplate::new(201).set_body_json(json!({"href": "https://disk/created"}))
}

/// Storage response for an accepted upload-by-URL request
pub fn upload_accepted() -> ResponseTemplate {
    ResponseTemplate::new(202).set_body_json(json!({"href": "https://disk/operation"}))
}

/// Storage rejection with the one error value the tool recognizes
pub fn disk_unauthorized() -> ResponseTemplate {
    ResponseTemplate::new(401).set_body_json(json!({
        "error": "UnauthorizedError",
        "message": "Unauthorized",
    }))
}

/// Configuration wired to the two mock servers, owner "123", storage token
/// "abc"
pub fn test_config(vk_uri: &str, disk_uri: &str, manifest_path: PathBuf) -> Config {
    Config {
        vk: VkConfig {
            access_token: "vk-token".to_string(),
            owner_id: "123".to_string(),
            api_base: vk_uri.to_string(),
            ..VkConfig::default()
        },
        disk: DiskConfig {
            access_token: "abc".to_string(),
            api_base: disk_uri.to_string(),
            ..DiskConfig::default()
        },
        output: OutputConfig { manifest_path },
        ..Config::default()
    }
}
