use blog_client::config::Settings;
use blog_client::BlogClient;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Create a test client instance backed by a stub server and a throwaway
/// session directory. The `TempDir` must stay alive for the client's
/// lifetime or the session files vanish underneath it.
pub fn create_test_client(server: &MockServer) -> (TempDir, BlogClient) {
    let session_dir = TempDir::new().expect("Failed to create session dir");

    let settings = Settings {
        api_base_url: server.uri(),
        session_dir: session_dir.path().display().to_string(),
        http_timeout_secs: 5,
        ..Settings::default()
    };

    let client = BlogClient::new(settings).expect("Failed to create test client");
    (session_dir, client)
}

/// Stub a successful login for the given identity
pub async fn mount_login(server: &MockServer, token: &str, username: &str, role: &str) {
    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": token,
            "username": username,
            "role": role,
        })))
        .mount(server)
        .await;
}
