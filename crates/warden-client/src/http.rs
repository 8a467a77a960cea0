//! HTTP action client for the control service
//!
//! One method per server capability, each issuing exactly one request and
//! awaiting a single response. There is no retry and no request coalescing;
//! concurrent calls are independent. Callers own all state updates.

use std::collections::BTreeMap;
use std::path::Path;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::json;
use url::Url;

use warden_core::prelude::*;
use warden_core::ServerAction;

use crate::protocol::{self, UploadAck};

/// Generic connectivity message used when no structured error body exists
const CONNECTIVITY_ERROR: &str = "Could not reach the control service";

/// Characters escaped when a filename becomes a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Client for the remote control service's REST surface.
///
/// Cheap to clone; the underlying `reqwest::Client` pools connections.
#[derive(Debug, Clone)]
pub struct ControlClient {
    base: Url,
    http: reqwest::Client,
}

impl ControlClient {
    /// Create a client for the given base address (e.g. `http://host:3000`).
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| Error::address(format!("{base_url}: {e}")))?;
        let http = reqwest::Client::builder()
            .user_agent("server-warden")
            .build()
            .map_err(|e| Error::address(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { base, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| Error::address(format!("{path}: {e}")))
    }

    // ─────────────────────────────────────────────────────────────
    // Process control
    // ─────────────────────────────────────────────────────────────

    /// `POST /{start|stop}` — start or stop the game server process.
    pub async fn perform_server_action(&self, action: ServerAction) -> Result<()> {
        let url = self.endpoint(action.endpoint())?;
        let response = self.http.post(url).send().await.map_err(transport)?;
        ack(response).await
    }

    /// `POST /command` — run one console command on the game server.
    pub async fn send_command(&self, command: &str) -> Result<()> {
        let url = self.endpoint("command")?;
        let response = self
            .http
            .post(url)
            .json(&json!({ "command": command }))
            .send()
            .await
            .map_err(transport)?;
        ack(response).await
    }

    // ─────────────────────────────────────────────────────────────
    // File and mod repositories
    // ─────────────────────────────────────────────────────────────

    /// `GET /files` — ordered listing of generic server files.
    pub async fn fetch_file_list(&self) -> Result<Vec<String>> {
        self.fetch_listing("files").await
    }

    /// `GET /get-mods` — ordered listing of installed mods.
    pub async fn fetch_mod_list(&self) -> Result<Vec<String>> {
        self.fetch_listing("get-mods").await
    }

    async fn fetch_listing(&self, path: &str) -> Result<Vec<String>> {
        let url = self.endpoint(path)?;
        let response = self.http.get(url).send().await.map_err(transport)?;
        protocol::parse_listing(&success_body(response).await?)
    }

    /// `POST /upload` — upload one generic file as a multipart body.
    pub async fn upload_file(&self, local_path: &Path) -> Result<UploadAck> {
        self.upload(local_path, "upload").await
    }

    /// `POST /uploadmods` — upload one mod archive as a multipart body.
    pub async fn upload_mod(&self, local_path: &Path) -> Result<UploadAck> {
        self.upload(local_path, "uploadmods").await
    }

    async fn upload(&self, local_path: &Path, path: &str) -> Result<UploadAck> {
        let filename = local_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::validation("Selected path has no filename"))?
            .to_string();
        let bytes = tokio::fs::read(local_path).await?;

        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename);
        let form = reqwest::multipart::Form::new().part("file", part);

        let url = self.endpoint(path)?;
        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        protocol::parse_upload_ack(&success_body(response).await?)
    }

    /// `DELETE /delete/{filename}` — remove one generic file by name.
    pub async fn delete_file(&self, filename: &str) -> Result<()> {
        let encoded = utf8_percent_encode(filename, PATH_SEGMENT).to_string();
        let url = self.endpoint(&format!("delete/{encoded}"))?;
        let response = self.http.delete(url).send().await.map_err(transport)?;
        ack(response).await
    }

    /// `DELETE /delete-mod` — remove one mod, filename in the JSON body.
    pub async fn delete_mod(&self, filename: &str) -> Result<()> {
        let url = self.endpoint("delete-mod")?;
        let response = self
            .http
            .delete(url)
            .json(&json!({ "filename": filename }))
            .send()
            .await
            .map_err(transport)?;
        ack(response).await
    }

    // ─────────────────────────────────────────────────────────────
    // Server properties
    // ─────────────────────────────────────────────────────────────

    /// `GET /get-server-properties` — the full property map.
    pub async fn fetch_properties(&self) -> Result<BTreeMap<String, String>> {
        let url = self.endpoint("get-server-properties")?;
        let response = self.http.get(url).send().await.map_err(transport)?;
        protocol::parse_properties(&success_body(response).await?)
    }

    /// `POST /save-server-properties` — persist the full property map.
    ///
    /// The map is the unit of persistence; there is no partial save.
    pub async fn save_properties(&self, properties: &BTreeMap<String, String>) -> Result<()> {
        let url = self.endpoint("save-server-properties")?;
        let response = self
            .http
            .post(url)
            .json(properties)
            .send()
            .await
            .map_err(transport)?;
        ack(response).await
    }
}

/// Map a transport-level failure to the generic connectivity error.
fn transport(err: reqwest::Error) -> Error {
    debug!("control service transport failure: {err}");
    Error::remote(CONNECTIVITY_ERROR)
}

/// Consume a response expected to be a bare acknowledgment.
async fn ack(response: reqwest::Response) -> Result<()> {
    success_body(response).await.map(|_| ())
}

/// Return the response body on success, or the service's error message
/// (structured `{error}` field when present, generic fallback otherwise).
async fn success_body(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await.map_err(transport)?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(Error::remote(protocol::error_message(
            &body,
            CONNECTIVITY_ERROR,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_rejects_invalid_base_url() {
        assert!(ControlClient::new("not a url").is_err());
        assert!(ControlClient::new("http://localhost:3000").is_ok());
    }

    #[test]
    fn test_endpoint_joins_against_base() {
        let client = ControlClient::new("http://localhost:3000/").unwrap();
        let url = client.endpoint("get-mods").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/get-mods");
    }

    #[test]
    fn test_delete_path_segment_is_encoded() {
        let encoded = utf8_percent_encode("my mod v2.jar", PATH_SEGMENT).to_string();
        assert_eq!(encoded, "my%20mod%20v2.jar");

        let encoded = utf8_percent_encode("a/b.jar", PATH_SEGMENT).to_string();
        assert!(!encoded.contains('/'));
    }
}
