/// HTTP client for the video processing backend
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::{CleanupResponse, ErrorBody, ProcessRequest, ProcessResponse, ResultItem};

const PROCESS_FAILED: &str = "Erro ao processar vídeos";
const CLEANUP_FAILED: &str = "Erro ao limpar arquivos";

#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    config: ClientConfig,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(origin: &str, config: ClientConfig) -> Result<ApiClient, ClientError> {
        Ok(ApiClient {
            base: Url::parse(origin)?,
            config,
            http: reqwest::Client::new(),
        })
    }

    /// Client rooted at the page's own origin
    pub fn from_window(config: ClientConfig) -> Result<ApiClient, ClientError> {
        let origin = web_sys::window()
            .ok_or(ClientError::NoWindow)?
            .location()
            .origin()
            .map_err(|_| ClientError::NoWindow)?;

        ApiClient::new(&origin, config)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base.join(path)?)
    }

    /// Submit the URLs in one request and return the per-URL results in order
    pub async fn process_videos(&self, urls: Vec<String>) -> Result<Vec<ResultItem>, ClientError> {
        let endpoint = self.endpoint(&self.config.process_endpoint)?;
        log::info!("Submitting {} url(s) to {}", urls.len(), endpoint);

        let response = self
            .http
            .post(endpoint)
            .json(&ProcessRequest { urls })
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        decode_process_response(status, &body)
    }

    /// Where the browser navigates to fetch a processed video
    pub fn download_url(&self, video_id: &str) -> Result<Url, ClientError> {
        let mut url = self.endpoint(&self.config.download_prefix)?;
        url.path_segments_mut()
            .map_err(|_| ClientError::Backend(format!("cannot build download url for {}", video_id)))?
            .pop_if_empty()
            .push(video_id);
        Ok(url)
    }

    /// Ask the backend to delete its downloaded files
    pub async fn cleanup(&self) -> Result<String, ClientError> {
        let endpoint = self.endpoint(&self.config.cleanup_endpoint)?;
        log::info!("Requesting cleanup at {}", endpoint);

        let response = self.http.post(endpoint).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        decode_cleanup_response(status, &body)
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Backend `{error}` message when present, otherwise `fallback`
fn backend_error(body: &str, fallback: &str) -> ClientError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) if !err.error.is_empty() => ClientError::Backend(err.error),
        _ => ClientError::Backend(fallback.to_string()),
    }
}

pub fn decode_process_response(status: u16, body: &str) -> Result<Vec<ResultItem>, ClientError> {
    if !is_success(status) {
        log::error!("process request failed with status {}", status);
        return Err(backend_error(body, PROCESS_FAILED));
    }

    let response: ProcessResponse = serde_json::from_str(body)?;
    Ok(response.results)
}

pub fn decode_cleanup_response(status: u16, body: &str) -> Result<String, ClientError> {
    if !is_success(status) {
        log::error!("cleanup request failed with status {}", status);
        return Err(backend_error(body, CLEANUP_FAILED));
    }

    let response: CleanupResponse = serde_json::from_str(body)?;
    match (response.success, response.message, response.error) {
        (true, Some(message), _) => Ok(message),
        (true, None, _) => Ok("Arquivos removidos com sucesso".to_string()),
        (false, _, Some(error)) => Err(ClientError::Backend(error)),
        (false, _, None) => Err(ClientError::Backend(CLEANUP_FAILED.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:5000", ClientConfig::default()).unwrap()
    }

    #[test]
    fn test_endpoints_resolve_against_origin() {
        let api = client();
        assert_eq!(
            api.endpoint("/process_videos").unwrap().as_str(),
            "http://localhost:5000/process_videos"
        );
    }

    #[test]
    fn test_download_url() {
        let api = client();
        assert_eq!(
            api.download_url("dQw4w9WgXcQ").unwrap().as_str(),
            "http://localhost:5000/download/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_download_url_encodes_id() {
        let api = client();
        assert_eq!(
            api.download_url("a b/c").unwrap().as_str(),
            "http://localhost:5000/download/a%20b%2Fc"
        );
    }

    #[test]
    fn test_invalid_origin() {
        assert!(matches!(
            ApiClient::new("not an origin", ClientConfig::default()),
            Err(ClientError::Url(_))
        ));
    }

    #[test]
    fn test_decode_process_ok() {
        let body = r#"{"results": [{"success": false, "error": "boom", "url": "https://youtu.be/x"}]}"#;
        let results = decode_process_response(200, body).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_decode_process_backend_error_message() {
        let body = r#"{"error": "Nenhum URL fornecido"}"#;
        let err = decode_process_response(400, body).unwrap_err();
        assert_eq!(err.user_message(), "Nenhum URL fornecido");
    }

    #[test]
    fn test_decode_process_generic_error() {
        let err = decode_process_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.user_message(), "Erro ao processar vídeos");
    }

    #[test]
    fn test_decode_process_malformed_body() {
        let err = decode_process_response(200, "not json").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_decode_cleanup() {
        let body = r#"{"success": true, "message": "3 arquivos removidos com sucesso"}"#;
        assert_eq!(decode_cleanup_response(200, body).unwrap(), "3 arquivos removidos com sucesso");

        let err = decode_cleanup_response(500, r#"{"error": "disk"}"#).unwrap_err();
        assert_eq!(err.user_message(), "disk");
    }

    #[test]
    fn test_decode_cleanup_default_message() {
        assert_eq!(
            decode_cleanup_response(200, r#"{"success": true}"#).unwrap(),
            "Arquivos removidos com sucesso"
        );
    }

    #[test]
    fn test_decode_cleanup_reported_failure() {
        let err = decode_cleanup_response(200, r#"{"success": false, "error": "sem permissão"}"#).unwrap_err();
        assert_eq!(err.user_message(), "sem permissão");
    }

    #[test]
    fn test_decode_cleanup_failure_without_message() {
        let err = decode_cleanup_response(200, r#"{"success": false}"#).unwrap_err();
        assert_eq!(err.user_message(), "Erro ao limpar arquivos");
    }

    #[test]
    fn test_decode_cleanup_generic_error_status() {
        let err = decode_cleanup_response(503, "Service Unavailable").unwrap_err();
        assert_eq!(err.user_message(), "Erro ao limpar arquivos");
    }

    #[test]
    fn test_decode_cleanup_malformed_body() {
        let err = decode_cleanup_response(200, "<html></html>").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
