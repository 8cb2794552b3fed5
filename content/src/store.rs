use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(StatusCode),
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the documentation content store. Fragments are addressed by
/// fully-qualified identifier: `GET <base>/<identifier>.html`.
#[derive(Clone, Debug)]
pub struct ContentStore {
    client: reqwest::Client,
    base_url: String,
}

impl ContentStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// The resource a fragment for `identifier` is expected to live at.
    /// Also quoted in fallback fragments so an author knows what to create.
    pub fn url_for(&self, identifier: &str) -> String {
        format!("{}/{identifier}.html", self.base_url)
    }

    /// Any non-2xx status is treated identically to a transport failure by
    /// callers: the fragment is simply not available from the store.
    pub async fn fetch(&self, identifier: &str) -> Result<String, FetchError> {
        let response = self.client.get(self.url_for(identifier)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn url_joins_base_and_identifier() {
        let store = ContentStore::new("http://127.0.0.1:8080/docs");
        assert_eq!(
            store.url_for("camera/cren_camera.h"),
            "http://127.0.0.1:8080/docs/camera/cren_camera.h.html"
        );
    }

    #[test]
    fn trailing_slash_in_base_is_trimmed() {
        let store = ContentStore::new("http://127.0.0.1:8080/docs/");
        assert_eq!(
            store.url_for("buffer/BufferQuad"),
            "http://127.0.0.1:8080/docs/buffer/BufferQuad.html"
        );
    }

    #[test]
    fn status_error_carries_the_code() {
        let err = FetchError::Status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "HTTP 404 Not Found");
    }
}
