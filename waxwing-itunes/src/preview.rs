use crate::{Client, ClientResult};

/// Binary data endpoints.
impl Client {
    /// Download the preview clip at the given URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn fetch_preview(&self, preview_url: &str) -> ClientResult<Vec<u8>> {
        Ok(self
            .client
            .get(preview_url)
            .send()
            .await?
            .bytes()
            .await?
            .into())
    }
}
