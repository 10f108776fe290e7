use serde::Deserialize;

use crate::error::AppError;

#[derive(Deserialize)]
struct RandomImageResponse {
    message: String,
    status: String,
}

/// Fetches random dog pictures from a dog.ceo compatible API.
#[derive(Clone)]
pub struct DogApiService {
    http_client: reqwest::Client,
    base_url: String,
}

impl DogApiService {
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    fn random_image_url(&self) -> String {
        format!("{}/breeds/image/random", self.base_url.trim_end_matches('/'))
    }

    /// Returns the URL of a random dog picture.
    pub async fn random_image(&self) -> Result<String, AppError> {
        let response: RandomImageResponse = self
            .http_client
            .get(self.random_image_url())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if response.status != "success" {
            return Err(AppError::InternalError(format!(
                "Dog API returned status {}",
                response.status
            )));
        }

        Ok(response.message)
    }
}
