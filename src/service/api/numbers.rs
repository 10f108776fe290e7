use crate::error::AppError;

/// Fetches number trivia from a numbersapi.com compatible API.
#[derive(Clone)]
pub struct NumbersApiService {
    http_client: reqwest::Client,
    base_url: String,
}

impl NumbersApiService {
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    fn trivia_url(&self, number: Option<u64>) -> String {
        let number = number.map_or_else(|| "random".to_string(), |n| n.to_string());
        format!("{}/{}/trivia", self.base_url.trim_end_matches('/'), number)
    }

    /// Returns a trivia fact about `number`, or about a random number when `None`.
    pub async fn trivia(&self, number: Option<u64>) -> Result<String, AppError> {
        let fact = self
            .http_client
            .get(self.trivia_url(number))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(fact.trim().to_string())
    }
}
