use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::ledger::ScoresView;
use crate::protocol::{GuessRequest, GuessResponse, TechnologyImageResponse};
use crate::session::api::{QuizApi, QuizError};

/// The parts of a Problem Details body the client reports.
#[derive(Debug, Deserialize)]
struct ProblemBody {
    detail: Option<String>,
}

/// [`QuizApi`] over the game server's JSON endpoints.
#[derive(Debug, Clone)]
pub struct HttpQuizApi {
    client: Client,
    base_url: Url,
}

impl HttpQuizApi {
    /// `base_url` is the server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> Result<Self, QuizError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, QuizError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| QuizError::Transport(format!("invalid server URL {base_url}: {e}")))?;
        Ok(Self { client, base_url })
    }

    /// Server URL with `segments` appended to the base path, each one
    /// percent-encoded as a single path segment.
    fn endpoint<I>(&self, segments: I) -> Result<Url, QuizError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                QuizError::Transport(format!("{} cannot be used as a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn decode<T: DeserializeOwned>(
        response: Response,
        index: Option<i64>,
    ) -> Result<T, QuizError> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| QuizError::Decode(e.to_string()));
        }

        if status == StatusCode::NOT_FOUND {
            if let Some(index) = index {
                return Err(QuizError::NotFound { index });
            }
        }

        let text = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ProblemBody>(&text)
            .ok()
            .and_then(|p| p.detail)
            .unwrap_or(text);
        Err(QuizError::Server {
            status: status.as_u16(),
            detail,
        })
    }
}

fn transport(e: reqwest::Error) -> QuizError {
    QuizError::Transport(e.to_string())
}

#[async_trait]
impl QuizApi for HttpQuizApi {
    async fn technology_count(&self) -> Result<i64, QuizError> {
        let response = self
            .client
            .get(self.endpoint(["api", "technologies"])?)
            .send()
            .await
            .map_err(transport)?;
        Self::decode(response, None).await
    }

    async fn technology_image(&self, index: i64) -> Result<String, QuizError> {
        let response = self
            .client
            .get(self.endpoint(["api", "technology", &index.to_string()])?)
            .send()
            .await
            .map_err(transport)?;
        let body: TechnologyImageResponse = Self::decode(response, Some(index)).await?;
        Ok(body.image)
    }

    async fn submit_guess(&self, request: &GuessRequest) -> Result<GuessResponse, QuizError> {
        let response = self
            .client
            .post(self.endpoint(["api", "guess"])?)
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        Self::decode(response, Some(request.index)).await
    }

    async fn scores(&self, player_name: &str) -> Result<ScoresView, QuizError> {
        let response = self
            .client
            .get(self.endpoint(["api", "scores", player_name])?)
            .send()
            .await
            .map_err(transport)?;
        Self::decode(response, None).await
    }
}
