//! HTTP client for the Planka API.

use serde::de::DeserializeOwned;

use crate::types::{
    Board, BoardDetail, Card, CardDetail, ItemWrapper, ItemsWrapper, Project, ProjectDetail,
};
use crate::Error;

/// Client for interacting with a Planka server.
///
/// Construct it with the server's base URL, then call [`login`] to obtain a
/// session token. The token is kept on the client and sent as a bearer
/// credential on every subsequent call.
///
/// [`login`]: PlankaClient::login
#[derive(Debug, Clone)]
pub struct PlankaClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    email_or_username: &'a str,
    password: &'a str,
}

impl PlankaClient {
    /// Create a new client for the Planka server at `base_url`.
    ///
    /// Trailing slashes on the URL are trimmed so request paths never
    /// contain a double slash.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder().build().map_err(Error::Http)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Returns the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange credentials for a session token.
    ///
    /// Sends `POST /api/access-tokens`. On HTTP 200 the returned token is
    /// stored on the client and also returned to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`] with the HTTP status for any non-200
    /// response. No retry is attempted.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<String, Error> {
        let url = format!("{}/api/access-tokens", self.base_url);
        let body = LoginRequest {
            email_or_username: username,
            password,
        };

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();

        if status != reqwest::StatusCode::OK {
            return Err(Error::Auth {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let wrapper: ItemWrapper<String> = serde_json::from_str(&body).map_err(Error::Parse)?;

        self.token = Some(wrapper.item.clone());
        Ok(wrapper.item)
    }

    /// List all projects visible to the logged-in user.
    ///
    /// Returns the projects in the order the server sent them.
    pub async fn list_projects(&self) -> Result<Vec<Project>, Error> {
        let wrapper: ItemsWrapper<Project> = self.get("/api/projects").await?;
        Ok(wrapper.items)
    }

    /// List the boards of a project.
    ///
    /// Boards are embedded in the project detail response; a project with no
    /// boards yields an empty list.
    pub async fn list_boards(&self, project_id: &str) -> Result<Vec<Board>, Error> {
        let detail: ProjectDetail = self.get(&format!("/api/projects/{project_id}")).await?;
        Ok(detail.included.boards)
    }

    /// List the cards on a board.
    ///
    /// Cards are embedded in the board detail response; a board with no
    /// cards yields an empty list.
    pub async fn list_cards(&self, board_id: &str) -> Result<Vec<Card>, Error> {
        let detail: BoardDetail = self.get(&format!("/api/boards/{board_id}")).await?;
        Ok(detail.included.cards)
    }

    /// Fetch a card with its embedded tasks and attachments.
    pub async fn get_card(&self, card_id: &str) -> Result<CardDetail, Error> {
        self.get(&format!("/api/cards/{card_id}")).await
    }

    /// Fetch just the description of a card.
    ///
    /// Returns `None` when the card has no description set.
    pub async fn get_card_description(&self, card_id: &str) -> Result<Option<String>, Error> {
        let detail = self.get_card(card_id).await?;
        Ok(detail.item.description)
    }

    /// Make an authenticated GET request and deserialize the response.
    ///
    /// The `path` is the API endpoint path without the base URL
    /// (e.g. "/api/projects").
    async fn get<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let token = self.token.as_deref().ok_or(Error::NotLoggedIn)?;
        let url = format!("{}{}", self.base_url, path);

        let response = self.http.get(&url).bearer_auth(token).send().await?;

        self.handle_response(response).await
    }

    /// Handle an API response, converting errors as appropriate.
    async fn handle_response<T>(&self, response: reqwest::Response) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(Error::Parse)
        } else {
            Err(self.error_from_response(response).await)
        }
    }

    /// Convert an error response to an Error.
    async fn error_from_response(&self, response: reqwest::Response) -> Error {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status == reqwest::StatusCode::NOT_FOUND {
            let message =
                extract_error_message(&body).unwrap_or_else(|| "resource not found".to_string());
            Error::NotFound(message)
        } else {
            let message = extract_error_message(&body).unwrap_or_else(|| {
                format!(
                    "HTTP {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("")
                )
            });
            Error::Api {
                status: status.as_u16(),
                message,
            }
        }
    }
}

/// Extract the error message from a Planka API error response.
///
/// Planka error bodies carry a top-level `message` field alongside a code.
fn extract_error_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorResponse {
        message: String,
    }

    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|r| r.message)
}
