pub mod articles;
pub mod comments;
pub mod users;

pub use articles::ArticlesClient;
pub use comments::CommentsClient;
pub use users::UsersClient;

use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};

/// Decode a JSON body after checking the status. Non-success responses
/// surface the status and whatever body the backend sent.
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::unexpected_status(status.as_u16(), body));
    }
    Ok(response.json().await?)
}

/// Status check for endpoints that return nothing on success.
pub(crate) async fn ensure_success(response: Response) -> ClientResult<()> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::unexpected_status(status.as_u16(), body));
    }
    Ok(())
}
