//! User repository - turns the users endpoint into typed records

use async_trait::async_trait;

use crate::models::User;
use crate::network::client::NetworkClient;
use crate::network::endpoint::Endpoint;
use crate::network::error::NetworkError;

/// Source of the user list. The network actor only sees this trait, so tests
/// can substitute an in-memory fetcher.
#[async_trait]
pub trait UserFetcher: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>, NetworkError>;
}

/// Fetches users over HTTP through an injected [`NetworkClient`]
pub struct UserRepository {
    client: NetworkClient,
}

impl UserRepository {
    pub fn new(client: NetworkClient) -> Self {
        UserRepository { client }
    }
}

#[async_trait]
impl UserFetcher for UserRepository {
    async fn fetch_users(&self) -> Result<Vec<User>, NetworkError> {
        let body = self.client.get(&Endpoint::users()).await?;
        decode_users(&body)
    }
}

/// Any decode failure collapses to `CannotParseData`; the serde error is only logged.
pub fn decode_users(body: &[u8]) -> Result<Vec<User>, NetworkError> {
    serde_json::from_slice::<Vec<User>>(body).map_err(|e| {
        tracing::debug!(error = %e, "Failed to decode users");
        NetworkError::CannotParseData
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::network::client::test_server::{http_response, serve_once};

    const TWO_USERS: &str = r#"[
        {"id":1,"name":"John Doe","username":"johndoe","email":"johndoe@example.com",
         "address":{"street":"123 Main St","suite":"Apt 456","city":"Springfield","zipcode":"12345",
                    "geo":{"lat":"37.7749","lng":"-122.4194"}},
         "phone":"123-456-7890","website":"www.johndoe.com",
         "company":{"name":"Acme Corp","catchPhrase":"We make things better","bs":"synergize"}},
        {"id":2,"name":"Jane Roe","username":"janeroe","email":"janeroe@example.com",
         "address":{"street":"1 Elm St","suite":"Suite 2","city":"Shelbyville","zipcode":"54321",
                    "geo":{"lat":"0","lng":"0"}},
         "phone":"555-0100","website":"janeroe.org",
         "company":{"name":"Globex","catchPhrase":"Forward","bs":"disrupt"}}
    ]"#;

    fn repository(base: &str) -> UserRepository {
        UserRepository::new(NetworkClient::new(base, Duration::from_secs(5)).unwrap())
    }

    #[tokio::test]
    async fn test_fetch_users_decodes_list() {
        let base = serve_once(http_response("200 OK", TWO_USERS)).await;
        let users = repository(&base).fetch_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "John Doe");
        assert_eq!(users[1].company.catch_phrase, "Forward");
    }

    #[tokio::test]
    async fn test_malformed_json_cannot_be_parsed() {
        let base = serve_once(http_response("200 OK", r#"{"not":"a list"}"#)).await;
        let err = repository(&base).fetch_users().await.unwrap_err();
        assert_eq!(err, NetworkError::CannotParseData);
    }

    #[tokio::test]
    async fn test_network_errors_pass_through() {
        let base = serve_once(http_response("404 Not Found", "{}")).await;
        let err = repository(&base).fetch_users().await.unwrap_err();
        assert_eq!(err, NetworkError::InvalidResponse);
    }

    #[test]
    fn test_decode_empty_list() {
        assert!(decode_users(b"[]").unwrap().is_empty());
    }
}
