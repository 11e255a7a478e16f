//! API endpoints - a path joined onto the configured base URL

use reqwest::Url;

use crate::constants::USERS_PATH;
use crate::network::error::NetworkError;

/// A single API path such as `users`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub path: String,
}

impl Endpoint {
    pub fn new(path: impl Into<String>) -> Self {
        Endpoint { path: path.into() }
    }

    /// The users collection
    pub fn users() -> Self {
        Endpoint::new(USERS_PATH)
    }

    /// Resolve against `base`. The base path is kept, so a base of
    /// `https://host/api` and path `users` gives `https://host/api/users`.
    /// An unjoinable path is reported as [`NetworkError::UrlError`].
    pub fn url(&self, base: &Url) -> Result<Url, NetworkError> {
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(self.path.trim_start_matches('/'))
            .map_err(|_| NetworkError::UrlError)
    }
}
