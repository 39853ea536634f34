// Hand-crafted async HTTP client for the Auvik REST API.
//
// Base path: https://auvikapi.{region}.my.auvik.com/v1/
// Auth: HTTP Basic (account username + API key)
//
// Every multi-page fetch walks the `links.next` chain sequentially; the
// client never has two requests in flight and never retries.

use std::collections::HashSet;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{Document, SingleDocument};

/// Async client for the Auvik REST API.
///
/// Holds the account credentials and stamps Basic auth plus the JSON:API
/// `Accept` header on every request.
pub struct AuvikClient {
    http: reqwest::Client,
    base_url: Url,
    username: String,
    api_key: SecretString,
}

impl AuvikClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from credentials and transport settings.
    pub fn new(
        base_url: &str,
        username: impl Into<String>,
        api_key: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.api+json"));
        let http = transport.build_client(headers)?;

        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
            username: username.into(),
            api_key,
        })
    }

    /// Wrap an existing `reqwest::Client` (the caller controls transport).
    pub fn from_reqwest(
        base_url: &str,
        username: impl Into<String>,
        api_key: SecretString,
        http: reqwest::Client,
    ) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
            username: username.into(),
            api_key,
        })
    }

    /// Parse the configured base URL and guarantee a trailing slash so
    /// relative joins append instead of replacing the last segment.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path onto the base URL and append query params.
    pub(crate) fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Result<Url, Error> {
        let mut url = self.base_url.join(path)?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    // ── Requests ─────────────────────────────────────────────────────

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, Error> {
        debug!("GET {url}");

        let resp = self
            .http
            .get(url.clone())
            .basic_auth(&self.username, Some(self.api_key.expose_secret()))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| Error::Fetch {
                url: url.to_string(),
                source,
            })?;

        let body = resp.text().await.map_err(|source| Error::Fetch {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|source| Error::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Fetch every page starting at `first`, concatenating `data` in page
    /// order.
    ///
    /// A visited set is seeded with the first URL and extended with every
    /// followed link; a `next` URL that was already visited fails with
    /// `CircularPagination` before any repeat request is issued.
    pub async fn get_paginated<T: DeserializeOwned>(&self, first: Url) -> Result<Vec<T>, Error> {
        let mut all = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        visited.insert(first.to_string());

        let mut url = first;
        loop {
            let page: Document<T> = self.get_json(&url).await?;
            all.extend(page.data);

            let Some(next) = page.links.next else {
                break;
            };
            if visited.contains(&next) {
                return Err(Error::CircularPagination { url: next });
            }
            url = Url::parse(&next)?;
            visited.insert(next);
        }

        Ok(all)
    }

    /// Fetch a single-resource endpoint and unwrap its `data` envelope.
    pub async fn get_one<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        let doc: SingleDocument<T> = self.get_json(&url).await?;
        Ok(doc.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> Result<AuvikClient, Error> {
        AuvikClient::from_reqwest(
            base,
            "ops@example.com",
            SecretString::from("key"),
            reqwest::Client::new(),
        )
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let c = client("https://auvikapi.us1.my.auvik.com/v1").unwrap();
        let url = c.endpoint("tenants/detail", &[]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://auvikapi.us1.my.auvik.com/v1/tenants/detail"
        );
    }

    #[test]
    fn endpoint_appends_query_params_in_order() {
        let c = client("https://auvikapi.us1.my.auvik.com/v1/").unwrap();
        let url = c
            .endpoint(
                "alert/history/info",
                &[
                    ("tenants", "t-1".to_owned()),
                    ("filter[status]", "created".to_owned()),
                ],
            )
            .unwrap();
        assert!(url.as_str().contains("tenants=t-1"));
        assert!(url.query().unwrap().contains("filter%5Bstatus%5D=created"));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(client("not a url"), Err(Error::InvalidUrl(_))));
    }
}
