//! Async boundary to the portfolio REST backend

use crate::error::Error;
use crate::fetch::Fetch;
use crate::resources::Resource;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::marker::PhantomData;
use std::time::Duration;

/// Remote persistence operations for one resource collection.
///
/// Every mutation echoes the stored record, so callers can patch a local
/// cache without a follow-up fetch.
#[async_trait]
pub trait RecordGateway<R: Resource>: Send + Sync {
    /// Fetch the full collection
    async fn list(&self) -> Result<Vec<R>, Error>;

    /// Fetch one record
    async fn retrieve(&self, id: &str) -> Result<R, Error>;

    /// Store a new record and return it as stored
    async fn create(&self, draft: &R::Draft) -> Result<R, Error>;

    /// Rewrite an existing record and return it as stored
    async fn update(&self, id: &str, draft: &R::Draft) -> Result<R, Error>;

    /// Delete a record
    async fn delete(&self, id: &str) -> Result<(), Error>;
}

/// REST implementation of [`RecordGateway`] over `/api/{endpoint}`
pub struct RestCollection<R: Resource> {
    url: String,
    http_client: Client,
    timeout: Option<Duration>,
    _resource: PhantomData<R>,
}

impl<R: Resource> RestCollection<R> {
    /// Create a gateway for one resource collection
    pub fn new(url: &str, http_client: Client, timeout: Option<Duration>) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            http_client,
            timeout,
            _resource: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/{}", self.url, R::ENDPOINT)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/api/{}/{}", self.url, R::ENDPOINT, id)
    }
}

#[async_trait]
impl<R: Resource> RecordGateway<R> for RestCollection<R> {
    async fn list(&self) -> Result<Vec<R>, Error> {
        let url = self.collection_url();
        debug!("GET {}", url);
        Fetch::get(&self.http_client, &url)
            .timeout(self.timeout)
            .execute()
            .await
    }

    async fn retrieve(&self, id: &str) -> Result<R, Error> {
        let url = self.record_url(id);
        debug!("GET {}", url);
        Fetch::get(&self.http_client, &url)
            .timeout(self.timeout)
            .execute()
            .await
    }

    async fn create(&self, draft: &R::Draft) -> Result<R, Error> {
        let url = self.collection_url();
        debug!("POST {}", url);
        Fetch::post(&self.http_client, &url)
            .timeout(self.timeout)
            .json(draft)?
            .execute()
            .await
    }

    async fn update(&self, id: &str, draft: &R::Draft) -> Result<R, Error> {
        let url = self.record_url(id);
        debug!("PUT {}", url);
        Fetch::put(&self.http_client, &url)
            .timeout(self.timeout)
            .json(draft)?
            .execute()
            .await
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        let url = self.record_url(id);
        debug!("DELETE {}", url);
        Fetch::delete(&self.http_client, &url)
            .timeout(self.timeout)
            .execute_empty()
            .await
    }
}
