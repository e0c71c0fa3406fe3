use std::sync::{
    atomic::{AtomicI64, AtomicUsize, Ordering},
    Mutex,
};

use dashmap::DashMap;
use http::StatusCode;
use reqwest::{Client, Response};

use super::{PortfolioDraft, PortfolioItem, StoreError};
use crate::config::StoreConfig;

/// Remote collection of portfolio items.
///
/// Implementations do one request per call: no retries, no caching.
#[allow(async_fn_in_trait)]
pub trait PortfolioApi {
    async fn fetch_items(&self) -> Result<Vec<PortfolioItem>, StoreError>;
    async fn create_item(&self, draft: &PortfolioDraft) -> Result<(), StoreError>;
    async fn delete_item(&self, id: i64) -> Result<(), StoreError>;
}

impl From<reqwest::Error> for StoreError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

/// HTTP store living behind a single endpoint URL.
#[derive(Debug, Clone)]
pub struct HttpApi {
    endpoint: String,
    client: Client,
}

impl HttpApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, Client::new())
    }

    pub fn with_client(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn item_url(&self, id: i64) -> String {
        let sep = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{sep}id={id}", self.endpoint)
    }
}

fn check_status(response: &Response) -> Result<(), StoreError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(StoreError::Rejected(status))
    }
}

impl PortfolioApi for HttpApi {
    async fn fetch_items(&self) -> Result<Vec<PortfolioItem>, StoreError> {
        let response = self.client.get(&self.endpoint).send().await?;
        check_status(&response)?;
        Ok(response.json().await?)
    }

    async fn create_item(&self, draft: &PortfolioDraft) -> Result<(), StoreError> {
        let response = self.client.post(&self.endpoint).json(draft).send().await?;
        check_status(&response)
    }

    async fn delete_item(&self, id: i64) -> Result<(), StoreError> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        check_status(&response)
    }
}

/// Store kept in process memory, for offline development and tests.
#[derive(Debug)]
pub struct MemoryApi {
    items: DashMap<i64, PortfolioItem>,
    next_id: AtomicI64,
    requests: AtomicUsize,
    fail_next: Mutex<Option<StoreError>>,
}

impl Default for MemoryApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Ids are handed out from `first_id` upwards.
    pub fn starting_at(first_id: i64) -> Self {
        Self {
            items: DashMap::new(),
            next_id: AtomicI64::new(first_id),
            requests: AtomicUsize::new(0),
            fail_next: Mutex::new(None),
        }
    }

    pub fn with_items(items: impl IntoIterator<Item = PortfolioItem>) -> Self {
        let store = Self::new();
        for item in items {
            store.next_id.fetch_max(item.id + 1, Ordering::SeqCst);
            store.items.insert(item.id, item);
        }
        store
    }

    /// Makes the next request fail with `err` before it touches the store.
    pub fn fail_next(&self, err: StoreError) {
        *self
            .fail_next
            .lock()
            .expect("should be able to lock failure slot") = Some(err);
    }

    /// Number of requests received so far, failed ones included.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn begin(&self) -> Result<(), StoreError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        match self
            .fail_next
            .lock()
            .expect("should be able to lock failure slot")
            .take()
        {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl PortfolioApi for MemoryApi {
    async fn fetch_items(&self) -> Result<Vec<PortfolioItem>, StoreError> {
        self.begin()?;
        let mut items = self
            .items
            .iter()
            .map(|entry| entry.value().clone())
            .collect::<Vec<_>>();
        // newest first
        items.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(items)
    }

    async fn create_item(&self, draft: &PortfolioDraft) -> Result<(), StoreError> {
        self.begin()?;
        if draft.title.is_empty() || draft.image_url.is_empty() {
            return Err(StoreError::Rejected(StatusCode::BAD_REQUEST));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let description = Some(draft.description.clone()).filter(|d| !d.is_empty());
        self.items.insert(
            id,
            PortfolioItem {
                id,
                title: draft.title.clone(),
                category: draft.category.into(),
                image_url: draft.image_url.clone(),
                description,
                created_at: Some(chrono::Utc::now().to_rfc3339()),
            },
        );
        Ok(())
    }

    async fn delete_item(&self, id: i64) -> Result<(), StoreError> {
        self.begin()?;
        self.items
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::Rejected(StatusCode::NOT_FOUND))
    }
}

/// The store the site talks to, picked from [`StoreConfig`].
#[derive(Debug)]
pub enum SiteApi {
    Http(HttpApi),
    Memory(MemoryApi),
}

impl SiteApi {
    pub fn from_config(config: &StoreConfig) -> Self {
        if config.uses_memory_store() {
            log::info!("using in-memory portfolio store");
            Self::Memory(MemoryApi::new())
        } else {
            Self::Http(HttpApi::new(config.endpoint.clone()))
        }
    }
}

impl PortfolioApi for SiteApi {
    async fn fetch_items(&self) -> Result<Vec<PortfolioItem>, StoreError> {
        match self {
            Self::Http(api) => api.fetch_items().await,
            Self::Memory(api) => api.fetch_items().await,
        }
    }

    async fn create_item(&self, draft: &PortfolioDraft) -> Result<(), StoreError> {
        match self {
            Self::Http(api) => api.create_item(draft).await,
            Self::Memory(api) => api.create_item(draft).await,
        }
    }

    async fn delete_item(&self, id: i64) -> Result<(), StoreError> {
        match self {
            Self::Http(api) => api.delete_item(id).await,
            Self::Memory(api) => api.delete_item(id).await,
        }
    }
}
