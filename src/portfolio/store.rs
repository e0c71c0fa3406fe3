use std::sync::{
    atomic::{AtomicU64, Ordering},
    Mutex,
};

use log::{debug, error};

use super::{filter_by_category, Category, PortfolioApi, PortfolioDraft, PortfolioItem, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Delete,
}

/// Request number handed out by [`RequestSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub op: Operation,
    pub seq: u64,
}

/// Monotonic request counters, one per operation kind.
#[derive(Debug, Default)]
pub struct RequestSequence {
    list: AtomicU64,
    create: AtomicU64,
    delete: AtomicU64,
}

impl RequestSequence {
    fn counter(&self, op: Operation) -> &AtomicU64 {
        match op {
            Operation::List => &self.list,
            Operation::Create => &self.create,
            Operation::Delete => &self.delete,
        }
    }

    pub fn issue(&self, op: Operation) -> Ticket {
        let seq = self.counter(op).fetch_add(1, Ordering::SeqCst) + 1;
        Ticket { op, seq }
    }

    /// True while no newer ticket of the same kind has been issued.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.counter(ticket.op).load(Ordering::SeqCst) == ticket.seq
    }
}

#[derive(Debug, Default)]
struct Mirror {
    items: Vec<PortfolioItem>,
    loading: bool,
}

/// Local mirror of the remote portfolio, kept in sync through `A`.
///
/// The mirror is only replaced by the response to the most recently issued
/// list request; anything older that resolves later is dropped.
#[derive(Debug)]
pub struct PortfolioStore<A> {
    api: A,
    mirror: Mutex<Mirror>,
    sequence: RequestSequence,
}

impl<A: PortfolioApi> PortfolioStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            mirror: Mutex::new(Mirror::default()),
            sequence: RequestSequence::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn items(&self) -> Vec<PortfolioItem> {
        self.lock().items.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn filtered(&self, category: Category) -> Vec<PortfolioItem> {
        filter_by_category(&self.lock().items, category)
    }

    /// Refetches the whole collection and returns the mirror afterwards.
    ///
    /// Failures are logged and leave the previous mirror in place.
    pub async fn list(&self) -> Vec<PortfolioItem> {
        let claim = self.claim_list();
        let result = self.api.fetch_items().await;
        claim.settle(result);
        self.items()
    }

    pub async fn create(&self, draft: &PortfolioDraft) -> Result<(), StoreError> {
        draft.validate()?;
        let ticket = self.sequence.issue(Operation::Create);
        debug!("creating portfolio item {:?} (request #{})", draft.title, ticket.seq);
        if let Err(e) = self.api.create_item(draft).await {
            error!("failed to create portfolio item (request #{}): {e}", ticket.seq);
            return Err(e);
        }
        self.list().await;
        Ok(())
    }

    /// Deletes item `id`. Callers are expected to have confirmed the deletion.
    pub async fn remove(&self, id: i64) -> Result<(), StoreError> {
        let ticket = self.sequence.issue(Operation::Delete);
        debug!("deleting portfolio item {id} (request #{})", ticket.seq);
        if let Err(e) = self.api.delete_item(id).await {
            error!("failed to delete portfolio item {id} (request #{}): {e}", ticket.seq);
            return Err(e);
        }
        self.list().await;
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Mirror> {
        self.mirror
            .lock()
            .expect("should be able to lock portfolio mirror")
    }

    fn claim_list(&self) -> ListClaim<'_> {
        let mut mirror = self.lock();
        let ticket = self.sequence.issue(Operation::List);
        mirror.loading = true;
        ListClaim {
            mirror: &self.mirror,
            sequence: &self.sequence,
            ticket,
            settled: false,
        }
    }
}

/// An outstanding list request. Dropping it unsettled (the future was
/// cancelled) gives up the loading flag if it was still the latest request.
struct ListClaim<'a> {
    mirror: &'a Mutex<Mirror>,
    sequence: &'a RequestSequence,
    ticket: Ticket,
    settled: bool,
}

impl ListClaim<'_> {
    fn settle(mut self, result: Result<Vec<PortfolioItem>, StoreError>) {
        self.settled = true;
        let mut mirror = self
            .mirror
            .lock()
            .expect("should be able to lock portfolio mirror");
        if !self.sequence.is_current(self.ticket) {
            debug!("discarding stale portfolio list response #{}", self.ticket.seq);
            return;
        }
        mirror.loading = false;
        match result {
            Ok(items) => mirror.items = items,
            Err(e) => error!("failed to load portfolio: {e}"),
        }
    }
}

impl Drop for ListClaim<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        if let Ok(mut mirror) = self.mirror.lock() {
            if self.sequence.is_current(self.ticket) {
                mirror.loading = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::{ItemCategory, MemoryApi};
    use http::StatusCode;
    use std::{
        cell::RefCell,
        collections::VecDeque,
        future::{poll_fn, Future},
        pin::pin,
        task::Poll,
    };
    use tokio::sync::oneshot;

    fn item(id: i64, category: Category) -> PortfolioItem {
        PortfolioItem {
            id,
            title: format!("Item {id}"),
            category: category.into(),
            image_url: format!("https://cdn.example.com/{id}.jpg"),
            description: None,
            created_at: None,
        }
    }

    fn poster() -> PortfolioDraft {
        PortfolioDraft {
            title: "Poster A".to_string(),
            category: Category::Geometry,
            description: String::new(),
            image_url: "data:image/png;base64,AAAA".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_replaces_mirror() {
        let store = PortfolioStore::new(MemoryApi::with_items([
            item(1, Category::Minimalism),
            item(2, Category::Geometry),
        ]));
        assert!(store.items().is_empty());

        let listed = store.list().await;
        assert_eq!(listed.len(), 2);
        assert_eq!(store.items(), listed);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_failed_list_keeps_mirror() {
        let store = PortfolioStore::new(MemoryApi::with_items([item(1, Category::Typography)]));
        store.list().await;
        let before = serde_json::to_vec(&store.items()).unwrap();

        store
            .api()
            .fail_next(StoreError::Transport("network unreachable".to_string()));
        let after_list = store.list().await;

        assert_eq!(serde_json::to_vec(&after_list).unwrap(), before);
        assert_eq!(serde_json::to_vec(&store.items()).unwrap(), before);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_create_without_title_or_image_never_hits_network() {
        let store = PortfolioStore::new(MemoryApi::new());

        let mut no_title = poster();
        no_title.title.clear();
        let mut no_image = poster();
        no_image.image_url.clear();

        for draft in [no_title, no_image, PortfolioDraft::default()] {
            let err = store.create(&draft).await.unwrap_err();
            assert!(matches!(err, StoreError::Validation(_)));
        }
        assert_eq!(store.api().request_count(), 0);
    }

    #[tokio::test]
    async fn test_create_refreshes_from_store() {
        let store = PortfolioStore::new(MemoryApi::starting_at(42));
        store.create(&poster()).await.expect("create should succeed");

        let created = store
            .items()
            .into_iter()
            .find(|i| i.id == 42)
            .expect("created item should be mirrored");
        assert_eq!(created.title, "Poster A");
        assert_eq!(created.category, ItemCategory::Known(Category::Geometry));

        // mirror equals a fresh fetch, not a local append
        let fresh = store.api().fetch_items().await.unwrap();
        assert_eq!(store.items(), fresh);
        assert_eq!(store.list().await.iter().filter(|i| i.id == 42).count(), 1);
    }

    #[tokio::test]
    async fn test_rejected_create_reports_error() {
        let store = PortfolioStore::new(MemoryApi::new());
        store
            .api()
            .fail_next(StoreError::Rejected(StatusCode::INTERNAL_SERVER_ERROR));

        assert_eq!(
            store.create(&poster()).await,
            Err(StoreError::Rejected(StatusCode::INTERNAL_SERVER_ERROR))
        );
        // no refresh after a failed create
        assert_eq!(store.api().request_count(), 1);
        assert!(store.items().is_empty());
    }

    #[tokio::test]
    async fn test_remove_drops_item() {
        let store = PortfolioStore::new(MemoryApi::with_items([
            item(1, Category::Minimalism),
            item(2, Category::Geometry),
        ]));
        store.list().await;

        store.remove(1).await.expect("remove should succeed");
        assert!(store.items().iter().all(|i| i.id != 1));
        assert!(store.list().await.iter().all(|i| i.id != 1));

        assert_eq!(
            store.remove(1).await,
            Err(StoreError::Rejected(StatusCode::NOT_FOUND))
        );
        assert_eq!(store.items().len(), 1);
    }

    #[tokio::test]
    async fn test_filtered_view() {
        let store = PortfolioStore::new(MemoryApi::with_items([
            item(1, Category::Minimalism),
            item(2, Category::Geometry),
        ]));
        store.list().await;

        let geometry = store.filtered(Category::Geometry);
        assert_eq!(geometry, vec![item(2, Category::Geometry)]);
        assert!(store.filtered(Category::Typography).is_empty());
    }

    #[test]
    fn test_sequence_is_per_operation() {
        let seq = RequestSequence::default();
        let first = seq.issue(Operation::List);
        let create = seq.issue(Operation::Create);
        assert_eq!(first.seq, 1);
        assert_eq!(create.seq, 1);
        assert!(seq.is_current(first));

        let second = seq.issue(Operation::List);
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert!(seq.is_current(create));
    }

    /// Store whose list responses are released by the test, in any order.
    #[derive(Default)]
    struct GatedApi {
        pending: RefCell<VecDeque<oneshot::Sender<Vec<PortfolioItem>>>>,
    }

    impl GatedApi {
        fn release(&self, index: usize, items: Vec<PortfolioItem>) {
            let tx = self
                .pending
                .borrow_mut()
                .remove(index)
                .expect("request should be pending");
            tx.send(items).expect("request should still be waiting");
        }
    }

    impl PortfolioApi for GatedApi {
        async fn fetch_items(&self) -> Result<Vec<PortfolioItem>, StoreError> {
            let (tx, rx) = oneshot::channel();
            self.pending.borrow_mut().push_back(tx);
            rx.await
                .map_err(|e| StoreError::Transport(e.to_string()))
        }

        async fn create_item(&self, _draft: &PortfolioDraft) -> Result<(), StoreError> {
            Ok(())
        }

        async fn delete_item(&self, _id: i64) -> Result<(), StoreError> {
            Ok(())
        }
    }

    async fn poll_once<F: Future>(fut: std::pin::Pin<&mut F>) -> Poll<F::Output> {
        let mut fut = Some(fut);
        poll_fn(move |cx| Poll::Ready(fut.take().expect("polled once").poll(cx))).await
    }

    #[tokio::test]
    async fn test_stale_list_response_is_discarded() {
        let store = PortfolioStore::new(GatedApi::default());

        let mut older = pin!(store.list());
        let mut newer = pin!(store.list());
        assert!(poll_once(older.as_mut()).await.is_pending());
        assert!(poll_once(newer.as_mut()).await.is_pending());
        assert!(store.is_loading());

        // newer request resolves first, then the older one
        store.api().release(1, vec![item(2, Category::Geometry)]);
        assert_eq!(newer.await, vec![item(2, Category::Geometry)]);
        assert!(!store.is_loading());

        store.api().release(0, vec![item(1, Category::Minimalism)]);
        assert_eq!(older.await, vec![item(2, Category::Geometry)]);
        assert_eq!(store.items(), vec![item(2, Category::Geometry)]);
    }

    #[tokio::test]
    async fn test_cancelled_list_releases_loading() {
        let store = PortfolioStore::new(GatedApi::default());
        {
            let mut pending = pin!(store.list());
            assert!(poll_once(pending.as_mut()).await.is_pending());
            assert!(store.is_loading());
        }
        assert!(!store.is_loading());
        assert!(store.items().is_empty());
    }
}
