//! Observable product store: the view-model behind the product list screen.
//!
//! # Design
//! State lives in a single `tokio::sync::watch` channel. The store owns the
//! sender and is the only writer; the UI holds receivers and re-renders on
//! change notifications, so no shared mutable fields exist and a reader can
//! never observe a half-applied update. Intents take `&mut self`, which
//! serializes them per store by construction.
//!
//! Every intent follows the same shape: raise `loading`, run the gateway
//! call, publish the outcome, drop `loading`. Mutations never patch `items`
//! locally — on success they re-run `load`, so the displayed list is always
//! a full server-truth snapshot. On failure `items` stays as it was and
//! `error` carries the operation label plus the underlying cause; the next
//! successful load clears it.

use tokio::sync::watch;

use crate::error::ApiError;
use crate::gateway::ProductGateway;
use crate::http::Transport;
use crate::types::{NewProduct, Product};

/// Snapshot of everything the product list screen renders.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    /// Complete server-truth snapshot, replaced wholesale by each load.
    pub items: Vec<Product>,
    /// True strictly between intent start and its terminal outcome.
    pub loading: bool,
    /// Last failure, kept until the next successful load.
    pub error: Option<String>,
}

pub struct ProductStore<T: Transport> {
    gateway: ProductGateway<T>,
    state: watch::Sender<StoreState>,
}

impl<T: Transport> ProductStore<T> {
    pub fn new(gateway: ProductGateway<T>) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self { gateway, state }
    }

    /// Subscribe to state changes. The receiver starts at the current
    /// snapshot and is notified on every transition.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    /// Current snapshot, for callers that don't need notifications.
    pub fn state(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// Fetch the full list and replace `items`; clears `error` on success.
    pub fn load(&mut self) {
        self.set_loading(true);
        self.refresh();
        self.set_loading(false);
    }

    /// Create a product, then resynchronize via a fresh load.
    pub fn add(&mut self, input: &NewProduct) {
        self.run_mutation("add product", |gw| gw.create(input));
    }

    /// Update an existing product, then resynchronize via a fresh load.
    pub fn update(&mut self, product: &Product) {
        let Some(id) = product.id else {
            self.state.send_modify(|s| {
                s.error = Some("failed to update product: product has no id".to_string());
            });
            return;
        };
        self.run_mutation("update product", |gw| gw.update(id, product));
    }

    /// Delete a product by id, then resynchronize via a fresh load.
    pub fn remove(&mut self, id: i64) {
        self.run_mutation("delete product", |gw| gw.delete(id));
    }

    fn run_mutation(
        &mut self,
        label: &str,
        op: impl FnOnce(&ProductGateway<T>) -> Result<(), ApiError>,
    ) {
        self.set_loading(true);
        match op(&self.gateway) {
            Ok(()) => self.refresh(),
            Err(e) => self.fail(label, e),
        }
        self.set_loading(false);
    }

    fn refresh(&mut self) {
        match self.gateway.list() {
            Ok(items) => self.state.send_modify(|s| {
                s.items = items;
                s.error = None;
            }),
            Err(e) => self.fail("load products", e),
        }
    }

    fn fail(&mut self, label: &str, error: ApiError) {
        // items intentionally untouched: stale data beats no data.
        self.state.send_modify(|s| {
            s.error = Some(format!("failed to {label}: {error}"));
        });
    }

    fn set_loading(&mut self, loading: bool) {
        self.state.send_if_modified(|s| {
            if s.loading == loading {
                return false;
            }
            s.loading = loading;
            true
        });
    }
}
