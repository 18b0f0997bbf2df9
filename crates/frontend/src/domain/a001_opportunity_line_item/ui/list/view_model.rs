//! ViewModel for the opportunity line item table
//!
//! Owns the `ViewState` signal and replaces it wholesale after every fetch.
//! Fetch failures never reach the caller as a panic: the table shows the
//! empty state and the failure is kept in `fetch_error`.

use contracts::domain::a001_opportunity_line_item::aggregate::LineItemId;
use leptos::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::columns::columns_for;
use super::state::ViewState;
use crate::domain::a001_opportunity_line_item::backend::LineItemBackend;
use crate::domain::a001_opportunity_line_item::error::TableError;
use crate::shared::navigation::Navigator;
use crate::system::auth::{Role, RoleGate};

/// Activation flag shared with `on_cleanup`.
///
/// Atomic because `on_cleanup` only accepts `Send + Sync` closures.
///
/// Results that arrive after `teardown` are dropped.
#[derive(Clone, Debug)]
pub struct Lifecycle(Arc<AtomicBool>);

impl Lifecycle {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn teardown(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(ViewState),
    Failed(TableError),
    /// Superseded by a newer load, or the table was torn down
    Discarded,
}

#[derive(Clone)]
pub struct LineItemViewModel {
    backend: Rc<dyn LineItemBackend>,
    navigator: Rc<dyn Navigator>,
    lifecycle: Lifecycle,
    fetch_seq: Rc<Cell<u64>>,

    pub opportunity_id: RwSignal<String>,
    pub state: RwSignal<ViewState>,
    pub role: RwSignal<Role>,
    pub loading: RwSignal<bool>,
    /// Last fetch failure; `None` after a successful fetch
    pub fetch_error: RwSignal<Option<TableError>>,
}

impl LineItemViewModel {
    pub fn new(backend: Rc<dyn LineItemBackend>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            backend,
            navigator,
            lifecycle: Lifecycle::new(),
            fetch_seq: Rc::new(Cell::new(0)),
            opportunity_id: RwSignal::new(String::new()),
            state: RwSignal::new(ViewState::default()),
            role: RwSignal::new(Role::default()),
            loading: RwSignal::new(false),
            fetch_error: RwSignal::new(None),
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle.clone()
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    pub fn teardown(&self) {
        self.lifecycle.teardown();
    }

    /// Resolve the role, configure columns, then load the rows
    pub async fn activate(&self, gate: &RoleGate, opportunity_id: &str) -> LoadOutcome {
        let role = gate.resolve_role().await;
        if !self.is_active() {
            return LoadOutcome::Discarded;
        }
        self.set_columns(role);
        self.load_rows(opportunity_id).await
    }

    /// Apply the role's column set; re-applying the same role changes nothing
    pub fn set_columns(&self, role: Role) {
        self.role.set(role);
        let columns = columns_for(role);
        if self.state.with_untracked(|s| s.columns == columns) {
            return;
        }
        let next = self.state.with_untracked(|s| s.with_columns(columns));
        self.state.set(next);
    }

    pub async fn load_rows(&self, opportunity_id: &str) -> LoadOutcome {
        self.opportunity_id.set(opportunity_id.to_string());
        let seq = self.fetch_seq.get() + 1;
        self.fetch_seq.set(seq);
        self.loading.set(true);

        let result = self.backend.fetch_line_items(opportunity_id).await;

        if !self.is_active() {
            log::debug!("Line items for {opportunity_id} arrived after teardown, dropped");
            return LoadOutcome::Discarded;
        }
        if self.fetch_seq.get() != seq {
            log::debug!("Stale line item response #{seq} for {opportunity_id}, dropped");
            return LoadOutcome::Discarded;
        }
        self.loading.set(false);

        let columns = columns_for(self.role.get_untracked());
        match result {
            Ok(items) => {
                let next = ViewState::from_items(items, columns);
                log::debug!(
                    "Loaded {} line items for {opportunity_id}, shortfall: {}",
                    next.rows.len(),
                    next.has_any_shortfall
                );
                self.fetch_error.set(None);
                self.state.set(next.clone());
                LoadOutcome::Loaded(next)
            }
            Err(e) => {
                log::error!("Error loading opportunity line items: {e}");
                let err = TableError::Fetch(e);
                self.state.set(ViewState::empty(columns));
                self.fetch_error.set(Some(err.clone()));
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Reload the current opportunity
    pub async fn reload(&self) -> LoadOutcome {
        let opportunity_id = self.opportunity_id.get_untracked();
        self.load_rows(&opportunity_id).await
    }

    /// Open the product behind a row; ignored for restricted users
    pub fn open_product(&self, row_id: &LineItemId) {
        if self.role.get_untracked().is_restricted() {
            log::warn!("Product navigation is not available for the restricted role");
            return;
        }
        let product_id = self
            .state
            .with_untracked(|s| s.row(row_id).map(|r| r.item.product_id.clone()));
        match product_id {
            Some(product_id) => self.navigator.navigate_to_product(&product_id),
            None => log::warn!("No line item {row_id} in the current view"),
        }
    }
}
