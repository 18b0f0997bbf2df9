//! Mutation workflow: edit → validate → persist → refresh → notify.
//!
//! Rows never disappear or change before the backend confirms. A refresh is
//! requested only after the backend call has completed.

use contracts::domain::a001_opportunity_line_item::aggregate::LineItemId;
use contracts::domain::a001_opportunity_line_item::request::{StockEdit, UpdateStockRequest};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::rc::Rc;

use super::pending_edits::{parse_stock_input, PendingEdits};
use super::view_model::LineItemViewModel;
use crate::domain::a001_opportunity_line_item::backend::LineItemBackend;
use crate::domain::a001_opportunity_line_item::error::TableError;
use crate::shared::config::{MessagesConfig, SavePolicy};
use crate::shared::notifications::{NotificationKind, Notifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStatus {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Backend confirmed; refresh requested
    Completed,
    /// Nothing to do
    NoOp,
    /// The table was torn down while the call was in flight
    Discarded,
}

#[derive(Clone)]
pub struct MutationCoordinator {
    view_model: LineItemViewModel,
    backend: Rc<dyn LineItemBackend>,
    notifier: Rc<dyn Notifier>,
    messages: Rc<MessagesConfig>,
    policy: SavePolicy,

    pub pending: RwSignal<PendingEdits>,
    pub status: RwSignal<MutationStatus>,
    pub last_error: RwSignal<Option<TableError>>,
}

impl MutationCoordinator {
    pub fn new(
        view_model: LineItemViewModel,
        backend: Rc<dyn LineItemBackend>,
        notifier: Rc<dyn Notifier>,
        messages: MessagesConfig,
        policy: SavePolicy,
    ) -> Self {
        Self {
            view_model,
            backend,
            notifier,
            messages: Rc::new(messages),
            policy,
            pending: RwSignal::new(PendingEdits::new()),
            status: RwSignal::new(MutationStatus::Idle),
            last_error: RwSignal::new(None),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status.get_untracked() == MutationStatus::Submitting
    }

    /// Record a value typed into a stock cell.
    ///
    /// An unknown row key is kept as an edit without id; it is dropped
    /// before the save is sent.
    pub fn record_draft(&self, row_key: &str, raw: &str) -> Result<(), TableError> {
        let new_quantity = match parse_stock_input(raw) {
            Ok(q) => q,
            Err(detail) => {
                log::warn!("Rejected stock input for {row_key}: {detail}");
                return Err(self.fail(TableError::Validation(
                    self.messages.invalid_quantity.clone(),
                )));
            }
        };
        let row_id = LineItemId::from_string(row_key).ok();
        if row_id.is_none() {
            log::warn!("Stock edit without a usable row id: {row_key:?}");
        }
        self.pending
            .update(|p| p.record(StockEdit { row_id, new_quantity }));
        Ok(())
    }

    /// Drop all unsaved edits
    pub fn reset(&self) {
        self.pending.update(PendingEdits::clear);
        self.last_error.set(None);
    }

    pub async fn delete(&self, row_id: &LineItemId) -> Result<MutationOutcome, TableError> {
        self.begin()?;

        let result = self.backend.delete_line_item_and_product(row_id).await;

        if !self.view_model.is_active() {
            return Ok(MutationOutcome::Discarded);
        }
        self.status.set(MutationStatus::Idle);

        let error = match result {
            Ok(resp) if resp.is_complete() => {
                log::info!("Deleted line item {row_id} and its product");
                // a draft for a deleted row can no longer be saved
                self.pending.update(|p| p.remove(row_id));
                self.last_error.set(None);
                self.notifier.notify(
                    NotificationKind::Success,
                    &self.messages.success_title,
                    &self.messages.delete_success,
                );
                self.view_model.reload().await;
                return Ok(MutationOutcome::Completed);
            }
            Ok(resp) => {
                log::error!(
                    "Partial delete of {row_id}: line item {}, product {}",
                    resp.line_item_deleted,
                    resp.product_deleted
                );
                let message = resp
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| self.messages.delete_error.clone());
                self.notify_error(&message);
                TableError::PartialDelete {
                    line_item_deleted: resp.line_item_deleted,
                    product_deleted: resp.product_deleted,
                }
            }
            Err(e) => {
                log::error!("Failed to delete line item {row_id}: {e}");
                let message = e
                    .provided_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| self.messages.delete_error.clone());
                self.notify_error(&message);
                TableError::Mutation { message }
            }
        };

        self.last_error.set(Some(error.clone()));
        Err(error)
    }

    pub async fn save(&self) -> Result<MutationOutcome, TableError> {
        let pending = self.pending.get_untracked();
        if pending.is_empty() {
            log::info!("Save requested with no pending edits");
            return Ok(MutationOutcome::NoOp);
        }

        let requests = pending.valid_requests();
        if requests.is_empty() {
            log::warn!("None of the {} pending edits has a row id", pending.len());
            return Err(self.fail(TableError::Validation(
                self.messages.no_valid_edits.clone(),
            )));
        }

        self.begin()?;
        match self.policy {
            SavePolicy::FirstOnly => self.save_first(&requests[0]).await,
            SavePolicy::All => self.save_all(&requests).await,
        }
    }

    async fn save_first(&self, request: &UpdateStockRequest) -> Result<MutationOutcome, TableError> {
        let result = self.backend.update_stock_quantity(request).await;

        if !self.view_model.is_active() {
            return Ok(MutationOutcome::Discarded);
        }
        self.status.set(MutationStatus::Idle);

        match result {
            Ok(()) => {
                log::info!(
                    "Stock of {} set to {}",
                    request.id,
                    request.quantity_in_stock
                );
                self.finish_save().await;
                Ok(MutationOutcome::Completed)
            }
            Err(e) => {
                log::error!("Failed to update stock of {}: {e}", request.id);
                Err(self.fail(TableError::Mutation {
                    message: e.best_message(),
                }))
            }
        }
    }

    async fn save_all(&self, requests: &[UpdateStockRequest]) -> Result<MutationOutcome, TableError> {
        let mut acknowledged = 0usize;
        for request in requests {
            let result = self.backend.update_stock_quantity(request).await;

            if !self.view_model.is_active() {
                return Ok(MutationOutcome::Discarded);
            }

            if let Err(e) = result {
                log::error!(
                    "Failed to update stock of {} after {acknowledged} saved: {e}",
                    request.id
                );
                self.status.set(MutationStatus::Idle);
                let error = self.fail(TableError::Mutation {
                    message: e.best_message(),
                });
                if acknowledged > 0 {
                    self.view_model.reload().await;
                }
                return Err(error);
            }

            acknowledged += 1;
            self.pending.update(|p| p.remove(&request.id));
        }

        self.status.set(MutationStatus::Idle);
        log::info!("Saved {acknowledged} stock edits");
        self.finish_save().await;
        Ok(MutationOutcome::Completed)
    }

    async fn finish_save(&self) {
        self.pending.update(PendingEdits::clear);
        self.last_error.set(None);
        self.notifier.notify(
            NotificationKind::Success,
            &self.messages.success_title,
            &self.messages.save_success,
        );
        self.view_model.reload().await;
    }

    /// Enter `Submitting`, or refuse while another submission is in flight
    fn begin(&self) -> Result<(), TableError> {
        if self.is_submitting() {
            log::warn!("Submission rejected: another change is in flight");
            return Err(TableError::Busy);
        }
        self.status.set(MutationStatus::Submitting);
        Ok(())
    }

    fn notify_error(&self, message: &str) {
        self.notifier
            .notify(NotificationKind::Error, &self.messages.error_title, message);
    }

    /// Notify, remember and hand back the error
    fn fail(&self, error: TableError) -> TableError {
        self.notify_error(&error.to_string());
        self.last_error.set(Some(error.clone()));
        error
    }
}
