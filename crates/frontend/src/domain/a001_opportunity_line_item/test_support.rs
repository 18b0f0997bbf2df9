//! In-memory collaborators for the line item tests

use async_trait::async_trait;
use contracts::domain::a001_opportunity_line_item::aggregate::{LineItem, LineItemId, ProductId};
use contracts::domain::a001_opportunity_line_item::request::UpdateStockRequest;
use contracts::domain::a001_opportunity_line_item::response::DeleteLineItemResponse;
use contracts::domain::common::AggregateId;
use rust_decimal_macros::dec;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tokio::sync::oneshot;

use super::backend::LineItemBackend;
use crate::shared::backend_error::BackendError;
use crate::shared::navigation::Navigator;
use crate::shared::notifications::{NotificationKind, Notifier};
use crate::system::auth::RoleSource;

pub fn id(s: &str) -> LineItemId {
    LineItemId::from_string(s).unwrap()
}

/// Line item `id` for product `prod-{id}` at 10.00 each
pub fn item(row_id: &str, quantity: u32, quantity_in_stock: i64) -> LineItem {
    LineItem {
        id: id(row_id),
        product_id: ProductId::from_string(&format!("prod-{row_id}")).unwrap(),
        product_name: format!("Produit {row_id}"),
        unit_price: dec!(10.00),
        quantity,
        quantity_in_stock,
        total_price: None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch(String),
    Delete(LineItemId),
    Update(UpdateStockRequest),
}

type Scripted<T> = VecDeque<(Result<T, BackendError>, Option<oneshot::Receiver<()>>)>;

/// Scripted backend. Unscripted calls succeed with an empty list, a full
/// delete, or `Ok(())`.
#[derive(Default)]
pub struct MockBackend {
    fetches: RefCell<Scripted<Vec<LineItem>>>,
    deletes: RefCell<Scripted<DeleteLineItemResponse>>,
    updates: RefCell<Scripted<()>>,
    calls: RefCell<Vec<Call>>,
    hook: RefCell<Option<Box<dyn Fn()>>>,
}

impl MockBackend {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn push_fetch(&self, result: Result<Vec<LineItem>, BackendError>) {
        self.fetches.borrow_mut().push_back((result, None));
    }

    /// The call waits until the returned sender fires
    pub fn push_blocked_fetch(
        &self,
        result: Result<Vec<LineItem>, BackendError>,
    ) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.fetches.borrow_mut().push_back((result, Some(rx)));
        tx
    }

    pub fn push_delete(&self, result: Result<DeleteLineItemResponse, BackendError>) {
        self.deletes.borrow_mut().push_back((result, None));
    }

    pub fn push_blocked_delete(
        &self,
        result: Result<DeleteLineItemResponse, BackendError>,
    ) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.deletes.borrow_mut().push_back((result, Some(rx)));
        tx
    }

    pub fn push_update(&self, result: Result<(), BackendError>) {
        self.updates.borrow_mut().push_back((result, None));
    }

    /// Run `hook` at the start of every backend call
    pub fn on_call(&self, hook: impl Fn() + 'static) {
        *self.hook.borrow_mut() = Some(Box::new(hook));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn fetched_ids(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Fetch(id) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    fn enter(&self, call: Call) {
        self.calls.borrow_mut().push(call);
        if let Some(hook) = self.hook.borrow().as_ref() {
            hook();
        }
    }
}

async fn settle<T>(
    queue: &RefCell<Scripted<T>>,
    default: impl FnOnce() -> Result<T, BackendError>,
) -> Result<T, BackendError> {
    let next = queue.borrow_mut().pop_front();
    match next {
        Some((result, gate)) => {
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            result
        }
        None => default(),
    }
}

#[async_trait(?Send)]
impl LineItemBackend for MockBackend {
    async fn fetch_line_items(&self, opportunity_id: &str) -> Result<Vec<LineItem>, BackendError> {
        self.enter(Call::Fetch(opportunity_id.to_string()));
        settle(&self.fetches, || Ok(Vec::new())).await
    }

    async fn delete_line_item_and_product(
        &self,
        id: &LineItemId,
    ) -> Result<DeleteLineItemResponse, BackendError> {
        self.enter(Call::Delete(id.clone()));
        settle(&self.deletes, || {
            Ok(DeleteLineItemResponse {
                line_item_deleted: true,
                product_deleted: true,
                message: None,
            })
        })
        .await
    }

    async fn update_stock_quantity(&self, request: &UpdateStockRequest) -> Result<(), BackendError> {
        self.enter(Call::Update(request.clone()));
        settle(&self.updates, || Ok(())).await
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    recorded: RefCell<Vec<(NotificationKind, String, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn recorded(&self) -> Vec<(NotificationKind, String, String)> {
        self.recorded.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
        self.recorded
            .borrow_mut()
            .push((kind, title.to_string(), message.to_string()));
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to_product(&self, product_id: &ProductId) {
        self.visited.borrow_mut().push(product_id.as_string());
    }
}

pub struct StaticRole(Result<bool, BackendError>);

impl StaticRole {
    pub fn privileged() -> Rc<Self> {
        Rc::new(Self(Ok(false)))
    }

    pub fn failing() -> Rc<Self> {
        Rc::new(Self(Err(BackendError::Transport("role service down".into()))))
    }
}

#[async_trait(?Send)]
impl RoleSource for StaticRole {
    async fn fetch_is_restricted(&self) -> Result<bool, BackendError> {
        self.0.clone()
    }
}
