use async_trait::async_trait;
use contracts::domain::a001_opportunity_line_item::aggregate::{LineItem, LineItemId};
use contracts::domain::a001_opportunity_line_item::request::UpdateStockRequest;
use contracts::domain::a001_opportunity_line_item::response::DeleteLineItemResponse;
use gloo_net::http::Request;

use super::backend::LineItemBackend;
use crate::shared::api_utils::{api_base, api_url, rejection};
use crate::shared::backend_error::BackendError;
use crate::shared::config::ApiConfig;

/// `LineItemBackend` over the REST API
pub struct HttpLineItemBackend {
    api: ApiConfig,
    base: String,
}

impl HttpLineItemBackend {
    pub fn new(api: ApiConfig) -> Self {
        let base = api_base(api.port);
        Self { api, base }
    }

    fn url(&self, segments: &[&str]) -> String {
        api_url(&self.api, &self.base, segments)
    }
}

#[async_trait(?Send)]
impl LineItemBackend for HttpLineItemBackend {
    async fn fetch_line_items(&self, opportunity_id: &str) -> Result<Vec<LineItem>, BackendError> {
        let response = Request::get(&self.url(&[opportunity_id, "line-items"]))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(rejection(response).await);
        }

        response
            .json::<Vec<LineItem>>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    async fn delete_line_item_and_product(
        &self,
        id: &LineItemId,
    ) -> Result<DeleteLineItemResponse, BackendError> {
        let response = Request::delete(&self.url(&["line-items", id.value()]))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(rejection(response).await);
        }

        response
            .json::<DeleteLineItemResponse>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    async fn update_stock_quantity(&self, request: &UpdateStockRequest) -> Result<(), BackendError> {
        let response = Request::put(&self.url(&["line-items", request.id.value(), "stock"]))
            .json(request)
            .map_err(|e| BackendError::Transport(format!("Failed to serialize request: {e}")))?
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(rejection(response).await);
        }

        Ok(())
    }
}
