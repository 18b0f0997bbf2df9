use contracts::domain::a001_opportunity_line_item::aggregate::ProductId;

/// Opens a product record; fire-and-forget
pub trait Navigator {
    fn navigate_to_product(&self, product_id: &ProductId);
}

/// Navigates the current browser window to a URL built from a path template
pub struct BrowserNavigator {
    product_path: String,
}

impl BrowserNavigator {
    pub fn new(product_path: impl Into<String>) -> Self {
        Self {
            product_path: product_path.into(),
        }
    }

    pub fn url_for(&self, product_id: &ProductId) -> String {
        self.product_path
            .replace("{id}", &urlencoding::encode(product_id.value()))
    }
}

impl Navigator for BrowserNavigator {
    fn navigate_to_product(&self, product_id: &ProductId) {
        let url = self.url_for(product_id);
        let Some(window) = web_sys::window() else {
            log::warn!("No window, cannot open {url}");
            return;
        };
        if let Err(e) = window.location().set_href(&url) {
            log::error!("Failed to navigate to {url}: {e:?}");
        }
    }
}
