use crate::domain::a001_opportunity_line_item::ui::list::OpportunityProductTable;
use crate::shared::config::UiConfig;
use crate::shared::notifications::{NotificationCenter, NotificationHost};
use leptos::prelude::*;
use serde::Deserialize;
use thaw::*;

/// Query string of the host page, e.g. `?recordId=006AB000001`
#[derive(Debug, Default, Deserialize, PartialEq)]
struct PageQuery {
    #[serde(rename = "recordId")]
    record_id: Option<String>,
}

fn record_id_from_query(search: &str) -> Option<String> {
    let query: PageQuery = serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    query
        .record_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
}

#[component]
pub fn App() -> impl IntoView {
    let search = window().location().search().unwrap_or_default();
    let record_id = record_id_from_query(&search);

    let config = match UiConfig::load(None) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration error: {e}");
            return view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            }
            .into_any();
        }
    };

    let notifications = NotificationCenter::new();
    let dismiss_after_ms = config.notifications.dismiss_after_ms;

    let content = match record_id {
        Some(id) => {
            log::info!("Opening line items of opportunity {id}");
            view! {
                <OpportunityProductTable
                    opportunity_id=id
                    config=config
                    notifications=notifications
                />
            }
            .into_any()
        }
        None => {
            log::warn!("No recordId in the page query");
            view! {
                <MessageBar intent=MessageBarIntent::Warning>
                    "Aucune opportunité sélectionnée."
                </MessageBar>
            }
            .into_any()
        }
    };

    view! {
        <div class="app">
            <NotificationHost center=notifications dismiss_after_ms=dismiss_after_ms />
            {content}
        </div>
    }
    .into_any()
}
