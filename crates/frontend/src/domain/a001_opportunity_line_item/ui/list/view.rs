use contracts::domain::a001_opportunity_line_item::aggregate::LineItemId;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

use super::columns::{
    ColumnSpec, FIELD_DELETE, FIELD_PRODUCT_NAME, FIELD_QUANTITY, FIELD_QUANTITY_IN_STOCK,
    FIELD_TOTAL_PRICE, FIELD_UNIT_PRICE, FIELD_VIEW_PRODUCT,
};
use super::mutation::{MutationCoordinator, MutationStatus};
use super::pending_edits::PendingEdits;
use super::state::RenderRow;
use super::view_model::LineItemViewModel;
use crate::domain::a001_opportunity_line_item::api::HttpLineItemBackend;
use crate::domain::a001_opportunity_line_item::backend::LineItemBackend;
use crate::shared::components::table::number_format::format_quantity;
use crate::shared::components::table::TableCellMoney;
use crate::shared::config::UiConfig;
use crate::shared::navigation::BrowserNavigator;
use crate::shared::notifications::NotificationCenter;
use crate::system::auth::api::HttpRoleSource;
use crate::system::auth::RoleGate;

/// Line items of one opportunity with stock editing and deletion
#[component]
#[allow(non_snake_case)]
pub fn OpportunityProductTable(
    #[prop(into)] opportunity_id: String,
    config: UiConfig,
    notifications: NotificationCenter,
) -> impl IntoView {
    let backend: Rc<dyn LineItemBackend> = Rc::new(HttpLineItemBackend::new(config.api.clone()));
    let navigator = Rc::new(BrowserNavigator::new(config.navigation.product_path.clone()));
    let gate = RoleGate::new(Rc::new(HttpRoleSource::new(config.api.port)));

    let vm = LineItemViewModel::new(backend.clone(), navigator);
    let coordinator = MutationCoordinator::new(
        vm.clone(),
        backend,
        Rc::new(notifications),
        config.messages.clone(),
        config.save.policy,
    );

    let state = vm.state;
    let loading = vm.loading;
    let fetch_error = vm.fetch_error;
    let pending = coordinator.pending;
    let status = coordinator.status;

    let lifecycle = vm.lifecycle();
    on_cleanup(move || lifecycle.teardown());

    spawn_local({
        let vm = vm.clone();
        async move {
            vm.activate(&gate, &opportunity_id).await;
        }
    });

    let vm = StoredValue::new_local(vm);
    let coordinator = StoredValue::new_local(coordinator);

    let save = move || {
        spawn_local(async move {
            let coordinator = coordinator.get_value();
            // failures are notified by the coordinator
            let _ = coordinator.save().await;
        });
    };

    let reset = move || coordinator.with_value(|c| c.reset());

    let refresh = move || {
        spawn_local(async move {
            let vm = vm.get_value();
            vm.reload().await;
        });
    };

    let render_cell = move |column: &ColumnSpec, row: &RenderRow| -> AnyView {
        let row_id = row.id().clone();
        match column.field_name {
            FIELD_PRODUCT_NAME => {
                let name = row.item.product_name.clone();
                view! {
                    <TableCell>
                        <TableCellLayout truncate=true>{name}</TableCellLayout>
                    </TableCell>
                }
                .into_any()
            }
            FIELD_UNIT_PRICE => {
                let price = row.item.unit_price;
                view! { <TableCellMoney value=Signal::derive(move || Some(price)) /> }.into_any()
            }
            FIELD_TOTAL_PRICE => {
                let total = row.total;
                view! { <TableCellMoney value=Signal::derive(move || total) bold=true /> }
                    .into_any()
            }
            FIELD_QUANTITY => {
                let quantity = format_quantity(i64::from(row.item.quantity));
                view! {
                    <TableCell class="text-right">
                        <TableCellLayout>{quantity}</TableCellLayout>
                    </TableCell>
                }
                .into_any()
            }
            FIELD_QUANTITY_IN_STOCK => stock_cell(row, coordinator, pending),
            FIELD_DELETE => view! {
                <TableCell>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        disabled=Signal::derive(move || status.get() == MutationStatus::Submitting)
                        on_click=move |_| {
                            let row_id = row_id.clone();
                            spawn_local(async move {
                                let coordinator = coordinator.get_value();
                                let _ = coordinator.delete(&row_id).await;
                            });
                        }
                    >
                        "Supprimer"
                    </Button>
                </TableCell>
            }
            .into_any(),
            FIELD_VIEW_PRODUCT => view! {
                <TableCell>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| vm.with_value(|vm| vm.open_product(&row_id))
                    >
                        "Voir produit"
                    </Button>
                </TableCell>
            }
            .into_any(),
            other => {
                log::warn!("No renderer for column {other}");
                view! { <TableCell>""</TableCell> }.into_any()
            }
        }
    };

    view! {
        <div class="opportunity-product-table" style="padding: 20px;">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2 style="font-size: 20px; font-weight: bold;">"Produits de l'opportunité"</h2>
                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || {
                            pending.with(|p| p.is_empty()) || status.get() == MutationStatus::Submitting
                        })
                        on_click=move |_| save()
                    >
                        {move || format!("Enregistrer ({})", pending.with(|p| p.len()))}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || pending.with(|p| p.is_empty()))
                        on_click=move |_| reset()
                    >
                        "Annuler"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| refresh()>
                        "Actualiser"
                    </Button>
                </Space>
            </Flex>

            {move || fetch_error.get().map(|e| view! {
                <div style="margin-top: 16px;">
                    <MessageBar intent=MessageBarIntent::Error>{e.to_string()}</MessageBar>
                </div>
            })}

            {move || state.with(|s| s.has_any_shortfall).then(|| view! {
                <div style="margin-top: 16px;">
                    <MessageBar intent=MessageBarIntent::Warning>
                        "Stock insuffisant pour au moins un produit."
                    </MessageBar>
                </div>
            })}

            <Show
                when=move || !state.with(|s| s.is_empty)
                fallback=move || view! {
                    <div class="empty-state" style="margin-top: 16px;">
                        {move || if loading.get() {
                            view! { <Spinner /> }.into_any()
                        } else {
                            view! { <span>"Aucun produit pour cette opportunité."</span> }.into_any()
                        }}
                    </div>
                }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            {move || state.with(|s| s.columns.clone()).into_iter().map(|column| view! {
                                <TableHeaderCell>{column.label}</TableHeaderCell>
                            }).collect_view()}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let current = state.get();
                            current.rows.iter().map(|row| {
                                let cells = current
                                    .columns
                                    .iter()
                                    .map(|column| render_cell(column, row))
                                    .collect_view();
                                view! { <TableRow>{cells}</TableRow> }
                            }).collect_view()
                        }}
                    </TableBody>
                </Table>
            </Show>
        </div>
    }
}

/// Editable stock cell, highlighted on shortfall
fn stock_cell(
    row: &RenderRow,
    coordinator: StoredValue<MutationCoordinator, LocalStorage>,
    pending: RwSignal<PendingEdits>,
) -> AnyView {
    let row_id: LineItemId = row.id().clone();
    let row_key = row_id.as_string();
    let stock = row.item.quantity_in_stock;
    let class = row.emphasis_class();
    let style = row.emphasis_style();

    view! {
        <TableCell class=class>
            <input
                type="number"
                step="1"
                class="stock-cell__input"
                style=style
                prop:value=move || {
                    pending.with(|p| p.value_for(&row_id)).unwrap_or(stock).to_string()
                }
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    // rejected input is notified by the coordinator
                    let _ = coordinator.with_value(|c| c.record_draft(&row_key, &raw));
                }
            />
        </TableCell>
    }
    .into_any()
}
