//! Ячейка таблицы для денежных значений
//!
//! ```rust,ignore
//! <TableCellMoney value=unit_price />
//! <TableCellMoney value=total show_currency=true bold=true />
//! ```

use super::number_format::format_money;
use leptos::prelude::*;
use rust_decimal::Decimal;
use thaw::*;

/// Right-aligned money cell with two decimals and a space thousands separator
#[component]
pub fn TableCellMoney(
    /// Значение для отображения
    #[prop(into)]
    value: Signal<Option<Decimal>>,

    /// Символ валюты
    #[prop(optional, default = "€")]
    currency: &'static str,

    /// Показывать ли суффикс валюты
    #[prop(optional, default = false)]
    show_currency: bool,

    /// Жирный шрифт
    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let formatted_text = move || match value.get() {
        Some(v) if show_currency => format!("{} {}", format_money(v), currency),
        Some(v) => format_money(v),
        None => "—".to_string(),
    };

    let cell_style = if bold { "font-weight: 600" } else { "" };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>
                {formatted_text}
            </span>
        </TableCell>
    }
}
