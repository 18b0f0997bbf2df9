//! Утилиты форматирования чисел для таблиц

use rust_decimal::{Decimal, RoundingStrategy};

/// Вставляет пробелы каждые 3 цифры с конца целой части
fn group_thousands(integer_part: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }

    result.chars().rev().collect()
}

/// Форматирует число с разделителем тысяч (пробел) и указанным количеством знаков после запятой
///
/// Округление половины от нуля, как в счёте.
///
/// # Примеры
///
/// ```ignore
/// let formatted = format_decimal(dec!(1234.567), 2);
/// assert_eq!(formatted, "1 234.57");
/// ```
pub fn format_decimal(value: Decimal, decimals: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimals);
    let formatted = rounded.to_string();

    match formatted.split_once('.') {
        Some((integer_part, decimal_part)) => {
            format!("{}.{}", group_thousands(integer_part), decimal_part)
        }
        None => group_thousands(&formatted),
    }
}

/// Форматирует денежное значение с 2 знаками после запятой и разделителем тысяч
pub fn format_money(value: Decimal) -> String {
    format_decimal(value, 2)
}

/// Форматирует целое количество с разделителем тысяч
pub fn format_quantity(value: i64) -> String {
    group_thousands(&value.to_string())
}
