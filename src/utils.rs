// src/utils.rs

// Currency KPIs are shown as whole dollars with thousands separators,
// e.g. 1234567.8 -> "1,234,567".
pub fn format_currency(value: f64) -> String {
    let whole = value.trunc() as i64;
    let digits = whole.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

// Star string next to the rating KPI, one star per rounded point.
pub fn rating_stars(rating: f64) -> String {
    "⭐".repeat(rating.round().clamp(0.0, 10.0) as usize)
}
