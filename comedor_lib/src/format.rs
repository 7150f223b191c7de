//! Display formatting for dashboard figures.

/// `1234.5` -> `$1,234.50`. Negative amounts get a leading `-`.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    format!(
        "{}${}.{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Thousands separators and at most three decimals, trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let millis = (value.abs() * 1000.0).round() as u64;
    let whole = group_thousands(millis / 1000);
    let frac = millis % 1000;
    if frac == 0 {
        format!("{}{}", sign, whole)
    } else {
        let digits = format!("{:03}", frac);
        format!("{}{}.{}", sign, whole, digits.trim_end_matches('0'))
    }
}

/// One decimal followed by `%`.
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Relative change from `previous` to `current` in percent; `0.0` when
/// `previous` is zero.
pub fn percentage_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

/// Cuts `text` to `max_chars` characters and appends `...` if anything was cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((idx, _)) => format!("{}...", &text[..idx]),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
