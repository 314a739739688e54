//! Number formatting for reports
//!
//! Amounts are printed without a currency symbol; the planner makes no
//! assumption about which currency the user saves in.

/// Format an amount with thousands separators and two decimals
pub fn format_amount(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Format an amount rounded to whole units (for tight columns)
pub fn format_amount_short(value: f64) -> String {
    let whole = value.abs().round() as u64;
    let sign = if value < 0.0 && whole > 0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(whole))
}

/// Format a value already expressed in percent
pub fn format_percent(value_pct: f64) -> String {
    format!("{value_pct:.2}%")
}

/// Format a 0-1 ratio as a percentage
pub fn format_ratio(ratio: f64) -> String {
    format_percent(ratio * 100.0)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
