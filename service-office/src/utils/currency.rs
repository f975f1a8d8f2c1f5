//! 金额格式化
//!
//! Display-only rupee formatting with Indian digit grouping. Never used
//! for values sent to the server.

const SYMBOL: &str = "₹";

/// Format an amount as `₹1,50,000.00`
///
/// # Examples
///
/// ```
/// use service_office::utils::currency::format_currency;
///
/// assert_eq!(format_currency(1500.0), "₹1,500.00");
/// assert_eq!(format_currency(150000.0), "₹1,50,000.00");
/// assert_eq!(format_currency(-42.5), "-₹42.50");
/// ```
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{SYMBOL}-");
    }
    let paise = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && paise > 0 { "-" } else { "" };
    format!(
        "{sign}{SYMBOL}{}.{:02}",
        group_indian(paise / 100),
        paise % 100
    )
}

/// Optional amount; missing values render as a dash
pub fn format_opt_currency(amount: Option<f64>) -> String {
    amount.map(format_currency).unwrap_or_else(|| "-".to_string())
}

/// Last three digits, then groups of two: 12345678 -> 1,23,45,678
fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
