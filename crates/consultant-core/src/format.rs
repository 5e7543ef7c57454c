//! Currency and number formatting for display

/// Group an integer the Indian way: last three digits, then pairs.
///
/// `245000` becomes `2,45,000`; `12345678` becomes `1,23,45,678`.
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
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

/// Whole-rupee amount, e.g. `₹2,45,000`
pub fn format_inr(amount: u64) -> String {
    format!("₹{}", group_indian(amount))
}

/// Rupee price with two decimals, e.g. `₹2,456.75`
pub fn format_price(price: f64) -> String {
    let price = price.max(0.0);
    let rupees = price.trunc() as u64;
    let paise = ((price - price.trunc()) * 100.0).round() as u64;
    // 0.995 rounds up into the next rupee
    let (rupees, paise) = if paise >= 100 {
        (rupees + 1, 0)
    } else {
        (rupees, paise)
    };
    format!("₹{}.{:02}", group_indian(rupees), paise)
}

/// Signed percentage with two decimals, e.g. `+2.34%`
pub fn format_change(change: f64) -> String {
    if change >= 0.0 {
        format!("+{change:.2}%")
    } else {
        format!("{change:.2}%")
    }
}
