//! Display formatting for monetary amounts.

/// Formats an amount in the application's display convention: dollar sign,
/// thousands grouping, two decimals, `-$12.00` style negatives.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let grouped = group_thousands(cents / 100);
    let fraction = cents % 100;
    if amount < 0.0 && cents > 0 {
        format!("-${grouped}.{fraction:02}")
    } else {
        format!("${grouped}.{fraction:02}")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
