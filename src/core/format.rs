/// Label of the base currency unit every amount is expressed in.
pub const BASE_UNIT_LABEL: &str = "万円";

/// Rounds to a whole unit (ties go up) and groups thousands.
///
/// `format_amount(1234.5)` renders as `"1,235万円"`.
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{amount}{BASE_UNIT_LABEL}");
    }
    let floor = amount.floor();
    let rounded = if amount - floor >= 0.5 { floor + 1.0 } else { floor };
    format!("{}{BASE_UNIT_LABEL}", group_thousands(rounded))
}

/// Renders a fractional rate as a percentage with exactly `decimal_places` digits.
pub fn format_percentage(rate: f64, decimal_places: usize) -> String {
    format!("{:.*}%", decimal_places, rate * 100.0)
}

pub fn format_percentage_default(rate: f64) -> String {
    format_percentage(rate, 2)
}

fn group_thousands(whole: f64) -> String {
    // -0.0 compares equal to zero, so it prints unsigned.
    let negative = whole < 0.0;
    let digits = format!("{:.0}", whole.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
