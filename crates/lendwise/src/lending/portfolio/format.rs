/// `1284` -> `1,284`.
pub fn group_thousands(value: u64) -> String {
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

/// `50000` -> `$50,000`.
pub fn currency(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

/// Abbreviated amounts for metric cards: `$12.4M`, `$850.0K`, `$950`.
pub fn compact_currency(amount: u64) -> String {
    const MILLION: f64 = 1_000_000.0;
    const THOUSAND: f64 = 1_000.0;

    let value = amount as f64;
    if value >= MILLION {
        format!("${:.1}M", value / MILLION)
    } else if value >= THOUSAND {
        format!("${:.1}K", value / THOUSAND)
    } else {
        format!("${amount}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(957), "957");
        assert_eq!(group_thousands(1284), "1,284");
        assert_eq!(group_thousands(100000), "100,000");
        assert_eq!(group_thousands(12_400_000), "12,400,000");
    }

    #[test]
    fn formats_currency_variants() {
        assert_eq!(currency(75_000), "$75,000");
        assert_eq!(compact_currency(12_400_000), "$12.4M");
        assert_eq!(compact_currency(850_000), "$850.0K");
        assert_eq!(compact_currency(950), "$950");
    }
}
