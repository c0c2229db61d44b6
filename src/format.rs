// 🔢 Number Formatting - Slovak style display values

/// Group digits in threes from the right with a single space: 12345 → "12 345"
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    grouped
}

/// Amount with currency, as shown next to a result: "1 310 €"
pub fn format_eur(value: u64) -> String {
    format!("{} €", format_thousands(value))
}

/// Child count as offered in the calculator (0, 1, 2, 3+)
pub fn children_label(children: u32) -> String {
    if children >= 3 {
        "3+".to_string()
    } else {
        children.to_string()
    }
}
