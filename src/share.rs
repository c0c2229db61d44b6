// 📣 Share Payload - Text handed to a share sheet or a social intent URL
// How the payload is delivered is up to the caller

use crate::format::format_thousands;

pub const SHARE_TITLE: &str = "Koľko stojí realita";

pub fn build_share_text(estimate: u64) -> String {
    format!(
        "Moje reálne mesačné náklady na život: {} €. A aké sú tvoje?\n\nKoľko stojí realita života na Slovensku?",
        format_thousands(estimate)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_text_uses_formatted_estimate() {
        let text = build_share_text(2010);
        assert!(text.starts_with("Moje reálne mesačné náklady na život: 2 010 €."));
        assert!(text.ends_with("Koľko stojí realita života na Slovensku?"));
    }

    #[test]
    fn test_share_text_small_value() {
        assert!(build_share_text(630).contains(": 630 €."));
    }
}
