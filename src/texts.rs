// 🇸🇰 Texts - Fixed Slovak copy shared by the terminal and web front ends

use chrono::{Datelike, Utc};

pub const PROJECT_NAME: &str = "Koľko stojí realita";
pub const HEADLINE: &str = "Koľko ťa reálne stojí";
pub const HEADLINE_SUB: &str = "život na Slovensku?";
pub const TAGLINE: &str = "4 otázky. 30 sekúnd. Realita.";
pub const DESCRIPTION: &str = "Väčšina ľudí netuší, koľko ich reálne stojí život.";
pub const LOCALE: &str = "sk_SK";

pub const QUESTION_REGION: &str = "Kde žiješ?";
pub const QUESTION_HOUSING: &str = "Ako bývaš?";
pub const QUESTION_CHILDREN: &str = "Počet detí";
pub const QUESTION_CAR: &str = "Máš auto?";
pub const CALCULATE: &str = "Vypočítať";

pub const RESULT_TITLE: &str = "Tvoje reálne mesačné náklady";
pub const PER_MONTH: &str = "€ / mesiac";
pub const OTHER_REGIONS: &str = "Čo keby som žil v inom kraji?";
pub const DISCLAIMER: &str = "Toto nie je oficiálna štatistika. Ide o realistický odhad založený na bežných životných nákladoch.";

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Áno"
    } else {
        "Nie"
    }
}

/// Footer line for a given year
pub fn footer_for_year(year: i32) -> String {
    format!("{} {}", year, PROJECT_NAME)
}

/// Footer line with the current year
pub fn footer() -> String {
    footer_for_year(Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_for_year() {
        assert_eq!(footer_for_year(2025), "2025 Koľko stojí realita");
    }

    #[test]
    fn test_footer_uses_current_year() {
        assert!(footer().starts_with(&Utc::now().year().to_string()));
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "Áno");
        assert_eq!(yes_no(false), "Nie");
    }
}
