// 💬 Commentary - Which message goes with a result
// Three bands keyed on the estimate; both boundaries belong to the middle band

use serde::{Deserialize, Serialize};

pub const TYPICAL_FROM: u64 = 1200;
pub const TYPICAL_UNTIL: u64 = 1600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentCategory {
    /// Below 1200 EUR
    Modest,

    /// 1200 - 1600 EUR inclusive
    Typical,

    /// Above 1600 EUR
    High,
}

impl CommentCategory {
    pub fn key(&self) -> &'static str {
        match self {
            CommentCategory::Modest => "modest",
            CommentCategory::Typical => "typical",
            CommentCategory::High => "high",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            CommentCategory::Modest => "Žiješ veľmi skromne. Väčšina ľudí by to nezvládla.",
            CommentCategory::Typical => "Toto je realita väčšiny rodín na Slovensku.",
            CommentCategory::High => "O tejto realite sa veľmi nahlas nehovorí.",
        }
    }
}

pub fn comment_for(estimate: u64) -> CommentCategory {
    if estimate < TYPICAL_FROM {
        CommentCategory::Modest
    } else if estimate <= TYPICAL_UNTIL {
        CommentCategory::Typical
    } else {
        CommentCategory::High
    }
}
