// Koľko stojí realita - Core Library
// Exposes the cost model for use in CLI, API server, and tests

pub mod error;
pub mod estimator;
pub mod commentary;
pub mod format;
pub mod share;
pub mod scenarios;  // Region comparison + full estimate table
pub mod report;
pub mod texts;

// Re-export commonly used types
pub use error::InvalidInput;
pub use estimator::{
    CostInput, HousingType, Region,
    estimate, BASE_COST, CAR_COST, CHILD_COST,
};
pub use commentary::{comment_for, CommentCategory};
pub use format::{children_label, format_eur, format_thousands};
pub use share::{build_share_text, SHARE_TITLE};
pub use scenarios::{
    RegionEstimate, Scenario,
    compare_regions, scenario_table, write_scenarios_csv, MAX_TABLE_CHILDREN,
};
pub use report::EstimateReport;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
