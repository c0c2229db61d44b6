// 📋 Estimate Report - Everything a front end shows for one set of answers

use crate::commentary::{comment_for, CommentCategory};
use crate::estimator::CostInput;
use crate::format::format_thousands;
use crate::scenarios::{compare_regions, RegionEstimate};
use crate::share::{build_share_text, SHARE_TITLE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateReport {
    pub input: CostInput,
    pub estimate: u64,
    pub formatted: String,
    pub category: CommentCategory,
    pub message: String,
    pub share_title: String,
    pub share_text: String,
    pub other_regions: Vec<RegionEstimate>,
}

impl EstimateReport {
    pub fn new(input: CostInput) -> Self {
        let estimate = input.estimate();
        let category = comment_for(estimate);

        EstimateReport {
            input,
            estimate,
            formatted: format_thousands(estimate),
            category,
            message: category.message().to_string(),
            share_title: SHARE_TITLE.to_string(),
            share_text: build_share_text(estimate),
            other_regions: compare_regions(&input),
        }
    }
}
