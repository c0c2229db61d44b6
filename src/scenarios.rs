// 🗺️ Scenarios - "What if I lived elsewhere?" and the full estimate table
// Everything here is derived from the estimator; nothing is stored

use crate::commentary::{comment_for, CommentCategory};
use crate::estimator::{CostInput, HousingType, Region};
use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::io;

// ============================================================================
// REGION COMPARISON
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionEstimate {
    pub region: Region,
    pub label: String,
    pub estimate: u64,
    /// Difference to the estimate of the compared input (negative = cheaper)
    pub difference: i64,
}

/// Estimates for every region except the input's own, in display order
pub fn compare_regions(input: &CostInput) -> Vec<RegionEstimate> {
    let own = input.estimate() as i64;

    Region::ALL
        .iter()
        .filter(|region| **region != input.region)
        .map(|region| {
            let estimate = input.with_region(*region).estimate();
            RegionEstimate {
                region: *region,
                label: region.label().to_string(),
                estimate,
                difference: estimate as i64 - own,
            }
        })
        .collect()
}

// ============================================================================
// SCENARIO TABLE
// ============================================================================

/// One row of the scenario table (flat, so it serializes straight to CSV)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub region: Region,
    pub housing: HousingType,
    pub children: u32,
    pub has_car: bool,
    pub estimate: u64,
    pub category: CommentCategory,
}

impl Scenario {
    pub fn from_input(input: &CostInput) -> Self {
        let estimate = input.estimate();
        Scenario {
            region: input.region,
            housing: input.housing,
            children: input.children,
            has_car: input.has_car,
            estimate,
            category: comment_for(estimate),
        }
    }
}

/// Largest child count the scenario table is built for (24 rows per child)
pub const MAX_TABLE_CHILDREN: u32 = 20;

/// Every region × housing × 0..=max_children × car combination
pub fn scenario_table(max_children: u32) -> Vec<Scenario> {
    let mut rows = Vec::with_capacity(
        Region::ALL.len() * HousingType::ALL.len() * (max_children as usize + 1) * 2,
    );

    for region in Region::ALL {
        for housing in HousingType::ALL {
            for children in 0..=max_children {
                for has_car in [false, true] {
                    let input = CostInput::new(region, housing, children, has_car);
                    rows.push(Scenario::from_input(&input));
                }
            }
        }
    }

    rows
}

/// Write scenarios as CSV (header row included)
pub fn write_scenarios_csv<W: io::Write>(writer: W, scenarios: &[Scenario]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for scenario in scenarios {
        wtr.serialize(scenario).context("Failed to serialize scenario")?;
    }

    wtr.flush().context("Failed to flush CSV output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_excludes_own_region() {
        let input = CostInput::new(Region::Stred, HousingType::Najom, 1, false);
        let others = compare_regions(&input);

        assert_eq!(others.len(), 3);
        assert!(others.iter().all(|r| r.region != Region::Stred));
        assert_eq!(
            others.iter().map(|r| r.region).collect::<Vec<_>>(),
            vec![Region::Bratislava, Region::Zapad, Region::Vychod]
        );
    }

    #[test]
    fn test_compare_differences() {
        // Bratislava, rental, no kids, no car = 1310
        let input = CostInput::default();
        let others = compare_regions(&input);

        let zapad = others.iter().find(|r| r.region == Region::Zapad).unwrap();
        assert_eq!(zapad.estimate, 1170);
        assert_eq!(zapad.difference, -140);

        let vychod = others.iter().find(|r| r.region == Region::Vychod).unwrap();
        assert_eq!(vychod.estimate, 1030);
        assert_eq!(vychod.difference, -280);
        assert_eq!(vychod.label, "Východ SR");
    }

    #[test]
    fn test_scenario_table_size() {
        assert_eq!(scenario_table(0).len(), 4 * 3 * 2);
        assert_eq!(scenario_table(3).len(), 4 * 3 * 4 * 2);
    }

    #[test]
    fn test_scenario_rows_match_estimator() {
        for row in scenario_table(2) {
            let input = CostInput::new(row.region, row.housing, row.children, row.has_car);
            assert_eq!(row.estimate, input.estimate());
            assert_eq!(row.category, comment_for(row.estimate));
        }
    }

    #[test]
    fn test_write_scenarios_csv() {
        let rows = scenario_table(0);
        let mut out = Vec::new();
        write_scenarios_csv(&mut out, &rows).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("region,housing,children,has_car,estimate,category")
        );
        assert_eq!(lines.next(), Some("bratislava,najom,0,false,1310,typical"));
        assert_eq!(text.lines().count(), rows.len() + 1);
    }
}
