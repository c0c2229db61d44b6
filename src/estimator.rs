// 🧮 Cost Estimator - Monthly cost of living as a pure function
// Region scales a base cost, housing adds a fixed amount, children and car add flat costs
//
// estimate = round(700 × multiplier + housing + 250 × children + (car ? 200 : 0))

use crate::error::{InvalidInput, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// MODEL CONSTANTS (EUR / month)
// ============================================================================

pub const BASE_COST: u32 = 700;
pub const CHILD_COST: u32 = 250;
pub const CAR_COST: u32 = 200;

// ============================================================================
// REGION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Capital region
    Bratislava,

    /// West
    Zapad,

    /// Central
    Stred,

    /// East
    Vychod,
}

impl Region {
    /// All regions in display order
    pub const ALL: [Region; 4] = [Region::Bratislava, Region::Zapad, Region::Stred, Region::Vychod];

    pub fn multiplier(&self) -> f64 {
        match self {
            Region::Bratislava => 1.3,
            Region::Zapad => 1.1,
            Region::Stred => 1.0,
            Region::Vychod => 0.9,
        }
    }

    /// Stable key used on the command line, in URLs and in JSON
    pub fn key(&self) -> &'static str {
        match self {
            Region::Bratislava => "bratislava",
            Region::Zapad => "zapad",
            Region::Stred => "stred",
            Region::Vychod => "vychod",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::Bratislava => "Bratislava",
            Region::Zapad => "Západ SR",
            Region::Stred => "Stred SR",
            Region::Vychod => "Východ SR",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Region::Bratislava => Region::Zapad,
            Region::Zapad => Region::Stred,
            Region::Stred => Region::Vychod,
            Region::Vychod => Region::Bratislava,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Region::Bratislava => Region::Vychod,
            Region::Zapad => Region::Bratislava,
            Region::Stred => Region::Zapad,
            Region::Vychod => Region::Stred,
        }
    }
}

impl FromStr for Region {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "bratislava" | "capital" => Ok(Region::Bratislava),
            "zapad" | "west" => Ok(Region::Zapad),
            "stred" | "central" => Ok(Region::Stred),
            "vychod" | "east" => Ok(Region::Vychod),
            _ => Err(InvalidInput::UnknownRegion(s.to_string())),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// HOUSING TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HousingType {
    /// Rental
    Najom,

    /// Mortgage
    Hypoteka,

    /// Living with parents
    Rodicia,
}

impl HousingType {
    pub const ALL: [HousingType; 3] = [HousingType::Najom, HousingType::Hypoteka, HousingType::Rodicia];

    /// Fixed monthly housing cost in EUR
    pub fn fixed_cost(&self) -> u32 {
        match self {
            HousingType::Najom => 400,
            HousingType::Hypoteka => 300,
            HousingType::Rodicia => 0,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            HousingType::Najom => "najom",
            HousingType::Hypoteka => "hypoteka",
            HousingType::Rodicia => "rodicia",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HousingType::Najom => "Nájom",
            HousingType::Hypoteka => "Hypotéka",
            HousingType::Rodicia => "Bývam u rodičov",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            HousingType::Najom => HousingType::Hypoteka,
            HousingType::Hypoteka => HousingType::Rodicia,
            HousingType::Rodicia => HousingType::Najom,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            HousingType::Najom => HousingType::Rodicia,
            HousingType::Hypoteka => HousingType::Najom,
            HousingType::Rodicia => HousingType::Hypoteka,
        }
    }
}

impl FromStr for HousingType {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "najom" | "rental" => Ok(HousingType::Najom),
            "hypoteka" | "mortgage" => Ok(HousingType::Hypoteka),
            "rodicia" | "parents" => Ok(HousingType::Rodicia),
            _ => Err(InvalidInput::UnknownHousing(s.to_string())),
        }
    }
}

impl fmt::Display for HousingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// ESTIMATE
// ============================================================================

/// Estimate the monthly cost of living in EUR.
///
/// Total for every region/housing pair and any child count. Halves round
/// away from zero (`f64::round`); the current constants never produce one.
pub fn estimate(region: Region, housing: HousingType, children: u32, has_car: bool) -> u64 {
    let base = f64::from(BASE_COST) * region.multiplier();
    let housing_cost = f64::from(housing.fixed_cost());
    let children_cost = f64::from(children) * f64::from(CHILD_COST);
    let car_cost = if has_car { f64::from(CAR_COST) } else { 0.0 };

    (base + housing_cost + children_cost + car_cost).round() as u64
}

// ============================================================================
// VALIDATED INPUT
// ============================================================================

/// The four calculator answers, already validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostInput {
    pub region: Region,
    pub housing: HousingType,
    pub children: u32,
    pub has_car: bool,
}

impl CostInput {
    pub fn new(region: Region, housing: HousingType, children: u32, has_car: bool) -> Self {
        CostInput {
            region,
            housing,
            children,
            has_car,
        }
    }

    /// Build an input from raw boundary values, rejecting anything out of range
    pub fn parse(region: &str, housing: &str, children: i64, has_car: bool) -> Result<Self> {
        let region = region.parse::<Region>()?;
        let housing = housing.parse::<HousingType>()?;
        if children < 0 {
            return Err(InvalidInput::NegativeChildren(children));
        }
        let children = u32::try_from(children).map_err(|_| InvalidInput::TooManyChildren(children))?;

        Ok(CostInput::new(region, housing, children, has_car))
    }

    pub fn estimate(&self) -> u64 {
        estimate(self.region, self.housing, self.children, self.has_car)
    }

    /// Same answers, different region
    pub fn with_region(&self, region: Region) -> Self {
        CostInput { region, ..*self }
    }
}

impl Default for CostInput {
    fn default() -> Self {
        CostInput::new(Region::Bratislava, HousingType::Najom, 0, false)
    }
}

// ============================================================================
// TESTS
// ============================================================================
