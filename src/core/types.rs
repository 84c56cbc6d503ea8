use std::fmt;

use serde::Serialize;

/// Caller-supplied parameters for one Coast FIRE calculation.
///
/// Amounts are in the base currency unit (10,000 yen). Rates are fractional,
/// so `0.05` means 5% a year. Ages are whole numbers carried as `f64` so that
/// non-finite values can be rejected by validation rather than by the type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoastFireInput {
    /// Target assets in present-day purchasing power.
    pub target_amount: f64,
    pub target_age: f64,
    pub current_age: f64,
    pub return_rate: f64,
    pub inflation_rate: f64,
}

impl Default for CoastFireInput {
    fn default() -> Self {
        Self {
            target_amount: 2000.0,
            target_age: 65.0,
            current_age: 28.0,
            return_rate: 0.05,
            inflation_rate: 0.02,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    TargetAmount,
    CurrentAge,
    TargetAge,
    ReturnRate,
    InflationRate,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InputField::TargetAmount => "target amount",
            InputField::CurrentAge => "current age",
            InputField::TargetAge => "target age",
            InputField::ReturnRate => "return rate",
            InputField::InflationRate => "inflation rate",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyData {
    pub age: u32,
    /// Nominal projected assets at `age`.
    pub amount: f64,
    /// `amount` deflated back to present-day purchasing power.
    pub inflation_adjusted: f64,
    /// Cumulative real growth since the current age, in percent.
    pub real_return: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoastFireResult {
    pub required_amount: f64,
    pub yearly_data: Vec<YearlyData>,
    pub real_return_rate: f64,
    pub investment_years: u32,
    pub target_nominal_amount: f64,
}
