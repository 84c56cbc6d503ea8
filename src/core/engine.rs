use super::error::CoastFireError;
use super::types::{CoastFireInput, CoastFireResult, InputField, YearlyData};

pub const TARGET_AMOUNT_MIN: f64 = 100.0;
pub const TARGET_AMOUNT_MAX: f64 = 100_000.0;
pub const CURRENT_AGE_MIN: f64 = 0.0;
pub const CURRENT_AGE_MAX: f64 = 99.0;
pub const TARGET_AGE_MIN: f64 = 30.0;
pub const TARGET_AGE_MAX: f64 = 100.0;
pub const RETURN_RATE_MAX: f64 = 0.20;
pub const INFLATION_RATE_MAX: f64 = 0.10;

/// Back-solves the capital needed today and projects it year by year.
///
/// The present value is discounted at the Fisher real rate, so the
/// inflation-adjusted value of the last yearly entry lands on
/// `target_amount`. Fails on the first violated input constraint; ages must
/// also be whole numbers, which is checked after every other rule.
pub fn calculate(input: &CoastFireInput) -> Result<CoastFireResult, CoastFireError> {
    validate_input(input)?;

    // Validation guarantees whole, ordered ages within [0, 100].
    let current_age = input.current_age as u32;
    let target_age = input.target_age as u32;
    let investment_years = target_age - current_age;

    let real_return_rate = real_return_rate(input.return_rate, input.inflation_rate);
    let required_amount =
        input.target_amount / (1.0 + real_return_rate).powi(investment_years as i32);
    let target_nominal_amount =
        required_amount * (1.0 + input.return_rate).powi(investment_years as i32);

    let yearly_data = (current_age..=target_age)
        .map(|age| {
            project_year(
                required_amount,
                input.return_rate,
                input.inflation_rate,
                age,
                age - current_age,
            )
        })
        .collect();

    Ok(CoastFireResult {
        required_amount,
        yearly_data,
        real_return_rate,
        investment_years,
        target_nominal_amount,
    })
}

/// Exact Fisher relation, not the `nominal - inflation` approximation.
pub fn real_return_rate(return_rate: f64, inflation_rate: f64) -> f64 {
    (1.0 + return_rate) / (1.0 + inflation_rate) - 1.0
}

fn project_year(
    required_amount: f64,
    return_rate: f64,
    inflation_rate: f64,
    age: u32,
    years_elapsed: u32,
) -> YearlyData {
    let n = years_elapsed as i32;
    let amount = required_amount * (1.0 + return_rate).powi(n);
    let inflation_adjusted = amount / (1.0 + inflation_rate).powi(n);
    let real_return = if years_elapsed == 0 {
        0.0
    } else {
        (inflation_adjusted / required_amount - 1.0) * 100.0
    };

    YearlyData {
        age,
        amount,
        inflation_adjusted,
        real_return,
    }
}

fn validate_input(input: &CoastFireInput) -> Result<(), CoastFireError> {
    let fields = [
        (InputField::TargetAmount, input.target_amount),
        (InputField::CurrentAge, input.current_age),
        (InputField::TargetAge, input.target_age),
        (InputField::ReturnRate, input.return_rate),
        (InputField::InflationRate, input.inflation_rate),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(CoastFireError::non_finite(field));
        }
    }

    if input.target_amount <= 0.0 {
        return Err(CoastFireError::out_of_range(
            InputField::TargetAmount,
            "target amount must be a positive value".to_string(),
        ));
    }
    if !(TARGET_AMOUNT_MIN..=TARGET_AMOUNT_MAX).contains(&input.target_amount) {
        return Err(CoastFireError::out_of_range(
            InputField::TargetAmount,
            format!("target amount must be between {TARGET_AMOUNT_MIN} and {TARGET_AMOUNT_MAX}"),
        ));
    }

    if !(CURRENT_AGE_MIN..=CURRENT_AGE_MAX).contains(&input.current_age) {
        return Err(CoastFireError::out_of_range(
            InputField::CurrentAge,
            format!("current age must be between {CURRENT_AGE_MIN} and {CURRENT_AGE_MAX}"),
        ));
    }

    if input.target_age < 0.0 {
        return Err(CoastFireError::out_of_range(
            InputField::TargetAge,
            "target age must be 0 or greater".to_string(),
        ));
    }
    // Ordering is reported ahead of the target age band.
    if input.target_age <= input.current_age {
        return Err(CoastFireError::InvalidOrder {
            message: "target age must be greater than current age".to_string(),
        });
    }
    if !(TARGET_AGE_MIN..=TARGET_AGE_MAX).contains(&input.target_age) {
        return Err(CoastFireError::out_of_range(
            InputField::TargetAge,
            format!("target age must be between {TARGET_AGE_MIN} and {TARGET_AGE_MAX}"),
        ));
    }

    if !(0.0..=RETURN_RATE_MAX).contains(&input.return_rate) {
        return Err(CoastFireError::out_of_range(
            InputField::ReturnRate,
            format!("return rate must be between 0% and {}%", RETURN_RATE_MAX * 100.0),
        ));
    }
    if !(0.0..=INFLATION_RATE_MAX).contains(&input.inflation_rate) {
        return Err(CoastFireError::out_of_range(
            InputField::InflationRate,
            format!(
                "inflation rate must be between 0% and {}%",
                INFLATION_RATE_MAX * 100.0
            ),
        ));
    }

    for (field, value) in [
        (InputField::CurrentAge, input.current_age),
        (InputField::TargetAge, input.target_age),
    ] {
        if value.fract() != 0.0 {
            return Err(CoastFireError::out_of_range(
                field,
                format!("{field} must be a whole number of years"),
            ));
        }
    }

    Ok(())
}
