mod engine;
mod error;
mod format;
mod types;

pub use engine::{
    CURRENT_AGE_MAX, CURRENT_AGE_MIN, INFLATION_RATE_MAX, RETURN_RATE_MAX, TARGET_AGE_MAX,
    TARGET_AGE_MIN, TARGET_AMOUNT_MAX, TARGET_AMOUNT_MIN, calculate, real_return_rate,
};
pub use error::CoastFireError;
pub use format::{BASE_UNIT_LABEL, format_amount, format_percentage, format_percentage_default};
pub use types::{CoastFireInput, CoastFireResult, InputField, YearlyData};
