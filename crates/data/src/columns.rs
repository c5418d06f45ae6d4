//! Names of the columns that every dataset must provide.

/// Per capita crime rate.
pub const CRIME_RATE: &str = "CRIM";
/// Proportion of residential land zoned for large lots.
pub const ZONING: &str = "ZN";
/// Proportion of non-retail business acres.
pub const INDUSTRIAL: &str = "INDUS";
/// Charles River proximity flag.
pub const CHARLES_RIVER: &str = "CHAS";
/// Nitric oxides concentration.
pub const NOX: &str = "NOX";
/// Average number of rooms per dwelling.
pub const ROOMS: &str = "RM";
/// Proportion of units built before 1940.
pub const AGE: &str = "AGE";
/// Weighted distance to the employment centres.
pub const DISTANCE: &str = "DIS";
/// Index of accessibility to radial highways.
pub const RADIAL_HIGHWAY: &str = "RAD";
/// Full-value property tax rate.
pub const TAX_RATE: &str = "TAX";
/// Pupil-teacher ratio.
pub const PUPIL_TEACHER_RATIO: &str = "PTRATIO";
/// Percentage of lower status population.
pub const LOWER_STATUS: &str = "LSTAT";
/// Predicted price in thousands.
pub const PREDICTED_PRICE: &str = "PredictedPrice";

/// All required columns. The order is the canonical order of the source file.
pub const REQUIRED: [&str; 13] = [
    CRIME_RATE,
    ZONING,
    INDUSTRIAL,
    CHARLES_RIVER,
    NOX,
    ROOMS,
    AGE,
    DISTANCE,
    RADIAL_HIGHWAY,
    TAX_RATE,
    PUPIL_TEACHER_RATIO,
    LOWER_STATUS,
    PREDICTED_PRICE,
];
