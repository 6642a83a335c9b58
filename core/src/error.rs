use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KataError {
    #[error("No data supplied for analysis")]
    EmptyInput,

    #[error("No day with revenue greater than zero was found")]
    NoValidRevenue,

    #[error("Total revenue is zero, percentages are undefined")]
    ZeroTotal,

    #[error("Negative numbers are not allowed: {0}")]
    NegativeNumber(i64),

    #[error("Input text must not be empty")]
    EmptyText,
}
