//! Error Types for the Backtest Core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BacktestError>;

#[derive(Error, Debug)]
pub enum BacktestError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Division by zero: {0}")]
    DivisionByZero(String),
}
