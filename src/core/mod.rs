pub mod currency;
pub mod error;

pub use currency::Inr;
pub use error::{AppError, Result, TotalsError};
