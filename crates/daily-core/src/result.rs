use crate::error::DailyError;

pub type DailyResult<T> = Result<T, DailyError>;
