use crate::{PackageError, WorkoutType};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    #[error(transparent)]
    Package(#[from] PackageError),
    #[error("division by zero in {0} package")]
    DivisionByZero(WorkoutType),
}
