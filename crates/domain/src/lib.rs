#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod message;
mod package;
mod report;
mod training;

pub use error::ReportError;
pub use message::{InfoMessage, Locale};
pub use package::{Package, PackageError, WorkoutType, resolve};
pub use report::{process, report};
pub use training::{
    LEN_STEP, M_IN_KM, MIN_IN_H, Running, SportsWalking, Swimming, Training, TrainingSample,
};
