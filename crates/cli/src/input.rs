use std::{fs, io, path::Path};

use pace_domain::Package;
use serde::Deserialize;

/// A package entry either as an object or in the `[code, data]` tuple form.
#[derive(Deserialize)]
#[serde(untagged)]
enum Record {
    Object {
        workout_type: String,
        data: Vec<f64>,
    },
    Tuple(String, Vec<f64>),
}

impl From<Record> for Package {
    fn from(value: Record) -> Self {
        match value {
            Record::Object { workout_type, data } | Record::Tuple(workout_type, data) => {
                Package { workout_type, data }
            }
        }
    }
}

#[must_use]
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

pub fn read_packages(path: &Path) -> Result<Vec<Package>, InputError> {
    parse_packages(&fs::read_to_string(path)?)
}

pub fn parse_packages(content: &str) -> Result<Vec<Package>, InputError> {
    Ok(serde_json::from_str::<Vec<Record>>(content)?
        .into_iter()
        .map(Package::from)
        .collect())
}

#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid packages: {0}")]
    Parse(#[from] serde_json::Error),
}
