use log::error;

use crate::{Locale, Package, ReportError, resolve};

/// Compute and render the metrics of a single package.
pub fn process(package: &Package, locale: Locale) -> Result<String, ReportError> {
    let training = resolve(&package.workout_type, &package.data)?;
    let summary = training.summary();

    if !summary.is_finite() {
        return Err(ReportError::DivisionByZero(summary.training_type));
    }

    Ok(summary.render(locale))
}

/// Process all packages in order.
///
/// A failing package does not affect the processing of the remaining packages.
#[must_use]
pub fn report(packages: &[Package], locale: Locale) -> Vec<Result<String, ReportError>> {
    packages
        .iter()
        .enumerate()
        .map(|(i, package)| {
            let result = process(package, locale);
            if let Err(ref err) = result {
                error!(
                    "failed to process package {} ({}): {err}",
                    i + 1,
                    package.workout_type
                );
            }
            result
        })
        .collect()
}
