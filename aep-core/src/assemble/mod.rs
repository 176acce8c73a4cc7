//! Assembly of the project graph out of the raw chunk tree.

pub mod item;
pub mod layer;
pub mod project;
pub mod property;
pub mod render_queue;
pub mod text;

pub use project::parse_project;

use crate::foundation::error::AepResult;

/// Downgrade a recoverable decode failure to a warning. Structural
/// failures stay fatal.
pub(crate) fn recover<T>(
    result: AepResult<T>,
    warnings: &mut Vec<String>,
) -> AepResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if !err.is_fatal() => {
            warnings.push(err.to_string());
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
