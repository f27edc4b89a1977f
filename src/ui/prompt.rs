use anyhow::Result;
use inquire::InquireError;

/// Unwraps a prompt result, turning Esc or Ctrl+C into `None`.
///
/// Both the chat input line and the configure wizard treat a cancelled
/// prompt as "stop here" rather than as a failure.
pub fn answered<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
