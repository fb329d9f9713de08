use serde::{ser::Serializer, Serialize};

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the bridge as short human-readable strings.
///
/// User cancellation is never an error: cancelled operations resolve with
/// `Ok(None)` so the caller can tell "nothing picked" apart from failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Tauri(#[from] tauri::Error),
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("picker closed without a response")]
    DialogClosed(#[from] tokio::sync::oneshot::error::RecvError),
    #[error("another picker is already open")]
    PickerBusy,
    #[error("unsupported file location: {0}")]
    UnsupportedLocation(String),
    #[error("{0}")]
    Picker(String),
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_serialize_as_strings() {
        let json = serde_json::to_value(&Error::PickerBusy).unwrap();
        assert_eq!(json, serde_json::json!("another picker is already open"));

        let json = serde_json::to_value(&Error::Picker("save dialog failed".into())).unwrap();
        assert_eq!(json, serde_json::json!("save dialog failed"));
    }

    #[test]
    fn test_base64_error_mentions_payload() {
        use base64::{engine::general_purpose::STANDARD, Engine};

        let err: Error = STANDARD.decode("not base64!").unwrap_err().into();
        assert!(err.to_string().starts_with("invalid base64 payload"));
    }
}
