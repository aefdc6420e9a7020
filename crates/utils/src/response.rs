use crate::error::FotogramErrorType;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// The uniform response envelope. Every operation outcome, including
/// 500s, is rendered through this shape.
#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiResponse<T> {
  pub success: bool,
  pub message: Option<String>,
  pub data: Option<T>,
  pub error: Option<String>,
}

impl<T> ApiResponse<T> {
  pub fn data(data: T) -> Self {
    ApiResponse {
      success: true,
      message: None,
      data: Some(data),
      error: None,
    }
  }

  pub fn message(data: T, message: &str) -> Self {
    ApiResponse {
      success: true,
      message: Some(message.to_string()),
      data: Some(data),
      error: None,
    }
  }

  /// A failed outcome that still carries data, for conflict responses
  /// where the caller wants the surviving row (e.g. duplicate tag
  /// creation returning the existing tag).
  pub fn conflict(data: T, message: &str) -> Self {
    ApiResponse {
      success: false,
      message: Some(message.to_string()),
      data: Some(data),
      error: None,
    }
  }

  /// A data-less success, for deletions.
  pub fn ok(message: &str) -> ApiResponse<T> {
    ApiResponse {
      success: true,
      message: Some(message.to_string()),
      data: None,
      error: None,
    }
  }

  pub fn from_error(error_type: &FotogramErrorType) -> Self {
    let (message, error) = match error_type {
      FotogramErrorType::Unknown(text) => (
        Some("unexpected data store failure".to_string()),
        Some(text.clone()),
      ),
      _ => (None, Some(error_type.to_string())),
    };
    ApiResponse {
      success: false,
      message,
      data: None,
      error,
    }
  }
}
