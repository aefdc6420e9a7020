use crate::response::ApiResponse;
use serde::{Deserialize, Serialize};
use std::{backtrace::Backtrace, fmt, fmt::Debug};
use strum::{Display, EnumIter};

pub type FotogramResult<T> = Result<T, FotogramError>;

#[derive(Display, Debug, Serialize, Deserialize, Clone, PartialEq, Eq, EnumIter, Hash)]
#[serde(tag = "error", content = "message", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum FotogramErrorType {
  // Validation failures, surfaced as 400.
  EmptyTagName,
  MissingSearchQuery,
  MissingHashtagPrefix,
  // Absent rows, surfaced as 404.
  NotFound,
  PostNotFound,
  AssociationNotFound,
  // Uniqueness conflicts, surfaced as 409.
  TagAlreadyExists,
  TagAlreadyAssociated,
  PostAlreadyLiked,
  CommentAlreadyLiked,
  UserAlreadyExists,
  /// Any unexpected data-store failure, surfaced as 500 with the
  /// underlying error text kept for diagnostics.
  Unknown(String),
}

pub struct FotogramError {
  pub error_type: FotogramErrorType,
  pub inner: anyhow::Error,
  pub context: Backtrace,
}

impl<T> From<T> for FotogramError
where
  T: Into<anyhow::Error>,
{
  fn from(t: T) -> Self {
    let cause = t.into();
    let error_type = match cause.downcast_ref::<diesel::result::Error>() {
      Some(&diesel::NotFound) => FotogramErrorType::NotFound,
      _ => FotogramErrorType::Unknown(format!("{}", &cause)),
    };
    FotogramError {
      error_type,
      inner: cause,
      context: Backtrace::capture(),
    }
  }
}

impl Debug for FotogramError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FotogramError")
      .field("message", &self.error_type)
      .field("inner", &self.inner)
      .field("context", &self.context)
      .finish()
  }
}

impl fmt::Display for FotogramError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}: ", &self.error_type)?;
    writeln!(f, "{}", self.inner)?;
    fmt::Display::fmt(&self.context, f)
  }
}

impl actix_web::error::ResponseError for FotogramError {
  fn status_code(&self) -> actix_web::http::StatusCode {
    use actix_web::http::StatusCode;
    use FotogramErrorType::*;
    match &self.error_type {
      EmptyTagName | MissingSearchQuery | MissingHashtagPrefix => StatusCode::BAD_REQUEST,
      NotFound | PostNotFound | AssociationNotFound => StatusCode::NOT_FOUND,
      TagAlreadyExists | TagAlreadyAssociated | PostAlreadyLiked | CommentAlreadyLiked
      | UserAlreadyExists => StatusCode::CONFLICT,
      Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  /// Even a 500 renders the uniform envelope, never a bare failure.
  fn error_response(&self) -> actix_web::HttpResponse {
    actix_web::HttpResponse::build(self.status_code())
      .json(ApiResponse::<()>::from_error(&self.error_type))
  }
}

impl From<FotogramErrorType> for FotogramError {
  fn from(error_type: FotogramErrorType) -> Self {
    let inner = anyhow::anyhow!("{}", error_type);
    FotogramError {
      error_type,
      inner,
      context: Backtrace::capture(),
    }
  }
}

pub trait FotogramErrorExt<T, E: Into<anyhow::Error>> {
  fn with_fotogram_type(self, error_type: FotogramErrorType) -> FotogramResult<T>;
}

impl<T, E: Into<anyhow::Error>> FotogramErrorExt<T, E> for Result<T, E> {
  fn with_fotogram_type(self, error_type: FotogramErrorType) -> FotogramResult<T> {
    self.map_err(|error| FotogramError {
      error_type,
      inner: error.into(),
      context: Backtrace::capture(),
    })
  }
}

pub trait FotogramErrorExt2<T> {
  fn with_fotogram_type(self, error_type: FotogramErrorType) -> FotogramResult<T>;
  fn into_anyhow(self) -> Result<T, anyhow::Error>;
}

impl<T> FotogramErrorExt2<T> for FotogramResult<T> {
  fn with_fotogram_type(self, error_type: FotogramErrorType) -> FotogramResult<T> {
    self.map_err(|mut e| {
      e.error_type = error_type;
      e
    })
  }
  // this function can't be an impl From or similar because it would conflict with one of the
  // other broad Into<> implementations
  fn into_anyhow(self) -> Result<T, anyhow::Error> {
    self.map_err(|e| e.inner)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{body::MessageBody, ResponseError};
  use pretty_assertions::assert_eq;

  #[test]
  fn renders_envelope_without_message() -> FotogramResult<()> {
    let err = FotogramError::from(FotogramErrorType::EmptyTagName).error_response();
    let json = String::from_utf8(err.into_body().try_into_bytes().unwrap_or_default().to_vec())?;
    assert_eq!(&json, "{\"success\":false,\"error\":\"empty_tag_name\"}");

    Ok(())
  }

  #[test]
  fn renders_envelope_with_diagnostics() -> FotogramResult<()> {
    let store_error = FotogramErrorType::Unknown(String::from("connection refused"));
    let err = FotogramError::from(store_error).error_response();
    let json = String::from_utf8(err.into_body().try_into_bytes().unwrap_or_default().to_vec())?;
    assert_eq!(
      &json,
      "{\"success\":false,\"message\":\"unexpected data store failure\",\"error\":\"connection refused\"}"
    );

    Ok(())
  }

  #[test]
  fn test_convert_diesel_errors() {
    let not_found_error = FotogramError::from(diesel::NotFound);
    assert_eq!(FotogramErrorType::NotFound, not_found_error.error_type);
    assert_eq!(404, not_found_error.status_code());

    let other_error = FotogramError::from(diesel::result::Error::NotInTransaction);
    assert!(matches!(
      other_error.error_type,
      FotogramErrorType::Unknown { .. }
    ));
    assert_eq!(500, other_error.status_code());
  }

  #[test]
  fn test_status_codes() {
    let case = |error_type: FotogramErrorType, code: u16| {
      assert_eq!(code, FotogramError::from(error_type).status_code());
    };
    case(FotogramErrorType::MissingSearchQuery, 400);
    case(FotogramErrorType::MissingHashtagPrefix, 400);
    case(FotogramErrorType::PostNotFound, 404);
    case(FotogramErrorType::AssociationNotFound, 404);
    case(FotogramErrorType::TagAlreadyExists, 409);
    case(FotogramErrorType::TagAlreadyAssociated, 409);
  }
}
