use diesel_derive_newtype::DieselNewType;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A string that should never appear in logs or debug output, such as a
/// password hash.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default, DieselNewType)]
#[serde(transparent)]
pub struct SensitiveString(String);

impl SensitiveString {
  pub fn into_inner(self) -> String {
    self.0
  }
}

impl Debug for SensitiveString {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Sensitive").finish()
  }
}

impl AsRef<str> for SensitiveString {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl From<String> for SensitiveString {
  fn from(t: String) -> Self {
    SensitiveString(t)
  }
}

impl From<&str> for SensitiveString {
  fn from(t: &str) -> Self {
    SensitiveString(t.into())
  }
}
