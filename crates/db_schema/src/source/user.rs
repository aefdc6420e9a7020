use crate::{newtypes::UserId, schema::user_, sensitive::SensitiveString};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = user_)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A registered user.
pub struct User {
  pub id: UserId,
  pub username: String,
  pub email: String,
  #[serde(skip)]
  pub password_encrypted: SensitiveString,
  pub phone: Option<String>,
  pub admin: bool,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, derive_new::new)]
#[derive(Insertable, AsChangeset)]
#[diesel(table_name = user_)]
pub struct UserInsertForm {
  pub username: String,
  pub email: String,
  /// Hashing happens in the (out of scope) auth layer; the store
  /// receives the encrypted form as-is.
  pub password_encrypted: SensitiveString,
  #[new(default)]
  pub phone: Option<String>,
  #[new(default)]
  pub admin: Option<bool>,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = user_)]
pub struct UserUpdateForm {
  pub email: Option<String>,
  pub password_encrypted: Option<SensitiveString>,
  pub phone: Option<Option<String>>,
  pub admin: Option<bool>,
  pub updated: Option<Option<DateTime<Utc>>>,
}

impl UserInsertForm {
  pub fn test_form(username: &str) -> Self {
    Self::new(
      username.to_string(),
      format!("{username}@example.com"),
      "changeme".into(),
    )
  }
}
