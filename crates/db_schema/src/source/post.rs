use crate::newtypes::{DbUrl, PostId, PostLikeId, UserId};
use crate::schema::{post, post_like};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = post)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A post. Read-only from the tag subsystem's perspective except for
/// existence checks.
pub struct Post {
  pub id: PostId,
  pub title: String,
  pub description: String,
  pub image_url: DbUrl,
  pub creator_id: UserId,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, derive_new::new, Insertable, AsChangeset)]
#[diesel(table_name = post)]
pub struct PostInsertForm {
  pub title: String,
  pub description: String,
  pub image_url: DbUrl,
  pub creator_id: UserId,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = post)]
pub struct PostUpdateForm {
  pub title: Option<String>,
  pub description: Option<String>,
  pub image_url: Option<DbUrl>,
  pub updated: Option<Option<DateTime<Utc>>>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = post_like)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PostLike {
  pub id: PostLikeId,
  pub user_id: UserId,
  pub post_id: PostId,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new, Insertable)]
#[diesel(table_name = post_like)]
pub struct PostLikeForm {
  pub user_id: UserId,
  pub post_id: PostId,
}
