use crate::newtypes::{CommentId, CommentLikeId, PostId, UserId};
use crate::schema::{comment, comment_like};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = comment)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A comment on a post.
pub struct Comment {
  pub id: CommentId,
  pub creator_id: UserId,
  pub post_id: PostId,
  pub content: String,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, derive_new::new, Insertable, AsChangeset)]
#[diesel(table_name = comment)]
pub struct CommentInsertForm {
  pub creator_id: UserId,
  pub post_id: PostId,
  pub content: String,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = comment)]
pub struct CommentUpdateForm {
  pub content: Option<String>,
  pub updated: Option<Option<DateTime<Utc>>>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = comment_like)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CommentLike {
  pub id: CommentLikeId,
  pub user_id: UserId,
  pub comment_id: CommentId,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new, Insertable)]
#[diesel(table_name = comment_like)]
pub struct CommentLikeForm {
  pub user_id: UserId,
  pub comment_id: CommentId,
}
