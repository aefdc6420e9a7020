use crate::newtypes::{PostId, PostTagId, TagId};
use crate::schema::{post_tag, tag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = tag)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A tag that can be attached to posts for discovery.
///
/// The name is always the canonical form produced by the normalizer:
/// lowercase, no leading `#`, unique across the instance. Tags are
/// created lazily on first use, never mutated, and never deleted, even
/// when no post references them anymore.
pub struct Tag {
  pub id: TagId,
  pub name: String,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new, Insertable)]
#[diesel(table_name = tag)]
pub struct TagInsertForm {
  /// Must already be canonical; callers normalize exactly once at the
  /// api boundary.
  pub name: String,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = post_tag)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// The many-to-many bridge between posts and tags. The (post_id,
/// tag_id) pair is unique: an association is either Absent or Present,
/// nothing in between.
pub struct PostTag {
  pub id: PostTagId,
  pub post_id: PostId,
  pub tag_id: TagId,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new, Insertable)]
#[diesel(table_name = post_tag)]
pub struct PostTagInsertForm {
  pub post_id: PostId,
  pub tag_id: TagId,
}
