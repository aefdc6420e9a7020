use fotogram_db_schema::newtypes::{PostId, TagId};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Explicitly create a tag. The name is normalized before storage, so
/// `#Sunset` and `sunset` name the same tag.
pub struct CreateTag {
  pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Attach a tag to a post, creating the tag on the fly if needed.
pub struct AddTagToPost {
  pub post_id: PostId,
  pub tag_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Detach a tag from a post. The tag itself is left in place.
pub struct RemoveTagFromPost {
  pub post_id: PostId,
  pub tag_id: TagId,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Find posts whose tags contain the query. The query must carry a
/// leading `#`.
pub struct SearchPostsByHashtag {
  pub q: String,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// List the posts carrying one exact tag.
pub struct GetPostsByTag {
  pub tag_name: String,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}
