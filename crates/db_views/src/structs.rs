use diesel::Queryable;
use fotogram_db_schema::{
  newtypes::{PostId, UserId},
  source::{
    post::Post,
    tag::{PostTag, Tag},
  },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Queryable)]
/// Just enough of a post to render it in a tag listing.
pub struct PostSummary {
  pub id: PostId,
  pub title: String,
  pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Queryable)]
pub struct UserSummary {
  pub id: UserId,
  pub username: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// A tag together with the posts currently carrying it.
pub struct TagView {
  pub tag: Tag,
  pub posts: Vec<PostSummary>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// One association, resolved to both of its endpoints.
pub struct PostTagView {
  pub post_tag: PostTag,
  pub tag: Tag,
  pub post: PostSummary,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// A post as returned by discovery queries, with its creator and all
/// tags attached.
pub struct PostView {
  pub post: Post,
  pub creator: UserSummary,
  pub tags: Vec<Tag>,
}
