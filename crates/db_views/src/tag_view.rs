use crate::structs::{PostSummary, TagView};
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use fotogram_db_schema::{
  newtypes::TagId,
  schema::{post, post_tag},
  source::tag::Tag,
  utils::{get_conn, DbPool},
};
use fotogram_utils::error::FotogramResult;
use std::collections::HashMap;

impl TagView {
  /// Every tag on the instance, name-ordered, each with its posts. A
  /// tag whose last post has been deleted still shows up, with an empty
  /// post list.
  pub async fn list(pool: &mut DbPool<'_>) -> FotogramResult<Vec<Self>> {
    let tags = Tag::list(pool).await?;
    let tag_ids = tags.iter().map(|t| t.id).collect();
    let mut posts = tagged_posts(pool, tag_ids).await?;
    Ok(
      tags
        .into_iter()
        .map(|tag| {
          let posts = posts.remove(&tag.id).unwrap_or_default();
          TagView { tag, posts }
        })
        .collect(),
    )
  }
}

/// Resolves the associations for the given tags in one query, newest
/// post first within each tag.
async fn tagged_posts(
  pool: &mut DbPool<'_>,
  tag_ids: Vec<TagId>,
) -> FotogramResult<HashMap<TagId, Vec<PostSummary>>> {
  let conn = &mut get_conn(pool).await?;
  let rows = post_tag::table
    .inner_join(post::table)
    .filter(post_tag::tag_id.eq_any(tag_ids))
    .order_by(post::published.desc())
    .then_order_by(post::id.desc())
    .select((post_tag::tag_id, (post::id, post::title, post::description)))
    .load::<(TagId, PostSummary)>(conn)
    .await?;

  let mut grouped: HashMap<TagId, Vec<PostSummary>> = HashMap::new();
  for (tag_id, post) in rows {
    grouped.entry(tag_id).or_default().push(post);
  }
  Ok(grouped)
}

#[cfg(test)]
mod tests {
  use crate::structs::TagView;
  use fotogram_db_schema::{
    source::{
      post::{Post, PostInsertForm},
      tag::{PostTag, PostTagInsertForm, Tag},
      user::{User, UserInsertForm},
    },
    traits::Crud,
    utils::build_db_pool_for_tests,
  };
  use fotogram_utils::error::{FotogramErrorType, FotogramResult};
  use pretty_assertions::assert_eq;
  use serial_test::serial;
  use url::Url;

  #[tokio::test]
  #[serial]
  async fn test_list_with_posts() -> FotogramResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let creator = User::create(pool, &UserInsertForm::test_form("curator")).await?;
    let post = Post::create(
      pool,
      &PostInsertForm::new(
        "alley mural".into(),
        "fresh paint".into(),
        Url::parse("https://img.example.com/mural.jpg")?.into(),
        creator.id,
      ),
    )
    .await?;
    let tag = Tag::get_or_create(pool, "mural").await?;
    PostTag::create(pool, &PostTagInsertForm::new(post.id, tag.id)).await?;

    let listed = TagView::list(pool).await?;
    let view = listed
      .iter()
      .find(|v| v.tag.id == tag.id)
      .ok_or(FotogramErrorType::NotFound)?;
    assert_eq!(1, view.posts.len());
    assert_eq!(post.id, view.posts[0].id);
    assert_eq!("alley mural", view.posts[0].title);

    // Name-ordered.
    let mut names: Vec<&str> = listed.iter().map(|v| v.tag.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(
      names,
      listed.iter().map(|v| v.tag.name.as_str()).collect::<Vec<_>>()
    );

    // Tags survive their last post, but the view shows them empty.
    Post::delete(pool, post.id).await?;
    let relisted = TagView::list(pool).await?;
    let emptied = relisted
      .iter()
      .find(|v| v.tag.id == tag.id)
      .ok_or(FotogramErrorType::NotFound)?;
    assert!(emptied.posts.is_empty());

    User::delete(pool, creator.id).await?;
    Ok(())
  }
}
