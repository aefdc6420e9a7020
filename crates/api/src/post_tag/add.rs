use fotogram_api_common::tag::AddTagToPost;
use fotogram_db_schema::{
  source::{
    post::Post,
    tag::{PostTag, PostTagInsertForm, Tag},
  },
  traits::Crud,
  utils::DbPool,
};
use fotogram_db_views::structs::PostTagView;
use fotogram_utils::{
  error::{FotogramErrorExt2, FotogramErrorType, FotogramResult},
  response::ApiResponse,
  utils::validation::normalize_tag_name,
};

/// Attaches a tag to a post. The checks run in a fixed order: the post
/// must exist, then the name is normalized, then the tag is found or
/// created, and only then is the association inserted. A concurrent
/// duplicate insert loses at the unique constraint and surfaces the
/// same conflict as the upfront pair check.
pub async fn add_tag_to_post(
  data: &AddTagToPost,
  pool: &mut DbPool<'_>,
) -> FotogramResult<ApiResponse<PostTagView>> {
  let post = Post::read(pool, data.post_id)
    .await
    .with_fotogram_type(FotogramErrorType::PostNotFound)?;
  let name = normalize_tag_name(&data.tag_name)?;
  let tag = Tag::get_or_create(pool, &name).await?;

  if PostTag::find_by_pair(pool, post.id, tag.id).await?.is_some() {
    Err(FotogramErrorType::TagAlreadyAssociated)?
  }
  PostTag::create(pool, &PostTagInsertForm::new(post.id, tag.id)).await?;
  tracing::debug!("tagged post {} with {}", post.id, tag.name);

  let view = PostTagView::read(pool, post.id, tag.id).await?;
  Ok(ApiResponse::message(view, "tag added to post"))
}

#[cfg(test)]
#[expect(clippy::unwrap_used)]
mod tests {
  use super::*;
  use crate::post_tag::{
    list::list_post_tags,
    remove::remove_tag_from_post,
    search::search_posts_by_hashtag,
  };
  use fotogram_api_common::tag::{RemoveTagFromPost, SearchPostsByHashtag};
  use fotogram_db_schema::{
    newtypes::PostId,
    source::{
      post::PostInsertForm,
      user::{User, UserInsertForm},
    },
    utils::build_db_pool_for_tests,
  };
  use pretty_assertions::assert_eq;
  use serial_test::serial;
  use url::Url;

  #[tokio::test]
  #[serial]
  async fn test_tagging_lifecycle() -> FotogramResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let creator = User::create(pool, &UserInsertForm::test_form("lifecycle")).await?;
    let post = Post::create(
      pool,
      &PostInsertForm::new(
        "night market".into(),
        "long exposure".into(),
        Url::parse("https://img.example.com/market.jpg")?.into(),
        creator.id,
      ),
    )
    .await?;

    let missing_post = add_tag_to_post(
      &AddTagToPost {
        post_id: PostId(-1),
        tag_name: "#nightlife".into(),
      },
      pool,
    )
    .await;
    assert_eq!(
      FotogramErrorType::PostNotFound,
      missing_post.unwrap_err().error_type
    );

    let added = add_tag_to_post(
      &AddTagToPost {
        post_id: post.id,
        tag_name: "#NightLife".into(),
      },
      pool,
    )
    .await?;
    let view = added.data.ok_or(FotogramErrorType::NotFound)?;
    assert_eq!("nightlife", view.tag.name);
    assert_eq!(post.id, view.post.id);

    // Different spelling, same canonical tag: rejected as a duplicate.
    let duplicate = add_tag_to_post(
      &AddTagToPost {
        post_id: post.id,
        tag_name: "nightlife".into(),
      },
      pool,
    )
    .await;
    assert_eq!(
      FotogramErrorType::TagAlreadyAssociated,
      duplicate.unwrap_err().error_type
    );

    let listed = list_post_tags(post.id, pool).await?;
    assert_eq!(1, listed.data.unwrap_or_default().len());

    let found = search_posts_by_hashtag(
      &SearchPostsByHashtag {
        q: "#night".into(),
        ..Default::default()
      },
      pool,
    )
    .await?;
    let posts = found.data.unwrap_or_default();
    assert!(posts.iter().any(|v| v.post.id == post.id));

    let removed = remove_tag_from_post(
      &RemoveTagFromPost {
        post_id: post.id,
        tag_id: view.tag.id,
      },
      pool,
    )
    .await?;
    assert!(removed.success);
    let emptied = list_post_tags(post.id, pool).await?;
    assert!(emptied.data.unwrap_or_default().is_empty());

    let gone = remove_tag_from_post(
      &RemoveTagFromPost {
        post_id: post.id,
        tag_id: view.tag.id,
      },
      pool,
    )
    .await;
    assert_eq!(
      FotogramErrorType::AssociationNotFound,
      gone.unwrap_err().error_type
    );

    // Removal and re-adding both work; the tag row survived in between.
    let re_added = add_tag_to_post(
      &AddTagToPost {
        post_id: post.id,
        tag_name: "nightlife".into(),
      },
      pool,
    )
    .await?;
    assert!(re_added.success);

    Post::delete(pool, post.id).await?;
    User::delete(pool, creator.id).await?;
    Ok(())
  }
}
