use fotogram_api_common::tag::SearchPostsByHashtag;
use fotogram_db_schema::utils::DbPool;
use fotogram_db_views::structs::PostView;
use fotogram_utils::{
  error::FotogramResult,
  response::ApiResponse,
  utils::validation::parse_hashtag_query,
};

/// Hashtag discovery. The query must carry a leading `#`; matching is
/// a case-insensitive substring match over tag names.
pub async fn search_posts_by_hashtag(
  data: &SearchPostsByHashtag,
  pool: &mut DbPool<'_>,
) -> FotogramResult<ApiResponse<Vec<PostView>>> {
  let query = parse_hashtag_query(&data.q)?;
  let posts = PostView::search_by_hashtag(pool, &query, data.page, data.limit).await?;
  let message = format!("{} post(s) found for #{}", posts.len(), query);
  Ok(ApiResponse::message(posts, &message))
}

#[cfg(test)]
#[expect(clippy::unwrap_used)]
mod tests {
  use super::*;
  use fotogram_utils::error::FotogramErrorType;
  use pretty_assertions::assert_eq;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_query_validation() -> FotogramResult<()> {
    let pool = &fotogram_db_schema::utils::build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let empty = search_posts_by_hashtag(&SearchPostsByHashtag::default(), pool).await;
    assert_eq!(
      FotogramErrorType::MissingSearchQuery,
      empty.unwrap_err().error_type
    );

    let unprefixed = search_posts_by_hashtag(
      &SearchPostsByHashtag {
        q: "paris".into(),
        ..Default::default()
      },
      pool,
    )
    .await;
    assert_eq!(
      FotogramErrorType::MissingHashtagPrefix,
      unprefixed.unwrap_err().error_type
    );

    Ok(())
  }
}
