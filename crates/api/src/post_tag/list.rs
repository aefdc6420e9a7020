use fotogram_db_schema::{newtypes::PostId, utils::DbPool};
use fotogram_db_views::structs::PostTagView;
use fotogram_utils::{error::FotogramResult, response::ApiResponse};

/// The tags on one post, alphabetical. An unknown post yields an empty
/// list rather than an error.
pub async fn list_post_tags(
  post_id: PostId,
  pool: &mut DbPool<'_>,
) -> FotogramResult<ApiResponse<Vec<PostTagView>>> {
  Ok(ApiResponse::data(
    PostTagView::list_for_post(pool, post_id).await?,
  ))
}
