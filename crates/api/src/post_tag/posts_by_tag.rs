use fotogram_api_common::tag::GetPostsByTag;
use fotogram_db_schema::utils::DbPool;
use fotogram_db_views::structs::PostView;
use fotogram_utils::{
  error::FotogramResult,
  response::ApiResponse,
  utils::validation::normalize_tag_name,
};

/// The posts carrying one exact tag name, newest first. An unknown tag
/// yields an empty list.
pub async fn get_posts_by_tag(
  data: &GetPostsByTag,
  pool: &mut DbPool<'_>,
) -> FotogramResult<ApiResponse<Vec<PostView>>> {
  let name = normalize_tag_name(&data.tag_name)?;
  let posts = PostView::list_by_tag_name(pool, &name, data.page, data.limit).await?;
  Ok(ApiResponse::data(posts))
}
