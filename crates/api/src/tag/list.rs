use fotogram_db_schema::utils::DbPool;
use fotogram_db_views::structs::TagView;
use fotogram_utils::{error::FotogramResult, response::ApiResponse};

/// All tags with their posts, name-ordered.
pub async fn list_tags(pool: &mut DbPool<'_>) -> FotogramResult<ApiResponse<Vec<TagView>>> {
  Ok(ApiResponse::data(TagView::list(pool).await?))
}
