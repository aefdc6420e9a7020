use fotogram_db_schema::{source::tag::Tag, utils::DbPool};
use fotogram_utils::{error::FotogramResult, response::ApiResponse};

/// The lightweight listing: canonical names only, for autocomplete.
pub async fn list_tag_names(pool: &mut DbPool<'_>) -> FotogramResult<ApiResponse<Vec<String>>> {
  Ok(ApiResponse::data(Tag::list_names(pool).await?))
}
