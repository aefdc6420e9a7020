use fotogram_api_common::tag::RemoveTagFromPost;
use fotogram_db_schema::{source::tag::PostTag, traits::Crud, utils::DbPool};
use fotogram_utils::{
  error::{FotogramErrorType, FotogramResult},
  response::ApiResponse,
};

/// Detaches a tag from a post, by the unique (post, tag) pair. The tag
/// row itself stays, even when this was its last association.
pub async fn remove_tag_from_post(
  data: &RemoveTagFromPost,
  pool: &mut DbPool<'_>,
) -> FotogramResult<ApiResponse<()>> {
  let association = PostTag::find_by_pair(pool, data.post_id, data.tag_id)
    .await?
    .ok_or(FotogramErrorType::AssociationNotFound)?;
  PostTag::delete(pool, association.id).await?;
  tracing::debug!("removed tag {} from post {}", data.tag_id, data.post_id);

  Ok(ApiResponse::ok("tag removed from post"))
}
