use crate::structs::{PostSummary, PostTagView};
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use fotogram_db_schema::{
  newtypes::{PostId, TagId},
  schema::{post, post_tag, tag},
  source::tag::{PostTag, Tag},
  utils::{get_conn, DbPool},
};
use fotogram_utils::error::{FotogramErrorExt, FotogramErrorType, FotogramResult};

type PostTagViewTuple = (PostTag, Tag, PostSummary);

impl PostTagView {
  pub async fn read(
    pool: &mut DbPool<'_>,
    post_id: PostId,
    tag_id: TagId,
  ) -> FotogramResult<Self> {
    let conn = &mut get_conn(pool).await?;
    let (post_tag, tag, post) = post_tag::table
      .inner_join(tag::table)
      .inner_join(post::table)
      .filter(post_tag::post_id.eq(post_id))
      .filter(post_tag::tag_id.eq(tag_id))
      .select((
        post_tag::all_columns,
        tag::all_columns,
        (post::id, post::title, post::description),
      ))
      .first::<PostTagViewTuple>(conn)
      .await
      .with_fotogram_type(FotogramErrorType::AssociationNotFound)?;
    Ok(Self {
      post_tag,
      tag,
      post,
    })
  }

  /// All tags on one post, alphabetical.
  pub async fn list_for_post(pool: &mut DbPool<'_>, post_id: PostId) -> FotogramResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    let rows = post_tag::table
      .inner_join(tag::table)
      .inner_join(post::table)
      .filter(post_tag::post_id.eq(post_id))
      .order_by(tag::name.asc())
      .select((
        post_tag::all_columns,
        tag::all_columns,
        (post::id, post::title, post::description),
      ))
      .load::<PostTagViewTuple>(conn)
      .await?;
    Ok(
      rows
        .into_iter()
        .map(|(post_tag, tag, post)| Self {
          post_tag,
          tag,
          post,
        })
        .collect(),
    )
  }
}
