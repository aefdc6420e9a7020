use crate::{
  newtypes::{PostId, PostTagId, TagId},
  schema::post_tag,
  source::tag::{PostTag, PostTagInsertForm},
  traits::Crud,
  utils::{get_conn, DbPool},
};
use diesel::{
  insert_into,
  result::{DatabaseErrorKind, Error as DieselError},
  ExpressionMethods,
  OptionalExtension,
  QueryDsl,
};
use diesel_async::RunQueryDsl;
use fotogram_utils::error::{FotogramErrorType, FotogramResult};

impl PostTag {
  /// The (post, tag) pair is unique, so this resolves the association
  /// state in one read: Some means Present, None means Absent.
  pub async fn find_by_pair(
    pool: &mut DbPool<'_>,
    post_id: PostId,
    tag_id: TagId,
  ) -> FotogramResult<Option<Self>> {
    let conn = &mut get_conn(pool).await?;
    post_tag::table
      .filter(post_tag::post_id.eq(post_id))
      .filter(post_tag::tag_id.eq(tag_id))
      .first::<Self>(conn)
      .await
      .optional()
      .map_err(Into::into)
  }
}

impl Crud for PostTag {
  type InsertForm = PostTagInsertForm;
  type UpdateForm = PostTagInsertForm;
  type IdType = PostTagId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> FotogramResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(post_tag::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .map_err(|e| match e {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
          FotogramErrorType::TagAlreadyAssociated.into()
        }
        e => e.into(),
      })
  }

  async fn read(pool: &mut DbPool<'_>, post_tag_id: PostTagId) -> FotogramResult<Self> {
    let conn = &mut get_conn(pool).await?;
    post_tag::table
      .find(post_tag_id)
      .first(conn)
      .await
      .map_err(Into::into)
  }

  /// An association is either Present or Absent; there is nothing to
  /// update.
  async fn update(
    _pool: &mut DbPool<'_>,
    _post_tag_id: PostTagId,
    _form: &Self::UpdateForm,
  ) -> FotogramResult<Self> {
    Err(DieselError::QueryBuilderError("associations are created and deleted, never updated".into()))?
  }

  async fn delete(pool: &mut DbPool<'_>, post_tag_id: PostTagId) -> FotogramResult<usize> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(post_tag::table.find(post_tag_id))
      .execute(conn)
      .await
      .map_err(Into::into)
  }
}
