use crate::{
  newtypes::{CommentId, PostId, UserId},
  schema::{comment, comment_like},
  source::comment::{Comment, CommentInsertForm, CommentLike, CommentLikeForm, CommentUpdateForm},
  traits::{Crud, Likeable},
  utils::{get_conn, DbPool},
};
use diesel::{
  insert_into,
  result::{DatabaseErrorKind, Error as DieselError},
  ExpressionMethods,
  QueryDsl,
};
use diesel_async::RunQueryDsl;
use fotogram_utils::error::{FotogramErrorType, FotogramResult};

impl Comment {
  /// All comments on a post, newest first.
  pub async fn list_for_post(pool: &mut DbPool<'_>, post_id: PostId) -> FotogramResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    comment::table
      .filter(comment::post_id.eq(post_id))
      .order_by(comment::published.desc())
      .then_order_by(comment::id.desc())
      .load::<Self>(conn)
      .await
      .map_err(Into::into)
  }
}

impl Crud for Comment {
  type InsertForm = CommentInsertForm;
  type UpdateForm = CommentUpdateForm;
  type IdType = CommentId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> FotogramResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(comment::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .map_err(Into::into)
  }

  async fn read(pool: &mut DbPool<'_>, comment_id: CommentId) -> FotogramResult<Self> {
    let conn = &mut get_conn(pool).await?;
    comment::table
      .find(comment_id)
      .first(conn)
      .await
      .map_err(Into::into)
  }

  async fn update(
    pool: &mut DbPool<'_>,
    comment_id: CommentId,
    form: &Self::UpdateForm,
  ) -> FotogramResult<Self> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(comment::table.find(comment_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
      .map_err(Into::into)
  }

  async fn delete(pool: &mut DbPool<'_>, comment_id: CommentId) -> FotogramResult<usize> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(comment::table.find(comment_id))
      .execute(conn)
      .await
      .map_err(Into::into)
  }
}

impl Likeable for CommentLike {
  type Form = CommentLikeForm;
  type IdType = CommentId;

  async fn like(pool: &mut DbPool<'_>, form: &Self::Form) -> FotogramResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(comment_like::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .map_err(|e| match e {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
          FotogramErrorType::CommentAlreadyLiked.into()
        }
        e => e.into(),
      })
  }

  async fn unlike(
    pool: &mut DbPool<'_>,
    user_id: UserId,
    comment_id: CommentId,
  ) -> FotogramResult<usize> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(
      comment_like::table
        .filter(comment_like::comment_id.eq(comment_id))
        .filter(comment_like::user_id.eq(user_id)),
    )
    .execute(conn)
    .await
    .map_err(Into::into)
  }
}
