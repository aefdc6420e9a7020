use crate::{
  newtypes::{PostId, UserId},
  schema::{post, post_like},
  source::post::{Post, PostInsertForm, PostLike, PostLikeForm, PostUpdateForm},
  traits::{Crud, Likeable},
  utils::{get_conn, limit_and_offset, DbPool},
};
use diesel::{
  insert_into,
  result::{DatabaseErrorKind, Error as DieselError},
  ExpressionMethods,
  QueryDsl,
};
use diesel_async::RunQueryDsl;
use fotogram_utils::error::{FotogramErrorType, FotogramResult};

impl Post {
  /// Newest first, paged.
  pub async fn list(
    pool: &mut DbPool<'_>,
    page: Option<i64>,
    limit: Option<i64>,
  ) -> FotogramResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    let (limit, offset) = limit_and_offset(page, limit)?;
    post::table
      .order_by(post::published.desc())
      .then_order_by(post::id.desc())
      .limit(limit)
      .offset(offset)
      .load::<Self>(conn)
      .await
      .map_err(Into::into)
  }
}

impl Crud for Post {
  type InsertForm = PostInsertForm;
  type UpdateForm = PostUpdateForm;
  type IdType = PostId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> FotogramResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(post::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .map_err(Into::into)
  }

  async fn read(pool: &mut DbPool<'_>, post_id: PostId) -> FotogramResult<Self> {
    let conn = &mut get_conn(pool).await?;
    post::table
      .find(post_id)
      .first(conn)
      .await
      .map_err(Into::into)
  }

  async fn update(
    pool: &mut DbPool<'_>,
    post_id: PostId,
    form: &Self::UpdateForm,
  ) -> FotogramResult<Self> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(post::table.find(post_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
      .map_err(Into::into)
  }

  async fn delete(pool: &mut DbPool<'_>, post_id: PostId) -> FotogramResult<usize> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(post::table.find(post_id))
      .execute(conn)
      .await
      .map_err(Into::into)
  }
}

impl Likeable for PostLike {
  type Form = PostLikeForm;
  type IdType = PostId;

  async fn like(pool: &mut DbPool<'_>, form: &Self::Form) -> FotogramResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(post_like::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .map_err(|e| match e {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
          FotogramErrorType::PostAlreadyLiked.into()
        }
        e => e.into(),
      })
  }

  async fn unlike(pool: &mut DbPool<'_>, user_id: UserId, post_id: PostId) -> FotogramResult<usize> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(
      post_like::table
        .filter(post_like::post_id.eq(post_id))
        .filter(post_like::user_id.eq(user_id)),
    )
    .execute(conn)
    .await
    .map_err(Into::into)
  }
}
