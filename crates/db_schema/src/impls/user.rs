use crate::{
  newtypes::UserId,
  schema::user_,
  source::user::{User, UserInsertForm, UserUpdateForm},
  traits::Crud,
  utils::{get_conn, DbPool},
};
use diesel::{
  insert_into,
  result::{DatabaseErrorKind, Error as DieselError},
  QueryDsl,
};
use diesel_async::RunQueryDsl;
use fotogram_utils::error::{FotogramErrorType, FotogramResult};

impl Crud for User {
  type InsertForm = UserInsertForm;
  type UpdateForm = UserUpdateForm;
  type IdType = UserId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> FotogramResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(user_::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .map_err(|e| match e {
        // Covers both the username and the email constraint.
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
          FotogramErrorType::UserAlreadyExists.into()
        }
        e => e.into(),
      })
  }

  async fn read(pool: &mut DbPool<'_>, user_id: UserId) -> FotogramResult<Self> {
    let conn = &mut get_conn(pool).await?;
    user_::table
      .find(user_id)
      .first(conn)
      .await
      .map_err(Into::into)
  }

  async fn update(
    pool: &mut DbPool<'_>,
    user_id: UserId,
    form: &Self::UpdateForm,
  ) -> FotogramResult<Self> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(user_::table.find(user_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
      .map_err(Into::into)
  }

  async fn delete(pool: &mut DbPool<'_>, user_id: UserId) -> FotogramResult<usize> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(user_::table.find(user_id))
      .execute(conn)
      .await
      .map_err(Into::into)
  }
}
