use crate::{newtypes::UserId, utils::DbPool};
use fotogram_utils::error::FotogramResult;

pub trait Crud {
  type InsertForm;
  type UpdateForm;
  type IdType;
  fn create(
    pool: &mut DbPool<'_>,
    form: &Self::InsertForm,
  ) -> impl std::future::Future<Output = FotogramResult<Self>> + Send
  where
    Self: Sized;
  fn read(
    pool: &mut DbPool<'_>,
    id: Self::IdType,
  ) -> impl std::future::Future<Output = FotogramResult<Self>> + Send
  where
    Self: Sized;
  /// when you want to null out a column, you have to send Some(None)), since sending None means
  /// you just don't want to update that column.
  fn update(
    pool: &mut DbPool<'_>,
    id: Self::IdType,
    form: &Self::UpdateForm,
  ) -> impl std::future::Future<Output = FotogramResult<Self>> + Send
  where
    Self: Sized;
  fn delete(
    pool: &mut DbPool<'_>,
    id: Self::IdType,
  ) -> impl std::future::Future<Output = FotogramResult<usize>> + Send
  where
    Self: Sized;
}

/// Unary likes on posts and comments. Liking twice is a conflict, not a
/// toggle.
pub trait Likeable {
  type Form;
  type IdType;
  fn like(
    pool: &mut DbPool<'_>,
    form: &Self::Form,
  ) -> impl std::future::Future<Output = FotogramResult<Self>> + Send
  where
    Self: Sized;
  fn unlike(
    pool: &mut DbPool<'_>,
    user_id: UserId,
    item_id: Self::IdType,
  ) -> impl std::future::Future<Output = FotogramResult<usize>> + Send
  where
    Self: Sized;
}
