use crate::{
  newtypes::TagId,
  schema::tag,
  source::tag::{Tag, TagInsertForm},
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

impl Tag {
  /// Exact lookup by canonical name. Returns None instead of erroring so
  /// that callers can distinguish "absent" from "broken".
  pub async fn find_by_name(pool: &mut DbPool<'_>, name: &str) -> FotogramResult<Option<Self>> {
    let conn = &mut get_conn(pool).await?;
    tag::table
      .filter(tag::name.eq(name))
      .first::<Self>(conn)
      .await
      .optional()
      .map_err(Into::into)
  }

  /// Returns the tag with the given canonical name, creating it if it
  /// does not exist yet.
  ///
  /// Two callers can race past the lookup and both attempt the insert.
  /// The loser hits the unique constraint on the name and re-reads the
  /// winner's row, so both end up with the same tag.
  pub async fn get_or_create(pool: &mut DbPool<'_>, name: &str) -> FotogramResult<Self> {
    if let Some(existing) = Self::find_by_name(pool, name).await? {
      return Ok(existing);
    }
    match Self::create(pool, &TagInsertForm::new(name.to_string())).await {
      Err(e) if e.error_type == FotogramErrorType::TagAlreadyExists => {
        Self::find_by_name(pool, name)
          .await?
          .ok_or_else(|| FotogramErrorType::NotFound.into())
      }
      other => other,
    }
  }

  pub async fn list(pool: &mut DbPool<'_>) -> FotogramResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    tag::table
      .order_by(tag::name.asc())
      .load::<Self>(conn)
      .await
      .map_err(Into::into)
  }

  /// Just the canonical names, for the lightweight listing endpoint.
  pub async fn list_names(pool: &mut DbPool<'_>) -> FotogramResult<Vec<String>> {
    let conn = &mut get_conn(pool).await?;
    tag::table
      .select(tag::name)
      .order_by(tag::name.asc())
      .load::<String>(conn)
      .await
      .map_err(Into::into)
  }
}

impl Crud for Tag {
  type InsertForm = TagInsertForm;
  type UpdateForm = TagInsertForm;
  type IdType = TagId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> FotogramResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(tag::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .map_err(|e| match e {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
          FotogramErrorType::TagAlreadyExists.into()
        }
        e => e.into(),
      })
  }

  async fn read(pool: &mut DbPool<'_>, tag_id: TagId) -> FotogramResult<Self> {
    let conn = &mut get_conn(pool).await?;
    tag::table.find(tag_id).first(conn).await.map_err(Into::into)
  }

  /// Tag names are canonical and immutable.
  async fn update(_pool: &mut DbPool<'_>, _tag_id: TagId, _form: &Self::UpdateForm) -> FotogramResult<Self> {
    Err(DieselError::QueryBuilderError("tags are never updated".into()))?
  }

  /// Tags outlive their last association and are never removed.
  async fn delete(_pool: &mut DbPool<'_>, _tag_id: TagId) -> FotogramResult<usize> {
    Err(DieselError::QueryBuilderError("tags are never deleted".into()))?
  }
}

#[cfg(test)]
#[expect(clippy::unwrap_used)]
mod tests {
  use crate::{
    schema::tag,
    source::tag::{Tag, TagInsertForm},
    traits::Crud,
    utils::{build_db_pool_for_tests, get_conn, DbPool},
  };
  use diesel::{ExpressionMethods, QueryDsl};
  use diesel_async::RunQueryDsl;
  use fotogram_utils::error::{FotogramErrorType, FotogramResult};
  use pretty_assertions::assert_eq;
  use serial_test::serial;

  async fn delete_tag_rows(pool: &mut DbPool<'_>, names: &[&str]) -> FotogramResult<()> {
    // Tags are immortal through the public interface, so tests clean up
    // behind its back.
    let conn = &mut get_conn(pool).await?;
    diesel::delete(tag::table.filter(tag::name.eq_any(names)))
      .execute(conn)
      .await?;
    Ok(())
  }

  #[tokio::test]
  #[serial]
  async fn test_get_or_create_is_unique() -> FotogramResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let first = Tag::get_or_create(pool, "streetart").await?;
    let second = Tag::get_or_create(pool, "streetart").await?;
    assert_eq!(first.id, second.id);
    assert_eq!("streetart", second.name);

    // A direct second insert must surface the conflict.
    let duplicate = Tag::create(pool, &TagInsertForm::new("streetart".into())).await;
    assert_eq!(
      FotogramErrorType::TagAlreadyExists,
      duplicate.unwrap_err().error_type
    );

    delete_tag_rows(pool, &["streetart"]).await?;
    Ok(())
  }

  #[tokio::test]
  #[serial]
  async fn test_listing_orders_by_name() -> FotogramResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    Tag::get_or_create(pool, "zebra").await?;
    Tag::get_or_create(pool, "aurora").await?;

    let names = Tag::list_names(pool).await?;
    let zebra_pos = names.iter().position(|n| n == "zebra").unwrap();
    let aurora_pos = names.iter().position(|n| n == "aurora").unwrap();
    assert!(aurora_pos < zebra_pos);

    let tags = Tag::list(pool).await?;
    assert_eq!(
      names,
      tags.iter().map(|t| t.name.clone()).collect::<Vec<_>>()
    );

    delete_tag_rows(pool, &["zebra", "aurora"]).await?;
    Ok(())
  }

  #[tokio::test]
  #[serial]
  async fn test_find_by_name_is_exact() -> FotogramResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let created = Tag::get_or_create(pool, "lisbon").await?;
    let found = Tag::find_by_name(pool, "lisbon").await?;
    assert_eq!(Some(created.clone()), found);

    // Only the canonical spelling matches; normalization happened
    // before the store was reached.
    assert_eq!(None, Tag::find_by_name(pool, "Lisbon").await?);
    assert_eq!(None, Tag::find_by_name(pool, "lisbo").await?);

    let read = Tag::read(pool, created.id).await?;
    assert_eq!(created, read);

    delete_tag_rows(pool, &["lisbon"]).await?;
    Ok(())
  }
}
