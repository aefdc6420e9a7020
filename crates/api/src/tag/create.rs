use fotogram_api_common::tag::CreateTag;
use fotogram_db_schema::{
  source::tag::{Tag, TagInsertForm},
  traits::Crud,
  utils::DbPool,
};
use fotogram_utils::{
  error::{FotogramErrorType, FotogramResult},
  response::ApiResponse,
  utils::validation::normalize_tag_name,
};

/// Explicit tag creation. A duplicate is not an error from the caller's
/// point of view: the envelope flips to failure but still carries the
/// existing tag, so clients can link to it.
pub async fn create_tag(
  data: &CreateTag,
  pool: &mut DbPool<'_>,
) -> FotogramResult<ApiResponse<Tag>> {
  let name = normalize_tag_name(&data.name)?;
  match Tag::create(pool, &TagInsertForm::new(name.clone())).await {
    Ok(tag) => {
      tracing::debug!("created tag {}", tag.name);
      Ok(ApiResponse::message(tag, "tag created"))
    }
    Err(e) if e.error_type == FotogramErrorType::TagAlreadyExists => {
      let existing = Tag::find_by_name(pool, &name)
        .await?
        .ok_or(FotogramErrorType::NotFound)?;
      Ok(ApiResponse::conflict(existing, "tag already exists"))
    }
    Err(e) => Err(e),
  }
}

#[cfg(test)]
#[expect(clippy::unwrap_used)]
mod tests {
  use super::*;
  use diesel::{ExpressionMethods, QueryDsl};
  use diesel_async::RunQueryDsl;
  use fotogram_db_schema::{
    schema::tag,
    utils::{build_db_pool_for_tests, get_conn},
  };
  use pretty_assertions::assert_eq;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_duplicate_create_returns_existing() -> FotogramResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let request = CreateTag {
      name: "#Golden Hour".into(),
    };
    let first = create_tag(&request, pool).await?;
    assert!(first.success);
    let created = first.data.ok_or(FotogramErrorType::NotFound)?;
    assert_eq!("golden hour", created.name);

    // Any spelling that normalizes to the same name is the same tag.
    let again = create_tag(
      &CreateTag {
        name: "GOLDEN hour".into(),
      },
      pool,
    )
    .await?;
    assert!(!again.success);
    assert_eq!(Some("tag already exists".into()), again.message);
    assert_eq!(Some(created), again.data);

    let empty = create_tag(&CreateTag { name: "#".into() }, pool).await;
    assert_eq!(
      FotogramErrorType::EmptyTagName,
      empty.unwrap_err().error_type
    );

    let conn = &mut get_conn(pool).await?;
    diesel::delete(tag::table.filter(tag::name.eq("golden hour")))
      .execute(conn)
      .await?;
    Ok(())
  }
}
