use crate::structs::{PostView, UserSummary};
use diesel::{ExpressionMethods, PgTextExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use fotogram_db_schema::{
  newtypes::PostId,
  schema::{post, post_tag, tag, user_},
  source::{post::Post, tag::Tag},
  utils::{get_conn, limit_and_offset, substring_pattern, DbPool},
};
use fotogram_utils::error::FotogramResult;
use std::collections::HashMap;

impl PostView {
  /// Discovery by hashtag: any post carrying at least one tag whose
  /// name contains the query as a substring, newest first. The query
  /// must already be canonical.
  pub async fn search_by_hashtag(
    pool: &mut DbPool<'_>,
    query: &str,
    page: Option<i64>,
    limit: Option<i64>,
  ) -> FotogramResult<Vec<Self>> {
    let post_ids = {
      let conn = &mut get_conn(pool).await?;
      post_tag::table
        .inner_join(tag::table)
        .filter(tag::name.ilike(substring_pattern(query)))
        .select(post_tag::post_id)
        .distinct()
        .load::<PostId>(conn)
        .await?
    };
    hydrate(pool, post_ids, page, limit).await
  }

  /// Every post carrying exactly the given tag, newest first. An
  /// unknown tag yields an empty page, same as a known tag with no
  /// posts.
  pub async fn list_by_tag_name(
    pool: &mut DbPool<'_>,
    name: &str,
    page: Option<i64>,
    limit: Option<i64>,
  ) -> FotogramResult<Vec<Self>> {
    let post_ids = {
      let conn = &mut get_conn(pool).await?;
      post_tag::table
        .inner_join(tag::table)
        .filter(tag::name.eq(name))
        .select(post_tag::post_id)
        .load::<PostId>(conn)
        .await?
    };
    hydrate(pool, post_ids, page, limit).await
  }
}

/// Turns a set of post ids into full views with creator and tags, in
/// reverse publication order.
async fn hydrate(
  pool: &mut DbPool<'_>,
  post_ids: Vec<PostId>,
  page: Option<i64>,
  limit: Option<i64>,
) -> FotogramResult<Vec<PostView>> {
  let conn = &mut get_conn(pool).await?;
  let (limit, offset) = limit_and_offset(page, limit)?;
  let posts = post::table
    .inner_join(user_::table)
    .filter(post::id.eq_any(post_ids))
    .order_by(post::published.desc())
    .then_order_by(post::id.desc())
    .limit(limit)
    .offset(offset)
    .select((post::all_columns, (user_::id, user_::username)))
    .load::<(Post, UserSummary)>(conn)
    .await?;

  let page_ids: Vec<PostId> = posts.iter().map(|(p, _)| p.id).collect();
  let rows = post_tag::table
    .inner_join(tag::table)
    .filter(post_tag::post_id.eq_any(page_ids))
    .order_by(tag::name.asc())
    .select((post_tag::post_id, tag::all_columns))
    .load::<(PostId, Tag)>(conn)
    .await?;
  let mut tags: HashMap<PostId, Vec<Tag>> = HashMap::new();
  for (post_id, tag) in rows {
    tags.entry(post_id).or_default().push(tag);
  }

  Ok(
    posts
      .into_iter()
      .map(|(post, creator)| {
        let tags = tags.remove(&post.id).unwrap_or_default();
        PostView {
          post,
          creator,
          tags,
        }
      })
      .collect(),
  )
}
