table! {
    comment (id) {
        id -> Int4,
        creator_id -> Int4,
        post_id -> Int4,
        content -> Text,
        published -> Timestamptz,
        updated -> Nullable<Timestamptz>,
    }
}

table! {
    comment_like (id) {
        id -> Int4,
        user_id -> Int4,
        comment_id -> Int4,
        published -> Timestamptz,
    }
}

table! {
    post (id) {
        id -> Int4,
        title -> Varchar,
        description -> Text,
        image_url -> Text,
        creator_id -> Int4,
        published -> Timestamptz,
        updated -> Nullable<Timestamptz>,
    }
}

table! {
    post_like (id) {
        id -> Int4,
        user_id -> Int4,
        post_id -> Int4,
        published -> Timestamptz,
    }
}

table! {
    post_tag (id) {
        id -> Int4,
        post_id -> Int4,
        tag_id -> Int4,
        published -> Timestamptz,
    }
}

table! {
    tag (id) {
        id -> Int4,
        name -> Varchar,
        published -> Timestamptz,
    }
}

table! {
    user_ (id) {
        id -> Int4,
        username -> Varchar,
        email -> Text,
        password_encrypted -> Text,
        phone -> Nullable<Text>,
        admin -> Bool,
        published -> Timestamptz,
        updated -> Nullable<Timestamptz>,
    }
}

joinable!(comment -> post (post_id));
joinable!(comment -> user_ (creator_id));
joinable!(comment_like -> comment (comment_id));
joinable!(comment_like -> user_ (user_id));
joinable!(post -> user_ (creator_id));
joinable!(post_like -> post (post_id));
joinable!(post_like -> user_ (user_id));
joinable!(post_tag -> post (post_id));
joinable!(post_tag -> tag (tag_id));

allow_tables_to_appear_in_same_query!(
  comment,
  comment_like,
  post,
  post_like,
  post_tag,
  tag,
  user_,
);
