pub mod post_tag;
pub mod tag;
