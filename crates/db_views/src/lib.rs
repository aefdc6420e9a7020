pub mod post_tag_view;
pub mod post_view;
pub mod structs;
pub mod tag_view;
