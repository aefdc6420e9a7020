pub mod add;
pub mod list;
pub mod posts_by_tag;
pub mod remove;
pub mod search;
