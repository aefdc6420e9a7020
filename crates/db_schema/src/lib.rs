#[macro_use]
extern crate diesel;

pub mod impls;
pub mod newtypes;
pub mod schema;
pub mod schema_setup;
pub mod sensitive;
pub mod source;
pub mod traits;
pub mod utils;
