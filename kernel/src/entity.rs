mod catalog_item;
mod common;

pub use self::catalog_item::*;
