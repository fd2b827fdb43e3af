mod catalog_item;

pub use self::catalog_item::*;
