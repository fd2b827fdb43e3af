mod text;

pub(crate) use self::text::*;
