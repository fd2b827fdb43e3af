use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct PublishedOn(Date);

impl PublishedOn {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}
