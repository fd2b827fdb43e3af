use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct BookBinding(String);

impl BookBinding {
    pub fn new(binding: impl Into<String>) -> Self {
        Self(binding.into())
    }
}
