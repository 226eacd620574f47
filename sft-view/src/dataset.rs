use std::ops::Deref;
use std::rc::Rc;

use sft_tracking::Tracking;

/// Shared, read-only tracking list.
///
/// Cheap to clone. Equality is by identity: two `Dataset`s are equal only
/// if they share the same allocation, which is what the derived-view caches
/// key on. Replacing the data means building a new `Dataset`.
#[derive(Debug, Clone, Default)]
pub struct Dataset(Rc<Vec<Tracking>>);

impl Dataset {
    pub fn new(items: Vec<Tracking>) -> Self {
        Self(Rc::new(items))
    }

    pub fn items(&self) -> &[Tracking] {
        &self.0
    }
}

impl Deref for Dataset {
    type Target = [Tracking];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Vec<Tracking>> for Dataset {
    fn from(items: Vec<Tracking>) -> Self {
        Self::new(items)
    }
}
