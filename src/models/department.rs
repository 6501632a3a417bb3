use serde::{Deserialize, Serialize};

use super::Entity;

/// An organisational unit that employees belong to.
///
/// `id` is `None` until the department has been saved; the store assigns it
/// and it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

impl Entity for Department {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }
}
