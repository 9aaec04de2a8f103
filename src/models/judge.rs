//! Judge model.

use serde::{Deserialize, Serialize};

/// A person who scores projects.
///
/// Judges are referenced by `Score` and `Assignment` records through their
/// `id`; removing a judge is the host application's concern and must not
/// silently orphan those records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Judge {
    /// Unique judge identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact detail (email or phone, free-form).
    pub contact: String,
}

impl Judge {
    /// Creates a new judge with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            contact: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the contact detail.
    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }
}
