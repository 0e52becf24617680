use serde::{Deserialize, Serialize};

/// A provisioned occurrence of a service offering.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ServiceInstance {
    /// Unique, opaque identifier assigned by the service manager.
    pub id: String,
    /// Display name, not guaranteed to be unique.
    pub name: String,
}

impl ServiceInstance {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> ServiceInstance {
        ServiceInstance {
            id: id.into(),
            name: name.into(),
        }
    }
}
