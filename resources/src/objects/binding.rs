use serde::{Deserialize, Serialize};
use tabled::{
    settings::Style,
    tables::ExtendedTable,
    Table, Tabled,
};

use super::ServiceInstance;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, Tabled)]
pub struct ServiceBinding {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    /// ID of the instance this binding belongs to.
    #[tabled(rename = "Service Instance ID")]
    pub service_instance_id: String,
    /// Name of the owning instance.
    /// Not sent by the API, filled in after the instance is fetched.
    #[serde(default)]
    #[tabled(rename = "Service Instance Name")]
    pub service_instance_name: String,
}

impl ServiceBinding {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        service_instance_id: impl Into<String>,
    ) -> ServiceBinding {
        ServiceBinding {
            id: id.into(),
            name: name.into(),
            service_instance_id: service_instance_id.into(),
            service_instance_name: String::new(),
        }
    }

    /// Copy the display name of `instance` into this binding.
    ///
    /// Returns false and leaves the binding untouched
    /// if `instance` is not the one this binding references.
    pub fn resolve_instance(&mut self, instance: &ServiceInstance) -> bool {
        if instance.id != self.service_instance_id {
            return false;
        }
        self.service_instance_name = instance.name.to_owned();
        true
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ServiceBindings {
    #[serde(rename = "items", default)]
    pub service_bindings: Vec<ServiceBinding>,
    /// Print each binding as a key/value block instead of a table row.
    #[serde(skip)]
    pub vertical: bool,
}

impl ServiceBindings {
    pub fn new(service_bindings: Vec<ServiceBinding>, vertical: bool) -> ServiceBindings {
        ServiceBindings {
            service_bindings,
            vertical,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.service_bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.service_bindings.len()
    }

    pub fn table_data(&self) -> TableData<'_> {
        TableData {
            bindings: &self.service_bindings,
            vertical: self.vertical,
        }
    }
}

/// Printable view over a list of bindings.
pub struct TableData<'a> {
    bindings: &'a [ServiceBinding],
    vertical: bool,
}

impl TableData<'_> {
    pub fn headers(&self) -> Vec<String> {
        ServiceBinding::headers()
            .into_iter()
            .map(|h| h.into_owned())
            .collect()
    }

    /// Cell values of every record, in column order.
    pub fn records(&self) -> Vec<Vec<String>> {
        self.bindings
            .iter()
            .map(|b| b.fields().into_iter().map(|c| c.into_owned()).collect())
            .collect()
    }
}

impl std::fmt::Display for TableData<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.vertical {
            write!(f, "{}", ExtendedTable::new(self.bindings))
        } else {
            let mut table = Table::new(self.bindings);
            table.with(Style::blank());
            write!(f, "{}", table)
        }
    }
}
