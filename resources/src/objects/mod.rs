pub mod binding;
pub mod instance;

pub use binding::{ServiceBinding, ServiceBindings, TableData};
pub use instance::ServiceInstance;
