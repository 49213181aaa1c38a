/// The runtime value type and its JSON mapping.
pub mod core;
