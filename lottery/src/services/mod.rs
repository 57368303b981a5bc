//! Service implementations
//!
//! Real implementations of the service traits that perform actual I/O.

pub mod preference_store;

#[cfg(test)]
pub mod tests;

pub use preference_store::RealPreferenceStore;
