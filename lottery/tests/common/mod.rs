//! Common test utilities and fixtures shared by the integration suites

pub mod fixtures;

pub use fixtures::TestFixtures;
