//! Tests for lottery services
