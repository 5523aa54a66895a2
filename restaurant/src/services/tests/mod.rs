//! Service-specific tests
//!
//! One file per service, each with its own small fixtures.
