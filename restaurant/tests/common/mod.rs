//! Common test utilities and infrastructure
//!
//! Shared fixtures, a scripted console and an app builder used by the
//! restaurant test suites.

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{AppBuilder, ScriptedConsole, SequentialIds, TestApp, TestHelpers};
