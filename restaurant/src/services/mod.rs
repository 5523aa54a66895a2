//! Service implementations
//!
//! Real implementations of the service traits. These are the production
//! implementations that touch the terminal and the system clock.

pub mod console;
pub mod id_generator;

#[cfg(test)]
mod tests;

pub use console::RealConsole;
pub use id_generator::ClockIdGenerator;
