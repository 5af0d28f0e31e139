pub mod config;
pub mod core;
pub mod decorate;
pub mod estimators;
pub mod report;
pub mod streams;
pub mod tasks;
pub mod text;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
