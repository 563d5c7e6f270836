//! Test suites for the dispatcher.
//!
//! Inline test modules that outgrow their implementation files live here,
//! one file per concern.

mod dispatch_properties;
