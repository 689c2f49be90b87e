//! Single car elevator simulator.
//!
//! A [`Dispatcher`] accepts floor requests, orders them by priority and drives an
//! [`Elevator`] one floor at a time, producing a text trace of every movement.

/* Modules */
pub mod config;
pub mod control;
pub mod dispatcher;
pub mod elevator;
pub mod scenario;
pub mod shared;

pub use dispatcher::{AdmissionError, Dispatcher, StatusSnapshot, TraceEvent};
pub use elevator::Elevator;
pub use shared::{Direction, Request};
