pub mod dispatcher;
pub mod dispatcher_tests;
pub mod trace;

pub use dispatcher::{AdmissionError, Dispatcher};
pub use trace::{StatusSnapshot, TraceEvent};
