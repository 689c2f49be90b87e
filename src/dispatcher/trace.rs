/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, Request};

/***************************************/
/*       Public data structures        */
/***************************************/

/// One line of a run trace. `Display` renders the exact line text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    Processing(Request),
    Moved { floor: i32, direction: Direction },
    Completed(Request),
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Processing(request) => write!(
                f,
                "Processing request: Floor {}, Direction: {}, Priority: {}",
                request.floor, request.direction, request.priority
            ),
            TraceEvent::Moved { floor, direction } => {
                write!(f, "Elevator at floor {}, moving {}", floor, direction.verb())
            }
            TraceEvent::Completed(_) => write!(f, "Request completed."),
        }
    }
}

/// Read-only view of the dispatcher, serializable for the JSON status output.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    #[serde(rename = "currentFloor")]
    pub current_floor: i32,
    pub direction: Direction,
    #[serde(rename = "pendingRequests")]
    pub pending_requests: usize,
    pub requests: Vec<Request>,
}

impl fmt::Display for StatusSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current Floor: {}", self.current_floor)?;
        writeln!(f, "Direction: {}", self.direction)?;
        writeln!(f, "Pending Requests: {}", self.pending_requests)?;

        if self.requests.is_empty() {
            writeln!(f, "No pending requests.")
        } else {
            writeln!(f, "Requests in queue:")?;
            for request in &self.requests {
                writeln!(f, "  - {}", request)?;
            }
            Ok(())
        }
    }
}
