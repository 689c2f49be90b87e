/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info, warn};
use std::fmt::Write;

/***************************************/
/*           Local modules             */
/***************************************/
use super::trace::{StatusSnapshot, TraceEvent};
use crate::elevator::Elevator;
use crate::shared::{Direction, Request, MAX_FLOOR, MAX_PRIORITY, MIN_FLOOR, MIN_PRIORITY};

/***************************************/
/*               Errors                */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AdmissionError {
    #[error("floor {0} is outside 1..=10")]
    FloorOutOfRange(i32),
    #[error("priority {0} is outside 1..=5")]
    PriorityOutOfRange(i32),
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Orders pending requests and drives the elevator through them.
 *
 * Requests are admitted unsorted and the queue is sorted by descending priority
 * before every pick. The sort is stable, so equal priorities are served in the
 * order they were added.
 *
 * # Fields
 * - `elevator`:    The car, owned and mutated only by `process_requests`.
 * - `pending`:     Requests not yet started.
 * - `event_tx`:    Optional subscriber receiving every trace event.
 */
#[derive(Debug, Default)]
pub struct Dispatcher {
    elevator: Elevator,
    pending: Vec<Request>,
    event_tx: Option<cbc::Sender<TraceEvent>>,
}

impl Dispatcher {
    pub fn new() -> Dispatcher {
        Dispatcher::with_elevator(Elevator::new())
    }

    pub fn with_elevator(elevator: Elevator) -> Dispatcher {
        Dispatcher {
            elevator,
            pending: Vec::new(),
            event_tx: None,
        }
    }

    /// Queues a request. Out of range floors or priorities are dropped without notice.
    pub fn add_request(&mut self, floor: i32, direction: Direction, priority: i32) {
        if let Err(e) = self.try_add_request(floor, direction, priority) {
            warn!("Dropping request: {}", e);
        }
    }

    pub fn try_add_request(
        &mut self,
        floor: i32,
        direction: Direction,
        priority: i32,
    ) -> Result<(), AdmissionError> {
        if !(MIN_FLOOR..=MAX_FLOOR).contains(&floor) {
            return Err(AdmissionError::FloorOutOfRange(floor));
        }
        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&priority) {
            return Err(AdmissionError::PriorityOutOfRange(priority));
        }

        let request = Request::new(floor, direction, priority);
        debug!("Admitted request: {}", request);
        self.pending.push(request);
        Ok(())
    }

    /// Serves every pending request, highest priority first, and returns the trace.
    pub fn process_requests(&mut self) -> String {
        let mut output = String::new();
        let mut served = 0;

        while !self.pending.is_empty() {
            self.sort_requests();
            let current = self.pending.remove(0);
            debug!("Dispatching request: {}", current);
            self.emit(&mut output, TraceEvent::Processing(current));

            while self.elevator.current_floor() != current.floor {
                let direction = Direction::from(self.elevator.current_floor() < current.floor);
                self.elevator.set_direction(direction);
                self.elevator.step();
                self.emit(
                    &mut output,
                    TraceEvent::Moved {
                        floor: self.elevator.current_floor(),
                        direction: self.elevator.direction(),
                    },
                );
            }

            self.emit(&mut output, TraceEvent::Completed(current));
            served += 1;
        }

        info!(
            "Served {} request(s), elevator resting at floor {}",
            served,
            self.elevator.current_floor()
        );
        output
    }

    pub fn status(&self) -> String {
        self.snapshot().to_string()
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            current_floor: self.elevator.current_floor(),
            direction: self.elevator.direction(),
            pending_requests: self.pending.len(),
            requests: self.pending.clone(),
        }
    }

    /// Returns a receiver that gets every trace event of subsequent runs.
    /// Replaces any earlier subscriber.
    pub fn subscribe(&mut self) -> cbc::Receiver<TraceEvent> {
        let (event_tx, event_rx) = cbc::unbounded::<TraceEvent>();
        self.event_tx = Some(event_tx);
        event_rx
    }

    pub fn pending(&self) -> &[Request] {
        &self.pending
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn elevator(&self) -> &Elevator {
        &self.elevator
    }

    fn sort_requests(&mut self) {
        self.pending.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    fn emit(&mut self, output: &mut String, event: TraceEvent) {
        // Writing to a String cannot fail
        let _ = writeln!(output, "{}", event);

        let disconnected = match &self.event_tx {
            Some(event_tx) => event_tx.send(event).is_err(),
            None => false,
        };
        if disconnected {
            debug!("Trace subscriber disconnected");
            self.event_tx = None;
        }
    }
}
