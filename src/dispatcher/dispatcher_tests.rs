/*
 * Unit tests for dispatcher module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_dispatcher_init
 * - test_add_request_drops_invalid
 * - test_try_add_request_reports_rejection
 * - test_priority_ordering
 * - test_equal_priority_keeps_insertion_order
 * - test_single_request_trace
 * - test_multi_request_priority_resolution
 * - test_moving_down_trace
 * - test_request_at_current_floor_has_no_movement
 * - test_process_requests_exhausts_queue
 * - test_process_requests_empty_queue
 * - test_status_lists_pending_in_insertion_order
 * - test_status_is_idempotent
 * - test_floor_stays_in_bounds
 * - test_subscriber_receives_trace_events
 * - test_dropped_subscriber_does_not_break_run
 * - test_snapshot_json
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod dispatcher_tests {
    use crate::dispatcher::{AdmissionError, Dispatcher, TraceEvent};
    use crate::elevator::Elevator;
    use crate::shared::Direction::{Down, Up};
    use crate::shared::{Direction, Request, MAX_FLOOR, MIN_FLOOR};

    #[test]
    fn test_dispatcher_init() {
        // Arrange
        let dispatcher = Dispatcher::new();

        // Assert
        assert_eq!(dispatcher.pending_count(), 0);
        assert_eq!(dispatcher.elevator().current_floor(), 1);
        assert_eq!(dispatcher.elevator().direction(), Up);
    }

    #[test]
    fn test_add_request_drops_invalid() {
        // Arrange
        let mut dispatcher = Dispatcher::new();

        // Act
        for floor in [0, 11, -5] {
            dispatcher.add_request(floor, Up, 3);
        }
        for priority in [0, 6] {
            dispatcher.add_request(5, Down, priority);
        }

        // Assert
        assert_eq!(dispatcher.pending_count(), 0);
        assert!(dispatcher.process_requests().is_empty());
        assert!(dispatcher.status().contains("No pending requests."));
    }

    #[test]
    fn test_try_add_request_reports_rejection() {
        // Arrange
        let mut dispatcher = Dispatcher::new();

        // Act & Assert
        assert_eq!(
            dispatcher.try_add_request(11, Up, 9),
            Err(AdmissionError::FloorOutOfRange(11))
        );
        assert_eq!(
            dispatcher.try_add_request(4, Up, 0),
            Err(AdmissionError::PriorityOutOfRange(0))
        );
        assert_eq!(dispatcher.try_add_request(10, Down, 5), Ok(()));
        assert_eq!(dispatcher.pending_count(), 1);
    }

    #[test]
    fn test_priority_ordering() {
        // Arrange
        let mut dispatcher = Dispatcher::new();
        dispatcher.add_request(3, Up, 2);
        dispatcher.add_request(6, Down, 5);
        dispatcher.add_request(9, Up, 3);

        // Act
        let trace = dispatcher.process_requests();

        // Assert
        let processing: Vec<&str> = trace
            .lines()
            .filter(|line| line.starts_with("Processing request"))
            .collect();
        assert_eq!(
            processing,
            vec![
                "Processing request: Floor 6, Direction: Down, Priority: 5",
                "Processing request: Floor 9, Direction: Up, Priority: 3",
                "Processing request: Floor 3, Direction: Up, Priority: 2",
            ]
        );
    }

    #[test]
    fn test_equal_priority_keeps_insertion_order() {
        // Arrange
        let mut dispatcher = Dispatcher::new();
        dispatcher.add_request(4, Up, 2);
        dispatcher.add_request(2, Down, 2);
        dispatcher.add_request(8, Up, 4);
        dispatcher.add_request(7, Down, 2);

        // Act
        let trace = dispatcher.process_requests();

        // Assert
        let floors: Vec<&str> = trace
            .lines()
            .filter_map(|line| line.strip_prefix("Processing request: Floor "))
            .map(|rest| rest.split(',').next().unwrap_or_default())
            .collect();
        assert_eq!(floors, vec!["8", "4", "2", "7"]);
    }

    #[test]
    fn test_single_request_trace() {
        // Arrange
        let mut dispatcher = Dispatcher::new();
        dispatcher.add_request(5, Up, 3);

        // Act
        let trace = dispatcher.process_requests();

        // Assert
        assert_eq!(
            trace,
            "Processing request: Floor 5, Direction: Up, Priority: 3\n\
             Elevator at floor 2, moving up\n\
             Elevator at floor 3, moving up\n\
             Elevator at floor 4, moving up\n\
             Elevator at floor 5, moving up\n\
             Request completed.\n"
        );
        assert_eq!(
            dispatcher.status(),
            "Current Floor: 5\nDirection: Up\nPending Requests: 0\nNo pending requests.\n"
        );
    }

    #[test]
    fn test_multi_request_priority_resolution() {
        // Arrange
        let mut dispatcher = Dispatcher::new();
        dispatcher.add_request(8, Down, 1);
        dispatcher.add_request(2, Up, 5);

        // Act
        let trace = dispatcher.process_requests();

        // Assert
        let lines: Vec<&str> = trace.lines().collect();
        assert_eq!(lines[0], "Processing request: Floor 2, Direction: Up, Priority: 5");
        assert_eq!(lines[1], "Elevator at floor 2, moving up");
        assert_eq!(lines[2], "Request completed.");
        assert_eq!(lines[3], "Processing request: Floor 8, Direction: Down, Priority: 1");
        assert_eq!(lines[4], "Elevator at floor 3, moving up");
        assert_eq!(lines[lines.len() - 2], "Elevator at floor 8, moving up");
        assert_eq!(lines[lines.len() - 1], "Request completed.");
        assert_eq!(lines.len(), 3 + 1 + 6 + 1);
    }

    #[test]
    fn test_moving_down_trace() {
        // Arrange
        let mut dispatcher = Dispatcher::with_elevator(Elevator::at(4));
        dispatcher.add_request(2, Up, 1);

        // Act
        let trace = dispatcher.process_requests();

        // Assert
        assert_eq!(
            trace,
            "Processing request: Floor 2, Direction: Up, Priority: 1\n\
             Elevator at floor 3, moving down\n\
             Elevator at floor 2, moving down\n\
             Request completed.\n"
        );
        assert_eq!(dispatcher.elevator().direction(), Down);
    }

    #[test]
    fn test_request_at_current_floor_has_no_movement() {
        // Arrange
        let mut dispatcher = Dispatcher::new();
        dispatcher.add_request(1, Down, 4);

        // Act
        let trace = dispatcher.process_requests();

        // Assert
        assert_eq!(
            trace,
            "Processing request: Floor 1, Direction: Down, Priority: 4\nRequest completed.\n"
        );
        assert_eq!(dispatcher.elevator().direction(), Up);
    }

    #[test]
    fn test_process_requests_exhausts_queue() {
        // Arrange
        let mut dispatcher = Dispatcher::new();
        for floor in 1..=10 {
            dispatcher.add_request(floor, Up, (floor % 5) + 1);
        }
        assert_eq!(dispatcher.pending_count(), 10);

        // Act
        let trace = dispatcher.process_requests();

        // Assert
        assert_eq!(trace.matches("Request completed.").count(), 10);
        assert_eq!(dispatcher.pending_count(), 0);
        let status = dispatcher.status();
        assert!(status.contains("Pending Requests: 0\n"));
        assert!(status.ends_with("No pending requests.\n"));
    }

    #[test]
    fn test_process_requests_empty_queue() {
        // Arrange
        let mut dispatcher = Dispatcher::new();

        // Act
        let trace = dispatcher.process_requests();

        // Assert
        assert_eq!(trace, "");
        assert_eq!(dispatcher.elevator().current_floor(), 1);
    }

    #[test]
    fn test_status_lists_pending_in_insertion_order() {
        // Arrange
        let mut dispatcher = Dispatcher::new();
        dispatcher.add_request(3, Up, 1);
        dispatcher.add_request(9, Down, 5);

        // Act
        let status = dispatcher.status();

        // Assert
        assert_eq!(
            dispatcher.pending(),
            &[Request::new(3, Up, 1), Request::new(9, Down, 5)]
        );
        assert_eq!(
            status,
            "Current Floor: 1\n\
             Direction: Up\n\
             Pending Requests: 2\n\
             Requests in queue:\n  \
             - Floor: 3, Direction: Up, Priority: 1\n  \
             - Floor: 9, Direction: Down, Priority: 5\n"
        );
    }

    #[test]
    fn test_status_is_idempotent() {
        // Arrange
        let mut dispatcher = Dispatcher::new();
        dispatcher.add_request(6, Down, 2);
        dispatcher.add_request(2, Up, 4);

        // Act
        let first = dispatcher.status();
        let second = dispatcher.status();

        // Assert
        assert_eq!(first, second);
        assert_eq!(dispatcher.pending_count(), 2);
    }

    #[test]
    fn test_floor_stays_in_bounds() {
        // Arrange
        let mut dispatcher = Dispatcher::new();
        let events = dispatcher.subscribe();
        let mut seed: u32 = 17;

        // Act
        for _ in 0..20 {
            for _ in 0..7 {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                let floor = (seed >> 16) as i32 % 10 + 1;
                let priority = (seed >> 8) as i32 % 5 + 1;
                dispatcher.add_request(floor, Direction::from(seed & 1 == 0), priority);
            }
            dispatcher.process_requests();
        }

        // Assert
        let mut moves = 0;
        for event in events.try_iter() {
            if let TraceEvent::Moved { floor, .. } = event {
                assert!((MIN_FLOOR..=MAX_FLOOR).contains(&floor));
                moves += 1;
            }
        }
        assert!(moves > 0);
        assert_eq!(dispatcher.pending_count(), 0);
    }

    #[test]
    fn test_subscriber_receives_trace_events() {
        // Arrange
        let mut dispatcher = Dispatcher::new();
        let events = dispatcher.subscribe();
        dispatcher.add_request(3, Down, 2);

        // Act
        let trace = dispatcher.process_requests();

        // Assert
        let request = Request::new(3, Down, 2);
        let received: Vec<TraceEvent> = events.try_iter().collect();
        assert_eq!(
            received,
            vec![
                TraceEvent::Processing(request),
                TraceEvent::Moved { floor: 2, direction: Up },
                TraceEvent::Moved { floor: 3, direction: Up },
                TraceEvent::Completed(request),
            ]
        );
        let rendered: String = received.iter().map(|e| format!("{}\n", e)).collect();
        assert_eq!(rendered, trace);
    }

    #[test]
    fn test_dropped_subscriber_does_not_break_run() {
        // Arrange
        let mut dispatcher = Dispatcher::new();
        drop(dispatcher.subscribe());
        dispatcher.add_request(2, Up, 1);

        // Act
        let trace = dispatcher.process_requests();

        // Assert
        assert!(trace.ends_with("Request completed.\n"));
        assert_eq!(dispatcher.pending_count(), 0);
    }

    #[test]
    fn test_snapshot_json() {
        // Arrange
        let mut dispatcher = Dispatcher::new();
        dispatcher.add_request(4, Down, 3);

        // Act
        let json = serde_json::to_value(dispatcher.snapshot()).unwrap();

        // Assert
        assert_eq!(
            json,
            serde_json::json!({
                "currentFloor": 1,
                "direction": "up",
                "pendingRequests": 1,
                "requests": [{ "floor": 4, "direction": "down", "priority": 3 }]
            })
        );
    }
}
