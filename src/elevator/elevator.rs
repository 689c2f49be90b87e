/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::trace;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, MAX_FLOOR, MIN_FLOOR};

/**
 * The simulated car.
 *
 * Holds the current floor and the direction of the last or current movement.
 * The car moves exactly one floor per `step` and never leaves the building.
 *
 * # Fields
 * - `current_floor`:   Floor the car is at, always within [MIN_FLOOR, MAX_FLOOR].
 * - `direction`:       Direction of travel, `Up` on creation.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elevator {
    current_floor: i32,
    direction: Direction,
}

impl Elevator {
    pub fn new() -> Elevator {
        Elevator {
            current_floor: MIN_FLOOR,
            direction: Direction::Up,
        }
    }

    /// Places the car at `floor`, clamped into the building.
    pub fn at(floor: i32) -> Elevator {
        Elevator {
            current_floor: floor.clamp(MIN_FLOOR, MAX_FLOOR),
            direction: Direction::Up,
        }
    }

    pub fn step(&mut self) {
        match self.direction {
            Direction::Up if self.current_floor < MAX_FLOOR => self.current_floor += 1,
            Direction::Down if self.current_floor > MIN_FLOOR => self.current_floor -= 1,
            // Already at the boundary for this direction
            _ => (),
        }
        trace!("Car at floor {} heading {}", self.current_floor, self.direction.verb());
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn current_floor(&self) -> i32 {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Default for Elevator {
    fn default() -> Self {
        Elevator::new()
    }
}
