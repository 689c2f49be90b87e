/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/***************************************/
/*             Constants               */
/***************************************/
pub const MIN_FLOOR: i32 = 1;
pub const MAX_FLOOR: i32 = 10;
pub const MIN_PRIORITY: i32 = 1;
pub const MAX_PRIORITY: i32 = 5;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Lowercase word used in movement trace lines.
    pub fn verb(&self) -> &'static str {
        match *self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Up
    }
}

impl From<bool> for Direction {
    fn from(up: bool) -> Self {
        if up {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "Up"),
            Direction::Down => write!(f, "Down"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction '{0}', expected 'up' or 'down'")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/**
 * A pending demand for service at a floor.
 *
 * `direction` is where the requester wants to travel, which is unrelated to the
 * direction the car has to move to reach them.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub floor: i32,
    pub direction: Direction,
    pub priority: i32,
}

impl Request {
    pub fn new(floor: i32, direction: Direction, priority: i32) -> Request {
        Request {
            floor,
            direction,
            priority,
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Floor: {}, Direction: {}, Priority: {}",
            self.floor, self.direction, self.priority
        )
    }
}
