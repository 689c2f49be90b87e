pub mod macros;
pub mod structs;

pub use structs::Direction;
pub use structs::ParseDirectionError;
pub use structs::Request;
pub use structs::{MAX_FLOOR, MAX_PRIORITY, MIN_FLOOR, MIN_PRIORITY};
