pub mod next_opening;
pub mod open_now;
pub mod opens_later;
pub mod summary;
