pub mod tt;
pub mod utc;

pub use tt::{tt_from_calendar, TT};
pub use utc::{utc_from_calendar, UTC};
