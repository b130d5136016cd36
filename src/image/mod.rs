pub mod frame;
pub mod io;

pub use self::frame::{count_nonzero, to_gray, validate_frame};
