
pub mod strings;
pub mod macros;
pub mod fs;
pub mod datetime;
