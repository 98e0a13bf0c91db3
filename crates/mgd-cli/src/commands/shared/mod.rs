pub mod dates;
pub mod limit;
pub mod parse;
