pub mod date;

pub use date::DateError;
