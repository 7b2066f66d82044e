pub mod clock;
pub mod env;
