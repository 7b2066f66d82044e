pub mod calendar_date;
pub mod clock;
pub mod fixed_clock;
pub mod system_clock;

pub use calendar_date::CalendarDate;
pub use clock::Clock;
pub use fixed_clock::FixedClock;
pub use system_clock::SystemClock;
