//! # shelter-schedule
//!
//! Weekly visit availability for shelter animals.
//!
//! Given an animal, its shelter's daily operating hours, the animal's active
//! reservations and the shelter's closures, computes for each day of a week
//! which windows are free, which are reserved, and which are closed.
//!
//! ## Modules
//!
//! - [`slot`]: Typed `[start, end)` intervals: reservations and closures
//! - [`hours`]: A shelter's daily operating window
//! - [`normalizer`]: Clip slots to operating hours and split them per day
//! - [`availability`]: Merge occupied spans and derive available blocks
//! - [`assembler`]: Package a week into per-day schedules
//! - [`overlap`]: Report reservations colliding with closures
//! - [`handler`]: Query orchestration over injected collaborators
//! - [`ports`]: Collaborator traits; [`store`]: in-memory implementation
//! - [`query`]: Requests, caller identity, week-start validation
//! - [`config`]: TOML configuration
//! - [`error`]: Error types

pub mod assembler;
pub mod availability;
pub mod config;
pub mod error;
pub mod handler;
pub mod hours;
pub mod normalizer;
pub mod overlap;
pub mod ports;
pub mod query;
pub mod schedule;
pub mod slot;
pub mod store;

pub use assembler::assemble_week_schedule;
pub use availability::{calculate_weekly_available_ranges, find_first_available_block, TimeBlock};
pub use config::ScheduleConfig;
pub use error::{ErrorKind, ScheduleError};
pub use handler::{compute_week_schedule, WeeklyScheduleHandler};
pub use hours::OperatingHours;
pub use normalizer::{normalize, NormalizedSlots};
pub use query::{Caller, WeekStartPolicy, WeeklyScheduleQuery};
pub use schedule::{Animal, AnimalWeeklySchedule, DailySchedule};
pub use slot::{Slot, SlotDiscriminator, SlotKind};
pub use store::InMemoryStore;
