pub mod durations;
pub mod enums;
pub mod project;
pub mod project_list;
pub mod timer;

pub use durations::DurationTable;
pub use enums::{TimerMode, UiMode};
pub use project::Project;
pub use project_list::ProjectList;
pub use timer::{format_clock, Expiry, Timer};
