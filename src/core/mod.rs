//! Pure business logic of the break scheduler. Nothing here does I/O.

pub mod events;
pub mod history;
pub mod limits;
pub mod remaining;

pub use events::{
    EventAction, EventFields, EventRow, apply_action, apply_edit, event_rows, new_event, next_id,
};
pub use limits::{LimitDefaults, normalize_limits};
pub use remaining::{compute_remaining, unknown_employees};
