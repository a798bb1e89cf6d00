pub mod balance;
pub mod break_event;
pub mod break_kind;
pub mod break_state;
pub mod columns;
pub mod day_sheet;
pub mod employee;
mod lenient;

pub use balance::BalanceRow;
pub use break_event::BreakEvent;
pub use break_kind::BreakKind;
pub use break_state::BreakState;
pub use columns::Columns;
pub use day_sheet::DaySheet;
pub use employee::EmployeeLimit;
