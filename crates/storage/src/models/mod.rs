mod branch;
mod entry;
mod event;
mod event_result;
mod team_member;

pub use branch::Branch;
pub use entry::{Entry, EntryType, Gender};
pub use event::{Event, EventType};
pub use event_result::EventResult;
pub use team_member::TeamMember;
