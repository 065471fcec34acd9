//! Practice scheduling: recurrence expansion, conflict detection and batch creation.

pub mod conflict;
pub mod memory;
pub mod recurrence;
pub mod response;
pub mod service;
pub mod store;
pub mod types;


pub use response::CreatePracticeResponse;
pub use service::{BatchStage, create_practices};
pub use store::{DbPracticeStore, PracticeStore};
pub use types::{
    ConflictRecord, CreatePracticeRequest, NewPracticeOccurrence, PracticeOccurrence,
    RecurrenceRule, ScheduledPractice,
};
