//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! the address book and its repository. They provide a clean boundary
//! between the command handlers and the data access layer.

mod contact_service;

pub use contact_service::{AddOutcome, ContactService};
