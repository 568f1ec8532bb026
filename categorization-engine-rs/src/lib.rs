//! # Ticket Categorization Engine
//!
//! Rule-based categorization core for the VibeFI support-ticket service.
//! Maps a validated ticket (channel, severity, free-text summary) to a
//! deterministic action plan: a resolution decision, the reasoning behind
//! it, and an ordered checklist of next steps for a human operator.
//!
//! The engine is a pure function over its input: no I/O, no shared state,
//! no async. Callers may invoke it concurrently without any coordination.

mod engine;
mod errors;
mod ticket;

pub use engine::categorize;
pub use errors::SeverityParseError;
pub use ticket::{ActionPlan, ActionType, Severity, TicketInput};

/// Version of the categorization engine
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
