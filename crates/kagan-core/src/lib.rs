#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Shared models and utilities for the Kagan multi-agent ticketing system.

pub mod agent;
pub mod role;
pub mod ticket;

mod time;

/// Public name for the concrete agent record.
///
/// Import this rather than [`agent::KaganAgent`]; the alias keeps downstream
/// code stable across internal renames.
pub use agent::KaganAgent as Agent;

pub use role::{AgentRole, InvalidRoleError};
pub use ticket::{Ticket, TicketPriority, TicketStatus, TicketType};
pub use time::{now_ms, utc_now, EpochMs};
