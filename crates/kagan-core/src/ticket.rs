//! Ticket record and its classification enums.
//!
//! Tickets are plain data: status changes here are field updates with
//! timestamp bookkeeping, not a workflow engine. Transition rules belong to
//! the orchestration layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::role::AgentRole;
use crate::time::utc_now;

/// Urgency of a ticket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    /// Can wait.
    Low,
    /// Default urgency.
    Medium,
    /// Needs attention before anything else.
    High,
}

/// Board column a ticket currently sits in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Captured but not yet scheduled.
    Backlog,
    /// Scheduled to be picked up next.
    UpNext,
    /// Being worked on.
    InProgress,
    /// Awaiting review.
    InReview,
    /// Finished.
    Done,
}

/// Kind of work a ticket describes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TicketType {
    /// New functionality.
    Feature,
    /// Defect in existing behavior.
    Bug,
    /// Maintenance work with no user-visible change.
    Chore,
}

/// A unit of work tracked on the board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ticket {
    /// Unique identifier.
    pub id: Uuid,
    /// Short human-readable summary.
    pub title: String,
    /// Longer free-form description.
    pub description: String,
    /// Kind of work.
    pub ty: TicketType,
    /// Urgency.
    pub priority: TicketPriority,
    /// Current board column.
    pub status: TicketStatus,
    /// Role the ticket is currently assigned to, if any.
    #[serde(default)]
    pub assignee_role: Option<AgentRole>,
    /// When the ticket was created (UTC).
    pub created_at: DateTime<Utc>,
    /// When the ticket was last modified (UTC). Always >= `created_at`.
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Creates a new ticket in the backlog.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        ty: TicketType,
        priority: TicketPriority,
    ) -> Self {
        let now = utc_now();
        let ticket = Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            ty,
            priority,
            status: TicketStatus::Backlog,
            assignee_role: None,
            created_at: now,
            updated_at: now,
        };
        tracing::debug!(ticket_id = %ticket.id, "ticket created");
        ticket
    }

    /// Moves the ticket to a new column and refreshes `updated_at`.
    pub fn set_status(&mut self, status: TicketStatus) {
        tracing::debug!(ticket_id = %self.id, ?status, "ticket status changed");
        self.status = status;
        self.updated_at = utc_now();
    }

    /// Assigns the ticket to a role and refreshes `updated_at`.
    pub fn assign(&mut self, role: AgentRole) {
        tracing::debug!(ticket_id = %self.id, role = %role, "ticket assigned");
        self.assignee_role = Some(role);
        self.updated_at = utc_now();
    }
}
