//! Agent record.
//!
//! Behavior (execution, review, planning) lives in the orchestration layer;
//! this crate only defines the identity record shared across it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::role::AgentRole;
use crate::time::utc_now;

/// An agent registered with the system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KaganAgent {
    /// Unique identifier for this agent.
    pub id: Uuid,
    /// Functional category, fixed at construction.
    pub role: AgentRole,
    /// When this agent was created (UTC).
    pub created_at: DateTime<Utc>,
}

impl KaganAgent {
    /// Creates a new agent with the given role.
    pub fn new(role: AgentRole) -> Self {
        let agent = Self {
            id: Uuid::new_v4(),
            role,
            created_at: utc_now(),
        };
        tracing::debug!(agent_id = %agent.id, role = %agent.role, "agent created");
        agent
    }
}
