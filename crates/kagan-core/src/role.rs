//! Agent role tags.
//!
//! A role is a value object: two roles with the same variant are equal, and
//! an agent's role is fixed at construction time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Functional category of an agent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    /// Executes tickets (coding, research, writing).
    Worker,
    /// Audits finished work before it lands.
    Reviewer,
    /// Decomposes goals into tickets.
    Planner,
}

/// A string outside the closed role set was rejected at construction time.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown agent role '{0}' (expected one of: worker, reviewer, planner)")]
pub struct InvalidRoleError(pub String);

impl AgentRole {
    /// All roles in declaration order.
    pub const ALL: [AgentRole; 3] = [AgentRole::Worker, AgentRole::Reviewer, AgentRole::Planner];

    /// Canonical wire string for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentRole::Worker => "worker",
            AgentRole::Reviewer => "reviewer",
            AgentRole::Planner => "planner",
        }
    }
}

impl FromStr for AgentRole {
    type Err = InvalidRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "worker" => Ok(AgentRole::Worker),
            "reviewer" => Ok(AgentRole::Reviewer),
            "planner" => Ok(AgentRole::Planner),
            other => Err(InvalidRoleError(other.to_string())),
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
