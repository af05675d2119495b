//! Shared test-data-generation strategies.

use kagan_core::{AgentRole, Ticket, TicketPriority, TicketStatus, TicketType};
use proptest::prelude::*;

pub fn arb_role() -> impl Strategy<Value = AgentRole> {
    prop_oneof![
        Just(AgentRole::Worker),
        Just(AgentRole::Reviewer),
        Just(AgentRole::Planner),
    ]
}

pub fn arb_priority() -> impl Strategy<Value = TicketPriority> {
    prop_oneof![
        Just(TicketPriority::Low),
        Just(TicketPriority::Medium),
        Just(TicketPriority::High),
    ]
}

pub fn arb_status() -> impl Strategy<Value = TicketStatus> {
    prop_oneof![
        Just(TicketStatus::Backlog),
        Just(TicketStatus::UpNext),
        Just(TicketStatus::InProgress),
        Just(TicketStatus::InReview),
        Just(TicketStatus::Done),
    ]
}

pub fn arb_ticket_type() -> impl Strategy<Value = TicketType> {
    prop_oneof![
        Just(TicketType::Feature),
        Just(TicketType::Bug),
        Just(TicketType::Chore),
    ]
}

pub fn arb_ticket() -> impl Strategy<Value = Ticket> {
    (
        "[a-zA-Z0-9 ]{1,40}",
        ".{0,200}",
        arb_ticket_type(),
        arb_priority(),
        arb_status(),
        prop::option::of(arb_role()),
    )
        .prop_map(|(title, description, ty, priority, status, assignee)| {
            let mut ticket = Ticket::new(title, description, ty, priority);
            ticket.set_status(status);
            if let Some(role) = assignee {
                ticket.assign(role);
            }
            ticket
        })
}
