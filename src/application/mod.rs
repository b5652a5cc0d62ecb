//! Application layer - command and query handlers.
//!
//! Handlers orchestrate domain operations through the port traits. They
//! own no business rules themselves: validation and state transitions
//! live in the domain, persistence behind the ports.

pub mod handlers;
