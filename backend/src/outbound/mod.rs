//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **supabase**: reqwest clients for the hosted identity service and the
//!   record store's REST interface, one adapter per security context.
//!
//! Adapters are thin translators that convert between domain types and
//! wire representations. They contain no business logic.

pub mod supabase;
