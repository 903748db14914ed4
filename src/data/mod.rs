//! Seeded demo data: credential directory and the community feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is immutable and built in process. There is no backend;
//! state modules copy what they need out of these tables.

pub mod directory;
pub mod feed;
