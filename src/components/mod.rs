//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render domain objects and raise callbacks. Only `navigation`
//! and `require_auth` read the session store; cards never touch storage or
//! auth.

pub mod navigation;
pub mod post_card;
pub mod profile_card;
pub mod require_auth;
pub mod share_trip_form;
pub mod trip_card;
