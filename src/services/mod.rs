//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service functions own the enrollment rules and take the store as a
//! `&dyn ActivityStore` so route handlers stay focused on protocol
//! translation.

pub mod activity;
pub mod seed;
