//! API Routes
//!
//! Route handlers organized by functionality.

pub mod frontend;
pub mod health;
pub mod relay;
