//! API Routes
//!
//! Route handlers organized by functionality.

pub mod health;
pub mod logs;
pub mod reload;
pub mod stats;
