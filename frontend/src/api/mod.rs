mod auth;
pub mod client;
mod referrals;
pub mod types;

pub use client::*;
pub use types::*;
