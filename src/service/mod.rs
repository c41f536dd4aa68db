//! Business logic for the relay pipeline.
//!
//! The pipeline runs normalization (in the bot handlers) followed by
//! [`authorization`] (role → block → quota, short-circuiting), [`prefix`]
//! resolution, and [`delivery`]. [`deletion`] runs independently, driven by
//! reaction-added events referencing previously delivered messages.

pub mod authorization;
pub mod deletion;
pub mod delivery;
pub mod prefix;
pub mod relay;
