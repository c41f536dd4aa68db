//! Database repository layer.
//!
//! Repositories own all SeaORM queries against the guild record store. The
//! quota counter mutation lives here as a single SQL statement so that
//! increment-and-check is atomic with respect to concurrent events for the
//! same guild.

pub mod blocked_user;
pub mod guild;

pub use blocked_user::BlockedUserRepository;
pub use guild::GuildRepository;

#[cfg(test)]
mod test;
