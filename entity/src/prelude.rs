pub use super::blocked_user::Entity as BlockedUser;
pub use super::guild::Entity as Guild;
