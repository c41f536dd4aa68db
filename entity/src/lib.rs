pub mod blocked_user;
pub mod guild;
pub mod prelude;
