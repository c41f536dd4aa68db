mod blocked_user;
mod guild;
