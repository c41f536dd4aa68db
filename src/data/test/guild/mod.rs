use crate::data::guild::{GuildRepository, QuotaOutcome, MONTHLY_MESSAGE_LIMIT};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_or_create;
mod increment_and_check_quota;
