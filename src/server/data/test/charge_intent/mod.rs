use crate::server::{
    data::charge_intent::ChargeIntentRepository,
    error::AppError,
    model::{
        charge_intent::{ChargeStatus, CHARGE_DETAILS},
        transaction::{ChargeParam, LineItemParam},
    },
};
use chrono::{Duration, Utc};
use entity::prelude::ChargeIntent;
use test_utils::{builder::TestBuilder, factory::charge_intent::ChargeIntentFactory};

mod create;
mod find_stale;
mod get_by_status;
mod transition;
