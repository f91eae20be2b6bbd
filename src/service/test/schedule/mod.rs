use crate::model::outcome::OpOutcome;
use crate::model::schedule::ScheduleForm;
use crate::service::schedule::ScheduleService;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod toggle;
