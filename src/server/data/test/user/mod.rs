use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, Role},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
