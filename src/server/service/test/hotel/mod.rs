use crate::server::{
    error::{catalog::CatalogError, AppError},
    model::{hotel::SearchHotelsParams, room::CreateRoomParams},
    service::hotel::HotelService,
};
use test_utils::{builder::TestBuilder, factory};

mod search;
