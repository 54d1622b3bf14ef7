pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    activity_service::ActivityService, auth_service::AuthService, user_service::UserService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub user_service: UserService,
    pub activity_service: ActivityService,
    pub auth_service: AuthService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let user_service = UserService::new(pool.clone());
        let activity_service = ActivityService::new(pool.clone());
        let auth_service = AuthService::new(pool.clone());

        Self {
            pool,
            user_service,
            activity_service,
            auth_service,
        }
    }
}
