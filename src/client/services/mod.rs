pub mod api_client;
pub mod auth_service;
pub mod communities_service;
pub mod users_service;
