pub mod communities;
pub mod create_community;
pub mod logger;
pub mod login;
pub mod main_actions;
pub mod members;
pub mod requests;
