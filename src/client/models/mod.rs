pub mod app_state;
pub mod cards;
pub mod controls;
pub mod entities;
pub mod messages;
