pub mod analytics;
pub mod auth;
pub mod bot;
pub mod recommendations;
