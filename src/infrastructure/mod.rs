pub mod database;
pub mod events;
pub mod mail;
pub mod repositories;
pub mod security;
pub mod time;
