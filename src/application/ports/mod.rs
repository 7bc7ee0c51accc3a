pub mod events;
pub mod mail;
pub mod security;
pub mod time;
