pub mod avatar;
pub mod client;
pub mod platform;

pub use client::{UserServiceClient, DISCORD_USER_NOT_FOUND_CODE};
