pub mod config;
pub mod fetch;
pub mod format;
pub mod markdown;
pub mod platform;
pub mod timing;
pub mod services;
