//! Storage keys. Values are compatible with the browser build's
//! `localStorage` layout.

pub const GEAR_POSITION: &str = "erzyGearPos";
pub const CHAT_POSITION: &str = "erzyChatPos";
pub const CHAT_HISTORY: &str = "erzyChatHistory";
pub const API_KEY: &str = "geminiApiKey";
pub const MODEL: &str = "modelSelect";
pub const DARK_MODE: &str = "erzyDarkMode";
