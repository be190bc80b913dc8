//! Citizen portal backend: the bilingual localization core, durable
//! preference storage, and the chat-support proxy.

pub mod chat;
pub mod config;
pub mod i18n;
pub mod server;
pub mod storage;
