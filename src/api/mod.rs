//! Внешний API движка фаркла для фронта и чата.
//!
//! Здесь описываются:
//! - команды (commands.rs): всё, что меняет партию (бросок, отложить, закончить ход);
//! - запросы (queries.rs): только чтение;
//! - DTO (dto.rs): удобные структуры для фронта, включая `{ valid, reason }`;
//! - ошибки (errors.rs): то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
