// src/application/commands/events/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateEventCommand;
pub use delete::DeleteEventCommand;
pub use service::EventCommandService;
pub use update::UpdateEventCommand;
