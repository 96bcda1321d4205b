pub mod build;
pub mod chat;
pub mod contact;
pub mod dispatch;
pub mod projects;
pub mod schema;
pub mod theme;
pub mod typing;
