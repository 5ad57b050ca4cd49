pub mod career;
pub mod chat;
