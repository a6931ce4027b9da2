pub mod chat;
pub mod diet;
pub mod health;
pub mod image;
pub mod nutrient;
pub mod server;
pub mod social;
