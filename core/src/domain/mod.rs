pub mod chat;
pub mod common;
pub mod diet;
pub mod image;
pub mod nutrient;
pub mod response;
pub mod social;
