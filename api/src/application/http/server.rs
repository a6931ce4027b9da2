pub mod api_entities;
pub mod app_state;
pub mod http_server;
pub mod index;
pub mod openapi;
