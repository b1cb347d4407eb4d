pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod forms;
pub mod logging;
pub mod pages;
pub mod routes;
pub mod storage;
