pub mod config;
pub mod db;
pub mod doc;
pub mod dto;
pub mod entity;
pub mod error;
pub mod models;
pub mod params;
pub mod response;
pub mod serialize;
pub mod services;
pub mod state;
