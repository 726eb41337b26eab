//! # Companies Module
//!
//! CRUD over the company resource:
//! - List and fetch by code (with the ids of owned invoices)
//! - Create with a slug-derived code
//! - Update and delete

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;


pub use routes::companies_routes;
