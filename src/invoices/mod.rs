//! # Invoices Module
//!
//! CRUD over the invoice resource:
//! - List and fetch by id (with the issuing company nested)
//! - Create against an existing company, unpaid and dated server-side
//! - Update the amount and delete

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use routes::invoices_routes;
