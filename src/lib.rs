pub mod api;
pub mod config;
pub mod engine;
pub mod ledger;
pub mod observability;
pub mod service;
