pub mod config;
pub mod domain;
pub mod greeting;
pub mod metrics;
pub mod routes;
pub mod startup;
pub mod telem;
