pub mod configuration;
pub mod controller;
pub mod domain;
pub mod error;
pub mod form;
pub mod submission_client;
pub mod telemetry;
