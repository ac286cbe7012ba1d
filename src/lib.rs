//! Suncrest Finance website: server-rendered pages, contact form and appointment booking.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
pub mod util;
