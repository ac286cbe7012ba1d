//! Application services: page assembly, forms and calendar artifacts.

pub mod blogs;
pub mod booking;
pub mod calendar;
pub mod chrome;
pub mod contact;
pub mod counters;
pub mod error;
pub mod mailer;
pub mod markdown;
pub mod pagination;
