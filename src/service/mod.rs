pub mod check_service;
pub mod self_test;

pub use check_service::{CheckRequest, CheckServiceImpl, DateInputs};
