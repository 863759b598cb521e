pub mod error;
pub mod problem_handler;
pub mod testcases;
