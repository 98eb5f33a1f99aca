pub mod dto;
pub mod planner;
pub mod sort;

mod planner_test;
