pub mod add;
pub mod clear;
pub mod done;
pub mod list;
pub mod priority;
pub mod rm;
pub mod search;
