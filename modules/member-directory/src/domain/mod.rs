pub mod condition;
pub mod model;
pub mod repos;
