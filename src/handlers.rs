pub mod departments;
pub mod health;
pub mod systems;
pub mod utilization;
