//! This file serves as the root for all SeaORM entity modules.
//! The warehouse is a small star schema: three dimension tables
//! (system, department, date) and one fact table holding the
//! utilization observations.

pub mod date_dim;
pub mod department;
pub mod system;
pub mod utilization;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::date_dim::Entity as DateDim;
    pub use super::department::Entity as Department;
    pub use super::system::Entity as System;
    pub use super::utilization::Entity as Utilization;
}
