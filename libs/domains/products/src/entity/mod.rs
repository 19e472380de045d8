//! Sea-ORM entities for the catalog tables

pub mod favorite;
pub mod product;
