//! Query builder utilities
//!
//! This module provides SQL `SELECT` construction from raw clause fragments.

pub mod builder;
pub mod filter;
pub mod fragments;
pub mod join;
pub mod ordering;
pub mod pagination;
pub mod sql_generation;
pub mod value;



pub use builder::QueryBuilder;
pub use filter::LikePosition;
pub use fragments::Fragments;
pub use join::JoinKind;
pub use ordering::SortOrder;
pub use value::ScalarValue;
