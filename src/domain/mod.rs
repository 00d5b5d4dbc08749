//! Domain types exposed by the customer list service layer.

pub mod activity;
pub mod customer;
pub mod delete;
pub mod navigation;
pub mod types;
pub mod view;
