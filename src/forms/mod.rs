//! Form definitions backing the customer routes.

pub mod customers;
