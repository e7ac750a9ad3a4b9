//! Request handlers.

pub mod form;
