//! Thin HTTP handlers: parse the request, call one repository or adapter
//! operation, translate the outcome. Business rules live in
//! `formbuilder_core::validation`.

pub mod form;
pub mod response;
pub mod upload;
