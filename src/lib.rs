//! Core of the Active Directory admin console UI: language preference,
//! network tab helpers, static API configuration and the page shell.

pub mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod i18n;
pub mod preference;
pub mod shell;
pub mod storage;
pub mod tabs;
