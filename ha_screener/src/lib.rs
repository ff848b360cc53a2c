pub mod config;
pub mod detector;
pub mod errors;
pub mod heikin_ashi;
pub mod policy;
pub mod report;
pub mod scan;
pub mod symbols;
