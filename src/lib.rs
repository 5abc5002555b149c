pub mod config;
pub mod logging;

// Core modules
pub mod descriptor;
pub mod error;
pub mod importer;
pub mod module;
pub mod registry;
pub mod resolver;
pub mod session;
