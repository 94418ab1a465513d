//! Integration tests for the appmerge patch engine

mod cli_commands;
mod config_integration;
mod service_registry;
mod tag_patching;
mod test_utils;
