//! Roster configuration for the personnel manager.
//!
//! A roster is a YAML file listing existing employees, used to seed a
//! repository before the service starts taking registrations.
//!
//! # Example
//!
//! ```no_run
//! use personnel_manager::config::RosterLoader;
//!
//! let loader = RosterLoader::load("./config/roster.yaml").unwrap();
//! println!("Loaded {} employees", loader.roster().len());
//! ```

mod loader;
mod types;

pub use loader::RosterLoader;
pub use types::Roster;
