//! terravalet - a simple valet for terraform operations
//!
//! A library for turning the output of `terraform plan` into up and down
//! `terraform state mv` migration scripts after resources change address.

pub mod matcher;
pub mod migration;
pub mod output;
pub mod resource;
pub mod script;
pub mod terraform;

mod error;

pub use error::{Direction, TerravaletError};
pub use matcher::{AddressMapping, Matches, match_addresses};
pub use migration::{DEFAULT_LOCAL_STATE, generate};
pub use resource::{Action, ActionRecord};
pub use script::{OUTPUT_FORMAT_VERSION, render_script, write_script};
