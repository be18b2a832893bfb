//! Rendering of the environment a supervised process starts with.
//!
//! Variables from the execution strategy, the request's limits, metadata and
//! service bindings, and the user's own declarations become a POSIX shell
//! fragment of `export name="value";` statements, sourced right before exec.

pub mod env;
pub mod errors;
pub mod escape;
pub mod exporter;
pub mod services;
pub mod strategy;
pub mod value;

mod logging;

pub use env::{Env, EnvError, ExportRequest, Limits};
pub use errors::{LaunchEnvError, LaunchEnvResult};
pub use escape::{EscapeError, EscapeMode, escape, escape_bytes};
pub use exporter::{Variable, render};
pub use logging::init_logging;
pub use services::{ServiceBinding, ServiceGroup};
pub use strategy::{EnvStrategy, NoStrategy, StaticStrategy, SystemVariable};
