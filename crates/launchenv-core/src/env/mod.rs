//! Aggregation of every variable source into one export script.
//!
//! System variables (strategy pairs, `MEMORY_LIMIT`, `VCAP_APPLICATION`,
//! `VCAP_SERVICES`, `DATABASE_URL`) are rendered in safe mode. User
//! variables follow in permissive mode, so they may reference any system
//! variable while no system-sourced value can ever expand.

pub mod errors;
pub mod request;
pub mod user;

use launchenv_config::MalformedVariablePolicy;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::escape::EscapeMode;
use crate::exporter::{Variable, render};
use crate::services::{ServiceBinding, ServiceGroup, database_uri};
use crate::strategy::{EnvStrategy, NoStrategy};
use crate::value::scalar_to_string;

pub use errors::EnvError;
pub use request::{ExportRequest, Limits};
pub use user::{parse_user_variable, parse_user_variables};

pub const MEMORY_LIMIT: &str = "MEMORY_LIMIT";
pub const VCAP_APPLICATION: &str = "VCAP_APPLICATION";
pub const VCAP_SERVICES: &str = "VCAP_SERVICES";
pub const DATABASE_URL: &str = "DATABASE_URL";

/// Environment for one process launch.
///
/// Borrows its inputs immutably and keeps no state between calls, so one
/// `Env` per request can be built on any thread.
pub struct Env<'a> {
    request: &'a ExportRequest,
    strategy: &'a dyn EnvStrategy,
    policy: MalformedVariablePolicy,
}

impl<'a> Env<'a> {
    pub fn new(request: &'a ExportRequest, strategy: &'a dyn EnvStrategy) -> Self {
        Self {
            request,
            strategy,
            policy: MalformedVariablePolicy::default(),
        }
    }

    /// An `Env` with no registered strategy: no strategy pairs, empty base metadata.
    pub fn with_default_strategy(request: &'a ExportRequest) -> Self {
        Self::new(request, &NoStrategy)
    }

    pub fn with_policy(mut self, policy: MalformedVariablePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Allow-listed bindings in request order.
    pub fn service_bindings(&self) -> Result<Vec<ServiceBinding>, EnvError> {
        self.request
            .services
            .iter()
            .enumerate()
            .map(|(index, raw)| ServiceBinding::from_raw(raw, index))
            .collect()
    }

    /// Bindings grouped by label, the value of `VCAP_SERVICES`.
    pub fn vcap_services(&self) -> Result<ServiceGroup, EnvError> {
        Ok(ServiceGroup::from_bindings(self.service_bindings()?))
    }

    /// Strategy metadata extended by the request's metadata.
    ///
    /// Keys from the request win on conflict.
    pub fn vcap_application(&self) -> Map<String, Value> {
        let mut merged = self.strategy.vcap_application();
        for (key, value) in &self.request.vcap_application {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }

    pub fn database_url(&self) -> Result<Option<String>, EnvError> {
        Ok(database_uri(&self.service_bindings()?))
    }

    /// System variables in export order.
    pub fn system_environment_variables(&self) -> Result<Vec<Variable>, EnvError> {
        let mut variables = Vec::new();

        for system in self.strategy.system_environment_variables() {
            let value = scalar_to_string(&system.value).map_err(|kind| {
                EnvError::UnsupportedValueType {
                    name: system.name.clone(),
                    kind,
                }
            })?;
            variables.push(Variable::new(system.name, value));
        }

        variables.push(Variable::new(
            MEMORY_LIMIT,
            format!("{}m", self.request.limits.mem),
        ));

        let vcap_application = serde_json::to_string(&self.vcap_application()).map_err(|source| {
            EnvError::Serialization {
                name: VCAP_APPLICATION,
                source,
            }
        })?;
        variables.push(Variable::new(VCAP_APPLICATION, vcap_application));

        let services = self.vcap_services()?;
        let vcap_services =
            serde_json::to_string(&services).map_err(|source| EnvError::Serialization {
                name: VCAP_SERVICES,
                source,
            })?;
        variables.push(Variable::new(VCAP_SERVICES, vcap_services));

        match self.database_url()? {
            Some(url) => variables.push(Variable::new(DATABASE_URL, url)),
            None => debug!(
                event = "core.env.database_url_skipped",
                reason = "no database binding"
            ),
        }

        Ok(variables)
    }

    /// User variables in declaration order.
    pub fn user_environment_variables(&self) -> Result<Vec<Variable>, EnvError> {
        parse_user_variables(&self.request.env, self.policy)
    }

    pub fn exported_system_environment_variables(&self) -> Result<String, EnvError> {
        render(&self.system_environment_variables()?, EscapeMode::Safe)
    }

    pub fn exported_user_environment_variables(&self) -> Result<String, EnvError> {
        render(&self.user_environment_variables()?, EscapeMode::Permissive)
    }

    /// The full script: safe system variables first, then permissive user variables.
    pub fn exported_environment_variables(&self) -> Result<String, EnvError> {
        info!(
            event = "core.env.export_started",
            strategy = self.strategy.name(),
            services = self.request.services.len(),
            user_vars = self.request.env.len()
        );

        let system = self.exported_system_environment_variables()?;
        let user = self.exported_user_environment_variables()?;

        info!(
            event = "core.env.export_completed",
            strategy = self.strategy.name(),
            bytes = system.len() + user.len()
        );

        Ok(system + &user)
    }
}
