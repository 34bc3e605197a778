use crate::{AccessPolicy, CreateGate, PolicyGeneration};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

pub const ENV_GENERATION: &str = "ROSTER_POLICY_GENERATION";
pub const ENV_CREATE_GATE: &str = "ROSTER_CREATE_GATE";
pub const ENV_CONFIG_PATH: &str = "ROSTER_POLICY_CONFIG";

// Policy switches sourced from environment variables, optionally overridden by yaml.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    pub generation: PolicyGeneration,
    pub create_gate: CreateGate,
}

#[derive(Debug, Deserialize)]
struct PolicyConfigOverride {
    generation: Option<PolicyGeneration>,
    create_gate: Option<CreateGate>,
}

impl PolicyConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(ENV_GENERATION) {
            config.generation = value
                .parse()
                .with_context(|| format!("parse {ENV_GENERATION}"))?;
        }
        if let Ok(value) = std::env::var(ENV_CREATE_GATE) {
            config.create_gate = value
                .parse()
                .with_context(|| format!("parse {ENV_CREATE_GATE}"))?;
        }
        Ok(config)
    }

    pub fn from_env_or_yaml(config_path: Option<&str>) -> Result<Self> {
        let mut config = Self::from_env()?;
        let override_path = config_path
            .map(|value| value.to_string())
            .or_else(|| std::env::var(ENV_CONFIG_PATH).ok());
        if let Some(path) = override_path {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read policy config: {path}"))?;
            let override_cfg: PolicyConfigOverride =
                serde_yaml::from_str(&contents).context("parse policy config yaml")?;
            if let Some(value) = override_cfg.generation {
                config.generation = value;
            }
            if let Some(value) = override_cfg.create_gate {
                config.create_gate = value;
            }
        }
        tracing::info!(
            generation = %config.generation,
            create_gate = %config.create_gate,
            "access policy configured"
        );
        Ok(config)
    }
}

impl From<PolicyConfig> for AccessPolicy {
    fn from(config: PolicyConfig) -> Self {
        AccessPolicy::new(config.generation, config.create_gate)
    }
}
