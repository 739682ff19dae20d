use serde::Deserialize;

use crate::config::settings::SettingsConfig;
use crate::generator::GeneratorKind;
use crate::store::StoreKind;

/// ================================
/// Full service configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub settings: SettingsConfig,
    #[serde(default)]
    pub token: TokenConfig,
}

/// ================================
/// Token store / generator wiring
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TokenConfig {
    #[serde(default)]
    pub generator: GeneratorKind,
    /// only for `sequence` generator
    pub node_id: Option<u16>,
    #[serde(default)]
    pub store: StoreKind,
}
