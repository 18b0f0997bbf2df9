use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub api: ApiConfig,
    pub navigation: NavigationConfig,
    pub save: SaveConfig,
    pub messages: MessagesConfig,
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub port: u16,
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NavigationConfig {
    /// Path template, `{id}` is replaced by the product id
    pub product_path: String,
}

/// How many pending edits a single save transmits
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SavePolicy {
    /// Only the first valid edit is sent; all pending edits are cleared on success
    #[default]
    FirstOnly,
    /// Every valid edit is sent in order, stopping at the first failure
    All,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SaveConfig {
    #[serde(default)]
    pub policy: SavePolicy,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MessagesConfig {
    pub success_title: String,
    pub error_title: String,
    pub delete_success: String,
    pub save_success: String,
    pub delete_error: String,
    pub no_valid_edits: String,
    pub invalid_quantity: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationsConfig {
    pub dismiss_after_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000
prefix = "/api/opportunities"

[navigation]
product_path = "/products/{id}"

[save]
policy = "first_only"

[messages]
success_title = "Succès"
error_title = "Erreur"
delete_success = "Le produit a été supprimé."
save_success = "La quantité en stock a été mise à jour."
delete_error = "Une erreur est survenue lors de la suppression."
no_valid_edits = "Aucune modification valide à enregistrer."
invalid_quantity = "La quantité saisie n'est pas un nombre entier."

[notifications]
dismiss_after_ms = 4000
"#;

impl UiConfig {
    /// Load the embedded configuration, optionally overridden by `override_toml`.
    ///
    /// A broken override is logged and ignored.
    pub fn load(override_toml: Option<&str>) -> Result<Self, String> {
        if let Some(contents) = override_toml {
            match Self::from_toml_str(contents) {
                Ok(config) => {
                    log::info!("Using UI config override");
                    return Ok(config);
                }
                Err(e) => log::warn!("{e}; falling back to embedded config"),
            }
        }
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Parse a full configuration document
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Invalid UI config: {e}"))
    }
}
