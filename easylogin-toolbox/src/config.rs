//! Host-supplied configuration.
//!
//! ```toml
//! [auth]
//! scheme_priority = ["SALTED-SHA512-PBKDF2", "SMB-NT", "basic"]
//! allow_cleartext = false
//! max_pbkdf2_iterations = 500000
//! ```
//!
//! Every field is optional. The host reads the text; this crate never
//! touches the filesystem.

use crate::ToolboxResult;
use easylogin_auth::ValidatorConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolboxConfig {
    #[serde(default)]
    pub auth: ValidatorConfig,
}

impl ToolboxConfig {
    /// Parses and checks TOML configuration text.
    pub fn from_toml_str(text: &str) -> ToolboxResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ToolboxResult<()> {
        self.auth.validate()?;
        Ok(())
    }
}
