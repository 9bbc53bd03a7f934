use easylogin_auth::AuthError;
use easylogin_schema::SchemaError;
use thiserror::Error;

/// Result type for toolbox construction.
pub type ToolboxResult<T> = Result<T, ToolboxError>;

/// Failures while building a toolbox. Request-level operations never
/// return these.
#[derive(Debug, Error)]
pub enum ToolboxError {
    #[error("invalid toolbox configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("schema mapping table rejected: {0}")]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("shared toolbox is already initialized")]
    AlreadyInitialized,

    #[error("shared toolbox failed to initialize: {0}")]
    Unavailable(String),
}
