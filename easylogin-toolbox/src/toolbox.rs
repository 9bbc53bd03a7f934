use crate::{ToolboxConfig, ToolboxError, ToolboxResult};
use easylogin_auth::{AuthMethodBag, CredentialValidator};
use easylogin_predicate::{NativePredicate, PredicateResult, PredicateTranslator, StandardPredicate};
use easylogin_schema::{SchemaMappingTable, builtin_table};
use easylogin_types::{AttributeBag, Describe, NativeAttributeId};
use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, trace, warn};

/// Native attribute holding a record's authentication methods.
pub const AUTH_METHODS_ATTRIBUTE: &str = "authMethods";

static SHARED: OnceLock<Result<Toolbox, String>> = OnceLock::new();

/// The immutable mapping table plus a configured validator.
#[derive(Debug, Clone)]
pub struct Toolbox {
    table: Arc<SchemaMappingTable>,
    validator: CredentialValidator,
}

impl Toolbox {
    pub fn new(table: impl Into<Arc<SchemaMappingTable>>, config: ToolboxConfig) -> ToolboxResult<Self> {
        let validator = CredentialValidator::new(config.auth)?;
        Ok(Self {
            table: table.into(),
            validator,
        })
    }

    /// Toolbox over the compiled-in mapping table.
    pub fn builtin(config: ToolboxConfig) -> ToolboxResult<Self> {
        Self::new(builtin_table()?, config)
    }

    /// The process-wide toolbox, created with the default configuration on
    /// first use unless [`Toolbox::install`] ran earlier.
    pub fn shared() -> ToolboxResult<&'static Toolbox> {
        SHARED
            .get_or_init(|| {
                let built = Self::builtin(ToolboxConfig::default());
                log_init(&built);
                built.map_err(|e| e.to_string())
            })
            .as_ref()
            .map_err(|e| ToolboxError::Unavailable(e.clone()))
    }

    /// Initializes the process-wide toolbox with `config`.
    ///
    /// Fails with [`ToolboxError::AlreadyInitialized`] once the shared
    /// instance exists, whether from an earlier `install` or from
    /// [`Toolbox::shared`].
    pub fn install(config: ToolboxConfig) -> ToolboxResult<&'static Toolbox> {
        if SHARED.get().is_some() {
            return Err(ToolboxError::AlreadyInitialized);
        }
        let toolbox = Self::builtin(config)?;
        let mut installed = false;
        let shared = SHARED.get_or_init(|| {
            installed = true;
            let built: Result<Toolbox, String> = Ok(toolbox);
            log_init(&built);
            built
        });
        match shared {
            Ok(toolbox) if installed => Ok(toolbox),
            _ => Err(ToolboxError::AlreadyInitialized),
        }
    }

    pub fn table(&self) -> &Arc<SchemaMappingTable> {
        &self.table
    }

    pub fn validator(&self) -> &CredentialValidator {
        &self.validator
    }

    // ── Attributes ──────────────────────────────────────────────

    pub fn standard_info_from_native_info(&self, native: AttributeBag, native_type: &str) -> AttributeBag {
        self.table.standard_info_from_native_info(native, native_type)
    }

    pub fn native_attribute_for(&self, native_type: &str, standard_attr: &str) -> Option<&NativeAttributeId> {
        self.table.native_attribute_for(native_type, standard_attr)
    }

    pub fn all_native_attributes_supported(&self, native_type: &str) -> BTreeSet<NativeAttributeId> {
        self.table.all_native_attributes_supported(native_type)
    }

    // ── Credentials ─────────────────────────────────────────────

    pub fn validate_password(&self, password: &str, methods: &AuthMethodBag) -> bool {
        self.validator.validate(password, methods)
    }

    /// Validates against the `authMethods` attribute of a native record.
    /// A record without one rejects every password.
    pub fn validate_record_password(&self, password: &str, native_record: &AttributeBag) -> bool {
        let Some(value) = native_record.get(AUTH_METHODS_ATTRIBUTE) else {
            trace!("Record has no authentication methods");
            return false;
        };
        let methods = AuthMethodBag::from_directory_value(value);
        self.validator.validate(password, &methods)
    }

    // ── Predicates ──────────────────────────────────────────────

    pub fn translate_to_native_predicate(
        &self,
        native_type: &str,
        predicate: StandardPredicate,
    ) -> PredicateResult<NativePredicate> {
        self.translator(native_type)?.to_native(predicate)
    }

    /// All-or-nothing: one unsupported predicate rejects the whole list.
    pub fn translate_to_native_predicates(
        &self,
        native_type: &str,
        predicates: Vec<StandardPredicate>,
    ) -> PredicateResult<Vec<NativePredicate>> {
        self.translator(native_type)?.to_native_all(predicates)
    }

    pub fn translate_to_standard_predicate(
        &self,
        native_type: &str,
        predicate: NativePredicate,
    ) -> PredicateResult<StandardPredicate> {
        self.translator(native_type)?.to_standard(predicate)
    }

    fn translator(&self, native_type: &str) -> PredicateResult<PredicateTranslator<'_>> {
        PredicateTranslator::new(&self.table, native_type).inspect_err(|e| {
            debug!(native_type, error = %e, "No predicate translator for native type");
        })
    }

    // ── Diagnostics ─────────────────────────────────────────────

    /// One-line rendering of a predicate, or a slice of predicates, from
    /// either model.
    pub fn describe_predicate<P: Describe + ?Sized>(predicate: &P) -> String {
        easylogin_predicate::describe_predicate(predicate)
    }

    /// One-line rendering of a directory value or bag.
    pub fn describe_object<D: Describe + ?Sized>(value: &D) -> String {
        easylogin_types::describe_object(value)
    }
}

fn log_init<E: std::fmt::Display>(built: &Result<Toolbox, E>) {
    match built {
        Ok(toolbox) => info!(
            table_version = toolbox.table.version(),
            native_types = toolbox.table.native_types().count(),
            schemes = ?toolbox.validator.priority(),
            "Initialized shared directory toolbox"
        ),
        Err(e) => warn!(error = %e, "Shared directory toolbox failed to initialize"),
    }
}
