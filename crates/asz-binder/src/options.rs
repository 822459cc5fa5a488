//! Per-compilation configuration flags read by the semantic passes.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompilerOptions {
    /// Enables the `abstract` modifier and its instantiation check.
    pub allow_abstract_classes: bool,
    /// Enables `private` constructors.
    pub allow_private_constructors: bool,
    /// Enables `import x = a.b.C;` aliases.
    pub allow_import_aliases: bool,
    pub inlining_enabled: bool,
    /// Reports legal-but-suspicious duplicate definitions.
    pub strict: bool,
    /// Reports ambiguous type references in declarations.
    pub report_ambiguous_types: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            allow_abstract_classes: false,
            allow_private_constructors: false,
            allow_import_aliases: false,
            inlining_enabled: true,
            strict: true,
            report_ambiguous_types: true,
        }
    }
}

impl CompilerOptions {
    /// Parse options from a JSON object; missing keys keep their defaults.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
