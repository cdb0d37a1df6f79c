use std::path::PathBuf;

/// Which bracket pair opened the value range of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    /// Enumerated set of values, written `{a,b,c}`.
    Categorical,
    /// Numeric or ordinal bounds, written `[lo,hi]`.
    Numeric,
}

/// A single tunable parameter as it appears in the configuration-space table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDeclaration {
    /// Name with any `prefix_` namespace removed.
    pub display_name: String,

    pub range_kind: RangeKind,

    /// Range tokens after namespace reduction and special-value rewriting.
    pub range_values: Vec<String>,

    /// Default value, reduced the same way as the range tokens.
    pub default_value: String,
}

impl ParameterDeclaration {
    /// Range values joined for display.
    pub fn range_display(&self) -> String {
        self.range_values.join(", ")
    }
}

/// All surviving declarations of one `.params` file.
#[derive(Debug, Clone)]
pub struct ParameterFile {
    /// File the declarations were read from.
    pub path: PathBuf,

    /// Short entity name derived from the file name, e.g. `NaiveBayes`.
    pub entity_name: String,

    pub declarations: Vec<ParameterDeclaration>,
}

impl ParameterFile {
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}
