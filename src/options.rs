//! Option objects controlling a scaffolding run

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Casing applied to generated file base names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileNameCasing {
    /// Keep the name exactly as given
    Preserve,
    /// PascalCase (e.g., CustomerOrder)
    Pascal,
    /// snake_case (e.g., customer_order)
    Snake,
    /// kebab-case (e.g., customer-order)
    Kebab,
}

impl FileNameCasing {
    /// Apply the casing to a name
    pub fn apply(&self, input: &str) -> String {
        use heck::{ToKebabCase, ToPascalCase, ToSnakeCase};

        match self {
            FileNameCasing::Preserve => input.to_string(),
            FileNameCasing::Pascal => input.to_pascal_case(),
            FileNameCasing::Snake => input.to_snake_case(),
            FileNameCasing::Kebab => input.to_kebab_case(),
        }
    }
}

/// Target language descriptor for generated sources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageOptions {
    /// Display name used in error messages
    pub name: String,
    /// File extension including the leading dot
    pub file_extension: String,
    /// Words that may not be used as a context name
    pub reserved_words: Vec<String>,
    /// Default casing for generated file base names
    pub default_casing: FileNameCasing,
}

impl LanguageOptions {
    /// Options for generating Rust sources
    pub fn rust() -> Self {
        Self {
            name: "Rust".to_string(),
            file_extension: ".rs".to_string(),
            reserved_words: RUST_RESERVED.iter().map(|w| w.to_string()).collect(),
            default_casing: FileNameCasing::Snake,
        }
    }

    /// Options for generating TypeScript sources
    pub fn typescript() -> Self {
        Self {
            name: "TypeScript".to_string(),
            file_extension: ".ts".to_string(),
            reserved_words: TYPESCRIPT_RESERVED.iter().map(|w| w.to_string()).collect(),
            default_casing: FileNameCasing::Preserve,
        }
    }

    /// Check whether a word is reserved in this language
    pub fn is_reserved(&self, word: &str) -> bool {
        self.reserved_words.iter().any(|w| w == word)
    }
}

impl Default for LanguageOptions {
    fn default() -> Self {
        Self::rust()
    }
}

// In-use keywords plus the ones reserved for future use
const RUST_RESERVED: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

// Keywords plus the strict-mode reserved words
const TYPESCRIPT_RESERVED: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Options describing one model generation invocation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Name of the generated context type
    pub context_name: String,
    /// Connection string passed through to the context template
    pub connection_string: String,
    /// Namespace the context type is generated into
    pub context_namespace: Option<String>,
    /// Namespace the entity types are generated into
    pub model_namespace: Option<String>,
    /// Emit serialization annotations on entity fields
    pub use_annotations: bool,
    /// Omit the plain-text connection string warning from the context output
    pub suppress_connection_string_warning: bool,
    /// Omit the configuration block from the context output
    pub suppress_on_configuring: bool,
    /// Directory the context file path is rooted under
    pub context_dir: Option<PathBuf>,
}

/// Which generators take part in a scaffolding run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneratorSelection {
    /// Generate only the context file
    ContextOnly,
    /// Generate only the entity files
    EntitiesOnly,
    /// Generate both
    ContextAndEntities,
}

impl GeneratorSelection {
    /// Whether the context phase runs under this selection
    pub fn includes_context(&self) -> bool {
        matches!(
            self,
            GeneratorSelection::ContextOnly | GeneratorSelection::ContextAndEntities
        )
    }

    /// Whether the entity phase runs under this selection
    pub fn includes_entities(&self) -> bool {
        matches!(
            self,
            GeneratorSelection::EntitiesOnly | GeneratorSelection::ContextAndEntities
        )
    }
}

/// Options shaping which entities are scaffolded and where their files land
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldingOptions {
    /// Generator selection for this run
    pub selection: GeneratorSelection,
    /// Place entity files under a per-schema folder
    pub enable_schema_folders: bool,
    /// Table names excluded from scaffolding, bare or schema-qualified
    pub excluded_tables: Vec<String>,
}

impl Default for ScaffoldingOptions {
    fn default() -> Self {
        Self {
            selection: GeneratorSelection::ContextAndEntities,
            enable_schema_folders: false,
            excluded_tables: Vec::new(),
        }
    }
}
