//! Constants used throughout now-sc

/// Directory holding prompt templates, relative to the project root
pub const TEMPLATES_DIR: &str = "10_PromptTemplates";

/// Directory scanned for context candidates, relative to the project root
pub const INBOX_DIR: &str = "00_Inbox";

/// Extension every prompt template carries
pub const TEMPLATE_EXTENSION: &str = ".md";

/// Maximum length of a template description before it is truncated
pub const DESCRIPTION_MAX_LEN: usize = 60;

/// Marker appended to truncated descriptions and previews
pub const ELLIPSIS: &str = "...";

/// Number of template characters shown in the interactive preview
pub const PREVIEW_MAX_LEN: usize = 200;

/// Line separating the template body from the user's request
pub const USER_REQUEST_SEPARATOR: &str = "\n\nUser Request:\n";

/// Line separating formatted context from free-text input
pub const USER_INPUT_SEPARATOR: &str = "\n\nUser Input:\n";

/// Header written at the top of a formatted context blob
pub const CONTEXT_HEADER: &str = "Context Files:\n\n";

/// Horizontal rule used around previews and responses
pub const RULE: &str = "─────────────────────────────────────────";

/// Local assistant invocation
pub mod assistant {
    pub const PROGRAM: &str = "claude";
    pub const ARGS: &[&str] = &["code", "--stdio"];
    pub const PROGRAM_ENV: &str = "NOW_SC_ASSISTANT";
}

/// Remote completion API
pub mod remote {
    pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";
    pub const MODEL_ENV: &str = "NOW_SC_MODEL";
    pub const DEFAULT_MODEL: &str = "google/gemini-2.0-flash-exp:free";
    pub const COMPLETIONS_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
}

/// Transcript save destinations
pub mod save {
    /// Canned destinations offered by the save menu, as (label, relative path).
    pub const LOCATIONS: &[(&str, &str)] = &[
        ("Project Overview (99_Assets/Project_Overview)", "99_Assets/Project_Overview"),
        ("Communications (99_Assets/Communications)", "99_Assets/Communications"),
        ("POC Documents (99_Assets/POC_Documents)", "99_Assets/POC_Documents"),
        ("Notes (00_Inbox/notes)", "00_Inbox/notes"),
    ];
    pub const CUSTOM_LABEL: &str = "Other (specify)";
    pub const CUSTOM_DEFAULT: &str = "99_Assets";
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
