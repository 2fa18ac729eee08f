// =============================================================================
// Application Identity
// =============================================================================

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "amp-traces";

/// Crate name as it appears in log targets
pub const LOG_TARGET: &str = "amp_trace_explorer";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".amp-traces";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "amp-traces.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "AMP_TRACES_CONFIG";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "AMP_TRACES_LOG";

/// Environment variable for colour mode (auto, always, never)
pub const ENV_COLOR: &str = "AMP_TRACES_COLOR";

/// Environment variable for tree guide style (unicode, ascii)
pub const ENV_GUIDES: &str = "AMP_TRACES_GUIDES";

/// Environment variable to list orphan spans as roots
pub const ENV_PROMOTE_ORPHANS: &str = "AMP_TRACES_PROMOTE_ORPHANS";

/// Environment variable for the default trace list time range
pub const ENV_TIME_RANGE: &str = "AMP_TRACES_TIME_RANGE";

// =============================================================================
// Rendering Defaults
// =============================================================================

/// Input/output preview width in the trace list (characters)
pub const DEFAULT_PREVIEW_CHARS: usize = 30;

/// Trace list durations below this are "fast" (seconds)
pub const DURATION_FAST_SECS: f64 = 2.0;

/// Trace list durations below this are "slow"; at or above it they are "critical" (seconds)
pub const DURATION_SLOW_SECS: f64 = 5.0;

/// Start time display format in the trace list
pub const TRACE_TIME_DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Placeholder for empty table cells
pub const EMPTY_CELL: &str = "-";

/// Root span kind shown when the trace summary has none
pub const DEFAULT_ROOT_SPAN_KIND: &str = "unknown";

// =============================================================================
// Telemetry Attribute Keys
// =============================================================================

/// OTEL status code for errors (`STATUS_CODE_ERROR`)
pub const OTEL_STATUS_ERROR_CODE: &str = "2";

/// Textual spellings of the OTEL error status
pub const OTEL_STATUS_ERROR_NAMES: &[&str] = &["ERROR", "STATUS_CODE_ERROR"];

pub const ATTR_GEN_AI_REQUEST_MODEL: &str = "gen_ai.request.model";
pub const ATTR_LS_MODEL_TYPE: &str = "traceloop.association.properties.ls_model_type";
pub const ATTR_GEN_AI_COMPLETION_TOKENS: &str = "gen_ai.usage.completion_tokens";
pub const ATTR_GEN_AI_PROMPT_TOKENS: &str = "gen_ai.usage.prompt_tokens";

/// Attribute chips shown on tree rows: (key, label)
pub const TREE_ATTRIBUTE_CHIPS: &[(&str, &str)] = &[
    (ATTR_GEN_AI_REQUEST_MODEL, "model"),
    (ATTR_LS_MODEL_TYPE, "ls"),
    (ATTR_GEN_AI_COMPLETION_TOKENS, "completion"),
    (ATTR_GEN_AI_PROMPT_TOKENS, "prompt"),
];
