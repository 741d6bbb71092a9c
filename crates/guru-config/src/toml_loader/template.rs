//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Grammar Guru Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[model]
# name = "gemini-2.5-flash"
# temperature = 0.7            # 0.0-2.0
# max_output_tokens = 2048     # 1-65536
# request_timeout_secs = 120   # 5-600
# system_instruction = "..."   # defaults to the Grammar Guru coaching prompt

[credentials]
# Environment variables probed for the API key, first non-empty wins.
# A .env file in the working directory is loaded before lookup.
# candidates = [
#     "VAIT_API_KEY",
#     "VITE_GEMINI_API_KEY",
#     "NEXT_PUBLIC_GEMINI_API_KEY",
#     "REACT_APP_GEMINI_API_KEY",
#     "GEMINI_API_KEY",
#     "GOOGLE_API_KEY",
#     "API_KEY",
# ]

[storage]
# history_key = "grammar-guru-chat-history"
# data_dir = "/path/to/history"   # defaults to the platform data directory

[chat]
# confirm_reset = true
# greeting = "..."

[logging]
# level = "guru=warn"          # any tracing filter directive
"##
    .to_string()
}
