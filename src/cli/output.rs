use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub pretty: bool,
    pub use_color: bool,
}

/// Resolve whether to emit ANSI colors from the config `color` setting
/// (`auto|always|never`) and the `--no-color` flag.
pub fn detect_color(color_setting: &str, no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    match color_setting {
        "always" => true,
        "never" => false,
        _ => std::env::var("NO_COLOR").is_err() && std::io::stdout().is_terminal(),
    }
}

/// Serialize `value` as JSON, honoring `--pretty`.
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T, opts: &OutputOptions) -> serde_json::Result<String> {
    if opts.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
