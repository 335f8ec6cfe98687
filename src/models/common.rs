use serde::{Deserialize, Serialize};
use std::fmt;

/// Encoding requested from the generation service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Jpg,
    Webp,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpg => "jpg",
            OutputFormat::Webp => "webp",
        }
    }

    pub fn is_lossless(&self) -> bool {
        matches!(self, OutputFormat::Png)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_wire_name() {
        assert_eq!(serde_json::to_value(OutputFormat::Png).unwrap(), "png");
        assert_eq!(OutputFormat::default(), OutputFormat::Png);
        assert!(OutputFormat::Png.is_lossless());
        assert!(!OutputFormat::Webp.is_lossless());
    }
}
