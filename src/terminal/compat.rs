use supports_color::{Stream, on};

/// When to emit colors and text attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Style output only when stdout is a color-capable terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Parse the config file spelling; unknown values mean `Auto`.
    pub fn from_config(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }

    /// Decide whether stdout should get styled output.
    pub fn resolve(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => on(Stream::Stdout).is_some_and(|level| level.has_basic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        assert_eq!(ColorChoice::from_config("Always"), ColorChoice::Always);
        assert_eq!(ColorChoice::from_config("never"), ColorChoice::Never);
        assert_eq!(ColorChoice::from_config("sometimes"), ColorChoice::Auto);
    }

    #[test]
    fn test_forced_choices() {
        assert!(ColorChoice::Always.resolve());
        assert!(!ColorChoice::Never.resolve());
        // auto depends on the test runner's stdout; just ensure it doesn't panic
        let _ = ColorChoice::Auto.resolve();
    }
}
