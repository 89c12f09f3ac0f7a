use inksac::prelude::*;

/// Terminal styling for the prompt, banner, typed commands and errors.
///
/// Falls back to plain text when the terminal has no color support or
/// colors were turned off.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn with_color(enabled: bool) -> Self {
        if enabled {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.is_enabled() {
            return text.to_string();
        }

        let style = if bold {
            Style::builder().foreground(color).bold().build()
        } else {
            Style::builder().foreground(color).build()
        };
        text.style(style).to_string()
    }

    pub fn prompt(&self, cwd: &str) -> String {
        format!(
            "{} {} {} ",
            self.paint("wsh", Color::Blue, true),
            self.paint(cwd, Color::Yellow, false),
            self.paint("$", Color::Green, false)
        )
    }

    pub fn banner(&self, banner: &str) -> String {
        self.paint(banner, Color::Blue, false)
    }

    /// Colors the first word cyan when it is a known command, red otherwise.
    pub fn highlight_command(&self, input: &str, known: impl Fn(&str) -> bool) -> String {
        if !self.is_enabled() {
            return input.to_string();
        }

        let trimmed = input.trim_start();
        let Some(word) = trimmed.split_whitespace().next() else {
            return input.to_string();
        };
        let leading = &input[..input.len() - trimmed.len()];
        let rest = &trimmed[word.len()..];

        let colored = if known(word) {
            self.paint(word, Color::Cyan, true)
        } else {
            self.paint(word, Color::Red, false)
        };
        format!("{}{}{}", leading, colored, rest)
    }

    pub fn highlight_error(&self, error: &str) -> String {
        self.paint(error, Color::Red, true)
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        self.paint(hint, Color::RGB(128, 128, 128), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_prompt() {
        let highlighter = SyntaxHighlighter::plain();
        assert_eq!(highlighter.prompt("/home/user"), "wsh /home/user $ ");
    }

    #[test]
    fn test_plain_passthrough() {
        let highlighter = SyntaxHighlighter::plain();
        assert!(!highlighter.is_enabled());
        assert_eq!(highlighter.highlight_command("  ls -l", |_| true), "  ls -l");
        assert_eq!(highlighter.highlight_error("boom"), "boom");
    }

    #[test]
    fn test_command_highlight_preserves_text() {
        let highlighter = SyntaxHighlighter::new();
        let line = "  cd  ../x";
        let highlighted = highlighter.highlight_command(line, |w| w == "cd");
        assert!(highlighted.contains("cd"));
        assert!(highlighted.ends_with("  ../x"));
        assert!(highlighted.starts_with("  "));
    }
}
