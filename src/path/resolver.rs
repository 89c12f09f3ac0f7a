use std::fmt;
use std::str::FromStr;

/// Canonical separator used when splitting and joining logical paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Slash,
    Backslash,
}

impl Default for Separator {
    fn default() -> Self {
        if std::path::MAIN_SEPARATOR == '\\' {
            Separator::Backslash
        } else {
            Separator::Slash
        }
    }
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Slash => '/',
            Separator::Backslash => '\\',
        }
    }

    /// Rewrites every separator-like character in `text` to this separator.
    pub fn normalize(self, text: &str) -> String {
        let sep = self.as_char();
        text.chars()
            .map(|c| if c == '/' || c == '\\' { sep } else { c })
            .collect()
    }
}

impl FromStr for Separator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "/" | "slash" => Ok(Separator::Slash),
            "\\" | "backslash" => Ok(Separator::Backslash),
            other => Err(format!("unknown separator '{}'", other)),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An absolute path kept as an anchor plus a stack of segments.
///
/// The anchor is the root component (`""` for `/home/user`, `C:` for
/// `C:\Users`). `..` never removes it, so a path can never climb above
/// its own root. Resolution is purely lexical; nothing here touches the
/// filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalPath {
    anchor: String,
    segments: Vec<String>,
    separator: Separator,
}

impl LogicalPath {
    pub fn parse(text: &str, separator: Separator) -> Self {
        let normalized = separator.normalize(text);
        let mut parts = normalized.split(separator.as_char());
        let anchor = parts.next().unwrap_or_default().to_string();
        let segments = parts
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();

        Self {
            anchor,
            segments,
            separator,
        }
    }

    pub fn root(anchor: &str, separator: Separator) -> Self {
        Self {
            anchor: anchor.to_string(),
            segments: Vec::new(),
            separator,
        }
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Applies a user-supplied path argument to this path.
    ///
    /// An argument starting with a separator restarts from this path's
    /// anchor, not from any root named inside the argument itself.
    pub fn resolve(&self, raw: &str) -> LogicalPath {
        if raw.is_empty() {
            return self.clone();
        }

        let sep = self.separator.as_char();
        let normalized = self.separator.normalize(raw);

        let mut result = if normalized.starts_with(sep) {
            LogicalPath::root(&self.anchor, self.separator)
        } else {
            self.clone()
        };

        for segment in normalized.split(sep).filter(|s| !s.is_empty()) {
            result.push_segment(segment);
        }

        result
    }

    fn push_segment(&mut self, segment: &str) {
        match segment {
            "." => {}
            ".." => {
                self.segments.pop();
            }
            name => self.segments.push(name.to_string()),
        }
    }
}

impl fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = self.separator.as_char();
        write!(f, "{}{}", self.anchor, sep)?;
        write!(f, "{}", self.segments.join(&sep.to_string()))
    }
}

/// String-level resolution: `current` is parsed, `raw` applied, and the
/// result rendered back with the same separator.
pub fn resolve(current: &str, raw: &str, separator: Separator) -> String {
    LogicalPath::parse(current, separator).resolve(raw).to_string()
}
