use std::fmt;

/// Argument vector for one Nextflow invocation.
///
/// The first token is the program; the rest are passed to it unmodified, so
/// values containing spaces or shell metacharacters stay single arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCommand {
    tokens: Vec<String>,
}

impl RenderedCommand {
    pub(crate) fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn program(&self) -> &str {
        self.tokens.first().map(String::as_str).unwrap_or_default()
    }

    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or_default()
    }

    /// Value following `flag`, if the flag is present.
    pub fn flag_value(&self, flag: &str) -> Option<&str> {
        self.tokens
            .iter()
            .position(|token| token == flag)
            .and_then(|index| self.tokens.get(index + 1))
            .map(String::as_str)
    }
}

/// Displays as a line that can be pasted into a POSIX shell.
impl fmt::Display for RenderedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write_shell_word(f, token)?;
        }
        Ok(())
    }
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_-./=:,+@%".contains(c)
}

fn write_shell_word(f: &mut fmt::Formatter<'_>, token: &str) -> fmt::Result {
    if !token.is_empty() && token.chars().all(is_shell_safe) {
        return f.write_str(token);
    }
    write!(f, "'{}'", token.replace('\'', r"'\''"))
}
