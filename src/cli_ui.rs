use colored::Colorize;

/// How an outcome should read on the terminal. Selects coloring only; it never
/// affects control flow or the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Apply the color associated with a severity.
pub fn colorize(text: &str, severity: Severity) -> String {
    match severity {
        Severity::Success => text.green().to_string(),
        Severity::Warning => text.yellow().to_string(),
        Severity::Error => text.red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colored::Colorize;

    #[test]
    fn colors_by_severity() {
        colored::control::set_override(true);
        assert_eq!(colorize("ok", Severity::Success), "ok".green().to_string());
        assert_eq!(colorize("hmm", Severity::Warning), "hmm".yellow().to_string());
        assert_eq!(colorize("bad", Severity::Error), "bad".red().to_string());
        colored::control::unset_override();
    }
}
