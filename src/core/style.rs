//! Consistent colored terminal output for gh-provision.
//!
//! All user-facing output goes through these helpers so colors are uniform.
//! `colored` drops the escape codes when output is not a TTY or `NO_COLOR`
//! is set.

use colored::Colorize;

const RULE_WIDTH: usize = 50;

// ---------- Banners ----------

/// A full-width `=` rule
pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Title line shown between two rules
pub fn banner_title(title: &str) -> String {
    format!("{}", title.bold().cyan())
}

// ---------- Status indicators ----------

/// Green checkmark + message (success)
pub fn success(msg: &str) -> String {
    format!("{} {}", "✓".green().bold(), msg)
}

/// Yellow warning + message
pub fn warning(msg: &str) -> String {
    format!("{} {}", "⚠".yellow().bold(), msg)
}

/// Red error + message
pub fn error(msg: &str) -> String {
    format!("{} {}", "✗".red().bold(), msg)
}

/// Dim info/hint message
pub fn hint(msg: &str) -> String {
    format!("{}", msg.dimmed())
}

// ---------- Progress ----------

/// A step that is about to block: "→ Creating repository: owner/name"
pub fn step(msg: &str) -> String {
    format!("{} {}", "→".cyan().bold(), msg)
}

/// A URL, underlined
pub fn url(url: &str) -> String {
    format!("{}", url.underline())
}

/// A shell command the user can copy
pub fn command(cmd: &str) -> String {
    format!("{}", cmd.cyan())
}

// ---------- Section headers ----------

/// Bold section label: "Next steps:", "To fix this:", etc.
pub fn section(label: &str) -> String {
    format!("{}", label.bold())
}

/// Numbered list item: "  1. text"
pub fn numbered(n: usize, text: &str) -> String {
    format!("  {}. {}", n, text)
}

/// Verbose diagnostic line for stderr
pub fn debug(msg: &str) -> String {
    format!("{} {}", "debug:".dimmed(), msg.dimmed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_width() {
        assert_eq!(rule().len(), 50);
        assert!(rule().chars().all(|c| c == '='));
    }

    #[test]
    fn test_messages_are_preserved() {
        assert!(success("done").contains("done"));
        assert!(error("Bad credentials").contains("Bad credentials"));
        assert!(numbered(2, "npm run dev").contains("2. npm run dev"));
    }
}
