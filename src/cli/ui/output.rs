use console::style;

use crate::types::truncate_chars;

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").blue(), message);
    }

    pub fn hint(&self, message: &str) {
        eprintln!("  {} {}", style("hint:").cyan(), message);
    }

    pub fn section(&self, message: &str) {
        println!("\n{}", style(message).bold());
        println!("{}", "─".repeat(40));
    }

    /// First `max_chars` characters of a document, dimmed
    pub fn preview(&self, document: &str, max_chars: usize) {
        println!("{}", style(preview(document, max_chars)).dim());
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

/// Cut `document` to `max_chars`, marking the cut with an ellipsis
pub fn preview(document: &str, max_chars: usize) -> String {
    let head = truncate_chars(document, max_chars);
    if head.len() < document.len() {
        format!("{}...", head)
    } else {
        head.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_marks_cut() {
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("abc", 3), "abc");
        assert_eq!(preview("héllo wörld", 5), "héllo...");
    }
}
