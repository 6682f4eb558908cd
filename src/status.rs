use std::collections::VecDeque;

/// Rolling status line shown at the bottom of the window. Keeps a small
/// bounded history; only the newest line is rendered.
pub struct StatusLine {
    lines: VecDeque<String>,
    max_lines: usize,
}

impl StatusLine {
    pub fn new(max_lines: usize) -> Self {
        let mut status = Self {
            lines: VecDeque::new(),
            max_lines,
        };

        // Onboarding hints shown until the first action replaces them.
        status.push("click a tile to start etching");

        status
    }

    pub fn push(&mut self, line: &str) {
        self.lines.push_back(line.to_string());
        while self.lines.len() > self.max_lines {
            self.lines.pop_front();
        }
    }

    pub fn latest(&self) -> &str {
        self.lines.back().map(String::as_str).unwrap_or("")
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_an_onboarding_hint() {
        let status = StatusLine::new(10);
        assert!(!status.latest().is_empty());
    }

    #[test]
    fn latest_follows_pushes_and_history_is_bounded() {
        let mut status = StatusLine::new(3);
        for i in 0..10 {
            status.push(&format!("line {}", i));
        }
        assert_eq!(status.latest(), "line 9");
        assert_eq!(status.lines.len(), 3);
    }
}
