//! Bounded, append-only line buffer behind the terminal window.
//!
//! Lines are only ever added at the back. Once the buffer holds `max_lines`,
//! every new line evicts the oldest one, so the newest output is always kept
//! and memory stays flat no matter how long the terminal is used.

use std::collections::VecDeque;

pub const DEFAULT_TRANSCRIPT_LIMIT: usize = 1000;

#[derive(Debug, Clone)]
pub struct Transcript {
    lines: VecDeque<String>,
    max_lines: usize,
    evicted: usize,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSCRIPT_LIMIT)
    }
}

impl Transcript {
    pub fn new(max_lines: usize) -> Self {
        let max_lines = max_lines.max(1);
        Self {
            lines: VecDeque::new(),
            max_lines,
            evicted: 0,
        }
    }

    pub fn push_line(&mut self, line: String) {
        if self.lines.len() >= self.max_lines {
            self.lines.pop_front();
            self.evicted += 1;
        }
        self.lines.push_back(line);
    }

    /// Appends one submission's output, separated from the previous one by a
    /// blank line.
    pub fn push_block<I>(&mut self, block: I)
    where
        I: IntoIterator<Item = String>,
    {
        if !self.lines.is_empty() {
            self.push_line(String::new());
        }
        for line in block {
            self.push_line(line);
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Lines dropped from the front since creation or the last clear.
    pub fn evicted(&self) -> usize {
        self.evicted
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.evicted = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_blocks_are_separated_by_blank_lines() {
        let mut transcript = Transcript::new(10);
        transcript.push_block(block(&[">>> echo a", "a"]));
        transcript.push_block(block(&[">>> echo b", "b"]));

        assert_eq!(
            transcript.lines().collect::<Vec<_>>(),
            vec![">>> echo a", "a", "", ">>> echo b", "b"]
        );
    }

    #[test]
    fn test_oldest_lines_are_evicted_first() {
        let mut transcript = Transcript::new(3);
        for i in 0..5 {
            transcript.push_line(i.to_string());
        }

        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.evicted(), 2);
        assert_eq!(transcript.lines().collect::<Vec<_>>(), vec!["2", "3", "4"]);
    }

    #[test]
    fn test_limit_never_exceeded_by_large_block() {
        let mut transcript = Transcript::new(4);
        transcript.push_block((0..20).map(|i| i.to_string()));
        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript.lines().last(), Some("19"));
    }

    #[test]
    fn test_zero_limit_is_clamped() {
        let mut transcript = Transcript::new(0);
        assert_eq!(transcript.max_lines(), 1);
        transcript.push_line("x".to_string());
        transcript.push_line("y".to_string());
        assert_eq!(transcript.lines().collect::<Vec<_>>(), vec!["y"]);
    }

    #[test]
    fn test_clear_resets_eviction_count() {
        let mut transcript = Transcript::new(1);
        transcript.push_line("x".to_string());
        transcript.push_line("y".to_string());
        transcript.clear();
        assert!(transcript.is_empty());
        assert_eq!(transcript.evicted(), 0);
    }
}
