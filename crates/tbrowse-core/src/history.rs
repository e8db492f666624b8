//! Navigation state: current page, back stack, and visited set.

use std::collections::HashSet;

/// Linear browsing history for one session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<String>,
    history: Vec<String>,
    visited: HashSet<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session whose visited set starts with `names` (pages already cached on disk).
    pub fn with_visited<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            visited: names.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Makes `name` the current page. The previous current page, if any, goes on the back stack.
    pub fn visit(&mut self, name: &str) {
        if let Some(prev) = self.current.replace(name.to_string()) {
            self.history.push(prev);
        }
        self.visited.insert(name.to_string());
    }

    /// Pops the back stack and makes that page current. `None` when there is nowhere to go back to.
    pub fn back(&mut self) -> Option<String> {
        let name = self.history.pop()?;
        self.current = Some(name.clone());
        Some(name)
    }

    /// Page [`back`](Self::back) would return, without moving.
    pub fn previous(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    pub fn has_visited(&self, name: &str) -> bool {
        self.visited.contains(name)
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Back stack, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_visit_has_no_history() {
        let mut s = Session::new();
        s.visit("bloomberg");
        assert_eq!(s.current(), Some("bloomberg"));
        assert!(s.history().is_empty());
        assert!(s.has_visited("bloomberg"));
    }

    #[test]
    fn visits_stack_up_and_back_pops() {
        let mut s = Session::new();
        s.visit("bloomberg");
        s.visit("nytimes");
        s.visit("docs-python");
        assert_eq!(s.history(), ["bloomberg", "nytimes"]);

        assert_eq!(s.back().as_deref(), Some("nytimes"));
        assert_eq!(s.current(), Some("nytimes"));
        assert_eq!(s.back().as_deref(), Some("bloomberg"));
        assert_eq!(s.current(), Some("bloomberg"));
        assert_eq!(s.back(), None);
        assert_eq!(s.current(), Some("bloomberg"));
    }

    #[test]
    fn previous_does_not_move() {
        let mut s = Session::new();
        s.visit("bloomberg");
        s.visit("nytimes");
        assert_eq!(s.previous(), Some("bloomberg"));
        assert_eq!(s.current(), Some("nytimes"));
        assert_eq!(s.history(), ["bloomberg"]);
    }

    #[test]
    fn back_on_empty_is_noop() {
        let mut s = Session::new();
        assert_eq!(s.previous(), None);
        assert_eq!(s.back(), None);
        assert_eq!(s.current(), None);
    }

    #[test]
    fn revisit_pushes_current_again() {
        let mut s = Session::new();
        s.visit("bloomberg");
        s.visit("bloomberg");
        assert_eq!(s.history(), ["bloomberg"]);
        assert_eq!(s.visited_count(), 1);
    }

    #[test]
    fn seeded_visited_set() {
        let s = Session::with_visited(vec!["nytimes".to_string()]);
        assert!(s.has_visited("nytimes"));
        assert_eq!(s.current(), None);
    }
}
