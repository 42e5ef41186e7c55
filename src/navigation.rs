//! Host navigation seam. Flows request route changes through [`Navigator`]
//! instead of owning a router, so the same flow runs behind the terminal front
//! end or any other host.

pub mod paths {
    pub const LOGIN: &str = "/login";
}

/// Receives route changes requested by a flow.
pub trait Navigator {
    fn push(&mut self, path: &str);
}

/// Navigator that only remembers where it was sent.
#[derive(Clone, Debug, Default)]
pub struct HistoryNavigator {
    visited: Vec<String>,
}

impl HistoryNavigator {
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.visited.last().map(String::as_str)
    }

    #[must_use]
    pub fn visited(&self) -> &[String] {
        &self.visited
    }
}

impl Navigator for HistoryNavigator {
    fn push(&mut self, path: &str) {
        self.visited.push(path.to_string());
    }
}
