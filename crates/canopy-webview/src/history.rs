//! Session history tracking for engines without a native history API.

/// Direction of a requested history traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Back,
    Forward,
}

/// Linear back/forward list fed by committed navigations.
#[derive(Debug, Clone, Default)]
pub struct NavHistory {
    entries: Vec<String>,
    index: usize,
    pending: Option<Traversal>,
}

impl NavHistory {
    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.index).map(String::as_str)
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Mark that the next committed navigation is a traversal.
    pub fn begin_traversal(&mut self, direction: Traversal) {
        self.pending = Some(direction);
    }

    /// Record a committed navigation.
    pub fn commit(&mut self, url: &str) {
        match self.pending.take() {
            Some(Traversal::Back) if self.can_go_back() => {
                self.index -= 1;
                if self.entries[self.index] != url {
                    self.entries[self.index] = url.to_string();
                }
            }
            Some(Traversal::Forward) if self.can_go_forward() => {
                self.index += 1;
                if self.entries[self.index] != url {
                    self.entries[self.index] = url.to_string();
                }
            }
            _ => {
                if self.current() == Some(url) {
                    return;
                }
                if !self.entries.is_empty() {
                    self.entries.truncate(self.index + 1);
                }
                self.entries.push(url.to_string());
                self.index = self.entries.len() - 1;
            }
        }
    }
}
