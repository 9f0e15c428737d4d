use shared_types::AppError;

use crate::pattern::normalize_path;

/// The host's notion of "current URL" plus a way to change it. It keeps no
/// history of its own; [`NavigationHistory`] layers one on top.
pub trait LocationPrimitive {
    fn current_path(&self) -> String;

    /// Fire-and-forget. An accepted change is reported back later through
    /// [`NavigationHistory::observe`]; an `Err` means no change will come.
    fn set_location(&mut self, path: &str) -> Result<(), AppError>;
}

/// Which kind of user-initiated transition is waiting to be observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Idle,
    /// `navigate`: the observed path is appended.
    Push,
    /// `go_back`/`go_forward`: the index already moved, nothing is appended.
    Traverse,
}

/// Back/forward stack for one UI session.
///
/// Invariants: `current_index < entries.len()`; `entries` is never empty;
/// pushing while not at the end discards the forward entries first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationHistory {
    entries: Vec<String>,
    current_index: usize,
    pending: Pending,
}

impl NavigationHistory {
    /// Fresh history holding only the location we mounted on.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            current_index: 0,
            pending: Pending::Idle,
        }
    }

    pub fn from_location<L: LocationPrimitive + ?Sized>(location: &L) -> Self {
        Self::new(location.current_path())
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> &str {
        &self.entries[self.current_index]
    }

    pub fn can_go_back(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current_index + 1 < self.entries.len()
    }

    /// A user-initiated transition has been requested but not yet observed.
    pub fn is_navigating(&self) -> bool {
        self.pending != Pending::Idle
    }

    /// Entries from the start up to and including the current one.
    pub fn breadcrumbs(&self) -> &[String] {
        &self.entries[..=self.current_index]
    }

    /// Ask the host to move to `path`. The entry is recorded when the
    /// change is observed. A second call before that just retargets.
    ///
    /// Returns false, leaving nothing pending, when the host is already at
    /// `path` (it reports no change for that) or refuses the location.
    pub fn navigate<L: LocationPrimitive + ?Sized>(&mut self, path: &str, location: &mut L) -> bool {
        if normalize_path(path) == normalize_path(&location.current_path()) {
            tracing::trace!(path, "already at location");
            return false;
        }
        tracing::debug!(path, index = self.current_index, "history navigate");
        self.pending = Pending::Push;
        if let Err(err) = location.set_location(path) {
            tracing::warn!(path, error = %err, "navigation refused by host");
            self.pending = Pending::Idle;
            return false;
        }
        true
    }

    /// Step back one entry. Returns false (and touches nothing) at the start.
    pub fn go_back<L: LocationPrimitive + ?Sized>(&mut self, location: &mut L) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.traverse_to(self.current_index - 1, location)
    }

    /// Step forward one entry. Returns false (and touches nothing) at the end.
    pub fn go_forward<L: LocationPrimitive + ?Sized>(&mut self, location: &mut L) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.traverse_to(self.current_index + 1, location)
    }

    fn traverse_to<L: LocationPrimitive + ?Sized>(&mut self, index: usize, location: &mut L) -> bool {
        let previous = self.current_index;
        self.pending = Pending::Traverse;
        self.current_index = index;
        tracing::debug!(path = %self.entries[index], index, "history traverse");
        if let Err(err) = location.set_location(&self.entries[index]) {
            tracing::warn!(error = %err, "traversal refused by host");
            self.pending = Pending::Idle;
            self.current_index = previous;
            return false;
        }
        true
    }

    /// Report that the host location is now `path`.
    ///
    /// Appends only when a `navigate` is pending; changes the tracker did not
    /// start are ignored. The pending marker is cleared either way. Returns
    /// whether an entry was appended.
    pub fn observe(&mut self, path: &str) -> bool {
        let pending = std::mem::replace(&mut self.pending, Pending::Idle);
        match pending {
            Pending::Push => {
                self.entries.truncate(self.current_index + 1);
                self.entries.push(path.to_string());
                self.current_index = self.entries.len() - 1;
                tracing::debug!(path, index = self.current_index, "history entry recorded");
                true
            }
            Pending::Traverse => false,
            Pending::Idle => {
                tracing::trace!(path, "untracked location change");
                false
            }
        }
    }
}

/// In-memory location for hosts without a URL bar and for driving the
/// tracker outside a browser. Keeps every requested path in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocation {
    path: String,
    requests: Vec<String>,
}

impl MemoryLocation {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            requests: Vec::new(),
        }
    }

    /// Paths passed to `set_location`, oldest first.
    pub fn requests(&self) -> &[String] {
        &self.requests
    }
}

impl LocationPrimitive for MemoryLocation {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn set_location(&mut self, path: &str) -> Result<(), AppError> {
        self.path = path.to_string();
        self.requests.push(path.to_string());
        Ok(())
    }
}
