//! Open/closed state of the mobile sidebar.

/// State of the slide-in navigation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarState {
    #[default]
    Closed,
    Open,
}

impl SidebarState {
    pub fn is_open(&self) -> bool {
        matches!(self, SidebarState::Open)
    }

    /// Hamburger activation.
    pub fn toggled(self) -> Self {
        match self {
            SidebarState::Closed => SidebarState::Open,
            SidebarState::Open => SidebarState::Closed,
        }
    }
}

/// What triggered a sidebar state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    Trigger,
    Backdrop,
    Link,
    Escape,
}

/// A state change that the DOM must mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarTransition {
    pub from: SidebarState,
    pub to: SidebarState,
}

impl SidebarTransition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// The sidebar state machine.
///
/// The trigger, panel and backdrop markers plus the body scroll lock are all
/// rendered from this single state, so they can never drift apart.
#[derive(Debug, Default)]
pub struct Sidebar {
    state: SidebarState,
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SidebarState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Applies an event and returns the resulting transition.
    ///
    /// Escape, backdrop and link events only ever close; while closed they
    /// are no-ops.
    pub fn handle(&mut self, event: SidebarEvent) -> SidebarTransition {
        let from = self.state;
        let to = match event {
            SidebarEvent::Trigger => from.toggled(),
            SidebarEvent::Backdrop | SidebarEvent::Link | SidebarEvent::Escape => {
                SidebarState::Closed
            }
        };
        self.state = to;
        SidebarTransition { from, to }
    }
}
