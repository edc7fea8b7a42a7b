//! Host-side UI state that the session does not track.

/// Interaction state of the terminal page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Project card under the mouse
    pub hovered_project: Option<usize>,
    /// Collapsed navbar menu is expanded
    pub menu_open: bool,
    /// Keyboard input goes to the contact form
    pub editing: bool,
    pub show_help: bool,
    /// Transient message in the footer
    pub status: Option<String>,
}

impl UiState {
    /// Update the hovered card. Returns whether it changed.
    pub fn hover(&mut self, project: Option<usize>) -> bool {
        if self.hovered_project == project {
            return false;
        }
        if let Some(i) = project {
            tracing::trace!(project = i, "project card hovered");
        }
        self.hovered_project = project;
        true
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A link was chosen; the collapsed menu closes.
    pub fn link_chosen(&mut self) {
        self.menu_open = false;
    }
}
