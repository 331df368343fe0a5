//! What is layered over the grid: at most one modal popup and one toast.

use crate::columns::Disclosure;

/// The modal currently capturing input, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    None,
    /// Detail of the selected cell (raw height, allowance history).
    Disclosure(DisclosureView),
    /// Key bindings overview.
    Help,
    /// An error worth interrupting the user for.
    Message(String),
}

impl PopupState {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }

    #[must_use]
    pub fn as_disclosure(&self) -> Option<&Disclosure> {
        match self {
            Self::Disclosure(view) => Some(&view.disclosure),
            _ => None,
        }
    }
}

/// A disclosure plus the scroll position of its popup.
///
/// Histories can be longer than the terminal. The popup reports how many
/// entries fit after each draw and scrolling is clamped to that window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureView {
    pub disclosure: Disclosure,
    /// Index of the first visible entry.
    pub offset: usize,
    /// Entries that fit in the popup, as of the last draw.
    pub viewport: usize,
}

impl DisclosureView {
    #[must_use]
    pub const fn new(disclosure: Disclosure) -> Self {
        Self {
            disclosure,
            offset: 0,
            viewport: 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.disclosure.entries.len()
    }

    /// Whether some entries are outside the visible window.
    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.total() > self.viewport
    }

    /// One-based index of the last visible entry.
    #[must_use]
    pub fn last_visible(&self) -> usize {
        (self.offset + self.viewport).min(self.total())
    }

    fn max_offset(&self) -> usize {
        self.total().saturating_sub(self.viewport)
    }

    /// Records how many entries fit; keeps the offset inside the new window.
    pub fn set_viewport(&mut self, rows: usize) {
        self.viewport = rows.max(1);
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.offset = self
            .offset
            .saturating_add_signed(delta)
            .min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }
}

/// A short notice that fades after a number of ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub ticks_left: u8,
}

/// Popup and toast state of the TUI.
///
/// ```ignore
/// let mut ui = UiState::new();
/// ui.show_toast("[+] Address sent to clipboard", TOAST_TICKS);
/// ```
#[derive(Debug, Default)]
pub struct UiState {
    pub popup_state: PopupState,
    pub toast: Option<Toast>,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_active_popup(&self) -> bool {
        self.popup_state.is_active()
    }

    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    pub fn show_disclosure(&mut self, disclosure: Disclosure) {
        self.popup_state = PopupState::Disclosure(DisclosureView::new(disclosure));
    }

    /// The open disclosure popup, for scrolling.
    pub fn disclosure_view_mut(&mut self) -> Option<&mut DisclosureView> {
        match &mut self.popup_state {
            PopupState::Disclosure(view) => Some(view),
            _ => None,
        }
    }

    pub fn show_help(&mut self) {
        self.popup_state = PopupState::Help;
    }

    pub fn show_message(&mut self, message: impl Into<String>) {
        self.popup_state = PopupState::Message(message.into());
    }

    /// Replaces any visible toast; it stays for `ticks` UI ticks.
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some(Toast {
            message: message.into(),
            ticks_left: ticks,
        });
    }

    /// Counts the toast down by one tick.
    ///
    /// Returns `true` when this tick removed it, so the caller redraws.
    pub fn tick_toast(&mut self) -> bool {
        let Some(toast) = self.toast.as_mut() else {
            return false;
        };
        if toast.ticks_left > 1 {
            toast.ticks_left -= 1;
            false
        } else {
            self.toast = None;
            true
        }
    }

    #[must_use]
    pub fn toast_message(&self) -> Option<&str> {
        self.toast.as_ref().map(|toast| toast.message.as_str())
    }
}
