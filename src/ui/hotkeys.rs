//! Keyboard shortcuts and open/closed state of the search window.

/// Keys the search window reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    /// `/`, the open-search shortcut together with Ctrl or Meta
    Slash,
    Tab,
    Enter,
    Other(String),
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Self::Escape,
            "/" | "Period" => Self::Slash,
            "Tab" => Self::Tab,
            "Enter" | "Return" => Self::Enter,
            other => Self::Other(other.to_string()),
        }
    }

    /// Parse a legacy `keyCode`.
    pub fn from_code(code: u32) -> Self {
        match code {
            27 => Self::Escape,
            58 => Self::Slash,
            9 => Self::Tab,
            13 => Self::Enter,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A keydown event as seen by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
    /// Another handler already consumed the event
    pub default_prevented: bool,
}

impl KeyEvent {
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            default_prevented: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

/// What the page should do in response to a key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    pub prevent_default: bool,
    pub focus_input: bool,
    /// Empty the query input and hide the reset button and results
    pub clear_input: bool,
    /// Result page to open
    pub navigate_to: Option<String>,
}

/// Open/closed state of the search overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOverlay {
    active: bool,
}

impl SearchOverlay {
    pub const fn new() -> Self {
        Self { active: false }
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Handle a keydown. `first_result` is the link of the top result
    /// currently listed, if any.
    pub fn handle_key(&mut self, event: &KeyEvent, first_result: Option<&str>) -> KeyOutcome {
        let mut outcome = KeyOutcome::default();
        if event.default_prevented {
            return outcome;
        }

        if event.key == Key::Escape {
            self.active = false;
        }

        if (event.ctrl || event.meta) && event.key == Key::Slash && !self.active {
            outcome.prevent_default = true;
            outcome.focus_input = true;
            self.active = true;
        }

        if self.active && event.key == Key::Tab {
            outcome.focus_input = true;
        }

        if self.active && event.key == Key::Enter {
            outcome.prevent_default = true;
            match first_result {
                Some(href) => outcome.navigate_to = Some(href.to_string()),
                None => tracing::debug!("Enter pressed with no search results"),
            }
        }

        outcome
    }

    /// The search toggle button was clicked. Opening and closing both
    /// clear the query and focus the input.
    pub fn toggle(&mut self) -> KeyOutcome {
        self.active = !self.active;
        KeyOutcome {
            focus_input: true,
            clear_input: true,
            ..KeyOutcome::default()
        }
    }

    /// A click landed on the overlay backdrop. Clicks inside the search
    /// window itself are ignored.
    pub fn click_backdrop(&mut self, inside_window: bool) {
        if !inside_window {
            self.active = !self.active;
        }
    }
}
