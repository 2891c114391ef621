#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the standard event types a host runtime forwards
//! into a control. All events derive `Clone`, `PartialEq`, and `Eq` for
//! use in tests and pattern matching.
//!
//! # Design Notes
//!
//! - `KeyEventKind` defaults to `Press` when the host cannot distinguish
//!   press from repeat.
//! - `Modifiers` use bitflags for easy combination.
//! - IME events carry the full preedit text each time; controls never have
//!   to diff successive updates.

use bitflags::bitflags;

/// Canonical input event.
///
/// This enum represents every input a FormField control can receive from
/// its host. Pointer events are absent on purpose: hit testing and focus
/// routing are the host's job, and a control only ever sees input that is
/// already directed at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// Text pasted into the control as one atomic unit.
    Paste(PasteEvent),

    /// An input-method composition event.
    Ime(ImeEvent),

    /// Focus gained or lost.
    ///
    /// `true` = focus gained, `false` = focus lost.
    Focus(bool),
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Check if Ctrl modifier is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Check if Alt modifier is held.
    #[must_use]
    pub const fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    /// Check if Shift modifier is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

/// Key codes for keyboard events.
///
/// Trimmed to the keys text editors act on; a host with a richer key set
/// maps or drops the rest before forwarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Backspace key.
    Backspace,

    /// Delete key.
    Delete,

    /// Tab key.
    Tab,

    /// Home key.
    Home,

    /// End key.
    End,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,

    /// Left arrow key.
    Left,

    /// Right arrow key.
    Right,
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,

    /// Key is being held (repeat event).
    Repeat,

    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A paste event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteEvent {
    /// The pasted text content.
    pub text: String,

    /// True if the host received the text atomically (bracketed paste or
    /// an equivalent), as opposed to synthesizing it from key presses.
    pub bracketed: bool,
}

impl PasteEvent {
    /// Create a new paste event.
    #[must_use]
    pub fn new(text: impl Into<String>, bracketed: bool) -> Self {
        Self {
            text: text.into(),
            bracketed,
        }
    }

    /// Create a bracketed paste event (the common case).
    #[must_use]
    pub fn bracketed(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }
}

/// An input-method composition event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImeEvent {
    /// The composition phase.
    pub phase: ImePhase,

    /// The full preedit (or committed) text for this phase.
    pub text: String,
}

impl ImeEvent {
    /// A composition session has started.
    #[must_use]
    pub fn start() -> Self {
        Self {
            phase: ImePhase::Start,
            text: String::new(),
        }
    }

    /// The preedit text changed.
    #[must_use]
    pub fn update(text: impl Into<String>) -> Self {
        Self {
            phase: ImePhase::Update,
            text: text.into(),
        }
    }

    /// The composition was committed with the given final text.
    #[must_use]
    pub fn commit(text: impl Into<String>) -> Self {
        Self {
            phase: ImePhase::Commit,
            text: text.into(),
        }
    }

    /// The composition was cancelled; any preedit is discarded.
    #[must_use]
    pub fn cancel() -> Self {
        Self {
            phase: ImePhase::Cancel,
            text: String::new(),
        }
    }
}

/// The phase of an IME composition session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImePhase {
    /// Composition started.
    Start,

    /// Preedit text updated.
    Update,

    /// Composition committed.
    Commit,

    /// Composition cancelled.
    Cancel,
}
