#![forbid(unsafe_code)]

//! The FormField control.
//!
//! [`FieldWidget`] is a text field that toggles between a single-line and
//! a multi-line editor, driven entirely by host configuration snapshots.
//! Both editor surfaces and their elements are built once at construction
//! and moved between a detached and a mounted position on a variant swap;
//! nothing is re-created, so node identity (and anything the host keys to
//! it) survives.
//!
//! The host drives the control through the [`Control`] lifecycle:
//! `init` → `update_view`* → `destroy`, forwarding user input through
//! [`FieldWidget::handle_event`] and pulling [`FieldOutputs`] whenever the
//! change callback fires.

use formfield_core::Element;
use formfield_core::event::Event;

use crate::input::TextInput;
use crate::textarea::{DEFAULT_ROWS, TextArea};
use crate::{Control, NotifyChange};

/// Host-owned configuration snapshot, supplied fresh on every
/// [`Control::update_view`] call.
///
/// Every field is optional with a documented default; the control never
/// assumes identity or mutability across calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FieldConfig {
    /// The bound value. Default: empty string.
    pub value: Option<String>,
    /// Multi-line mode. Anything but `Some(true)` means single-line.
    pub multiline: Option<bool>,
    /// Placeholder text. Default: empty string.
    pub placeholder: Option<String>,
    /// Visible row count for the multi-line editor. Default 3, clamped to
    /// a minimum of 1. Ignored in single-line mode.
    pub rows: Option<i32>,
    /// Whether the field is disabled.
    pub disabled: bool,
}

/// The values the control reports back to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct FieldOutputs {
    /// The authoritative field value.
    pub value: String,
}

/// A text field control with interchangeable single-line and multi-line
/// editor variants.
///
/// Exactly one variant is mounted under the chrome element at any time
/// after `init`; the other exists detached, ready to be remounted.
///
/// The disabled flag is applied per variant: `update_view` only touches
/// the editor that is currently mounted, so the other variant's flag can
/// be stale until it is mounted again and a subsequent `update_view`
/// refreshes it. This mirrors the platform the control was written for.
pub struct FieldWidget {
    /// Chrome wrapper providing consistent visual framing for the host.
    chrome: Element,
    input: TextInput,
    input_el: Element,
    textarea: TextArea,
    textarea_el: Element,
    /// The authoritative value the control reports.
    current_value: String,
    /// Which editor variant is currently mounted.
    is_multiline: bool,
    notify: Option<NotifyChange>,
}

impl Default for FieldWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldWidget {
    /// Create a detached control. Both editor variants and their elements
    /// are built here, once, for the control's whole lifetime.
    #[must_use]
    pub fn new() -> Self {
        Self {
            chrome: Element::new("div").with_class("field-host"),
            input: TextInput::new(),
            input_el: Element::new("input").with_class("field-input"),
            textarea: TextArea::new(),
            textarea_el: Element::new("textarea").with_class("field-textarea"),
            current_value: String::new(),
            is_multiline: false,
            notify: None,
        }
    }

    /// The authoritative value, as last set by a user edit or the most
    /// recent `update_view`, whichever happened later.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.current_value
    }

    /// Whether the multi-line variant is currently mounted.
    #[must_use]
    pub fn is_multiline(&self) -> bool {
        self.is_multiline
    }

    /// The chrome wrapper element.
    #[must_use]
    pub fn chrome_element(&self) -> Element {
        self.chrome.clone()
    }

    /// The single-line editor's element.
    #[must_use]
    pub fn input_element(&self) -> Element {
        self.input_el.clone()
    }

    /// The multi-line editor's element.
    #[must_use]
    pub fn textarea_element(&self) -> Element {
        self.textarea_el.clone()
    }

    /// The single-line editor state.
    #[must_use]
    pub fn input(&self) -> &TextInput {
        &self.input
    }

    /// The multi-line editor state.
    #[must_use]
    pub fn textarea(&self) -> &TextArea {
        &self.textarea
    }

    /// Forward a user input event to the active editor.
    ///
    /// When the edit changed the editor's text, the new text is copied
    /// into the control's value *before* the change callback runs, so a
    /// host that reads [`Control::outputs`] from inside the callback
    /// observes the up-to-date value. Returns `true` if any editor state
    /// changed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let changed = if self.is_multiline {
            self.textarea.handle_event(event)
        } else {
            self.input.handle_event(event)
        };
        if !changed {
            return false;
        }

        let live = if self.is_multiline {
            self.textarea.value()
        } else {
            self.input.value()
        };
        if live != self.current_value {
            self.current_value = live.to_string();
            if let Some(notify) = self.notify.as_mut() {
                notify();
            }
        }
        true
    }
}

impl Control for FieldWidget {
    type Config = FieldConfig;
    type Outputs = FieldOutputs;

    fn init(&mut self, container: &Element, notify: NotifyChange) {
        self.notify = Some(notify);
        // Single-line is the default variant.
        self.is_multiline = false;
        self.chrome.append_child(&self.input_el);
        container.append_child(&self.chrome);
    }

    fn update_view(&mut self, config: &FieldConfig) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "field.update",
            multiline = config.multiline == Some(true),
            disabled = config.disabled
        )
        .entered();

        // The configuration's value always wins over in-progress edits.
        let value = config.value.clone().unwrap_or_default();
        let should_be_multiline = config.multiline == Some(true);

        // Swap inside the chrome: a full replace, never an insert/remove
        // pair, so the chrome ends up with exactly one child.
        if should_be_multiline != self.is_multiline {
            self.is_multiline = should_be_multiline;
            if self.is_multiline {
                self.chrome.replace_children(&self.textarea_el);
            } else {
                self.chrome.replace_children(&self.input_el);
            }
        }

        let placeholder = config.placeholder.clone().unwrap_or_default();
        if self.is_multiline {
            self.textarea.set_placeholder(placeholder);
        } else {
            self.input.set_placeholder(placeholder);
        }

        if self.is_multiline {
            let rows = config.rows.unwrap_or(i32::from(DEFAULT_ROWS)).max(1);
            self.textarea.set_rows(u16::try_from(rows).unwrap_or(u16::MAX));
        }

        self.current_value = value;
        // Reassign the editor text only when it actually differs, so a
        // no-op render does not clobber cursor position or an in-progress
        // IME composition. Disabling is per variant; the unmounted editor
        // is left untouched.
        if self.is_multiline {
            if self.textarea.value() != self.current_value {
                self.textarea.set_value(self.current_value.clone());
            }
            self.textarea.set_disabled(config.disabled);
        } else {
            if self.input.value() != self.current_value {
                self.input.set_value(self.current_value.clone());
            }
            self.input.set_disabled(config.disabled);
        }
    }

    fn outputs(&self) -> FieldOutputs {
        FieldOutputs {
            value: self.current_value.clone(),
        }
    }

    fn destroy(&mut self) {
        // Each detach is a no-op when the element has no parent, so this
        // is safe to call in any state, more than once.
        self.input_el.detach();
        self.textarea_el.detach();
        self.chrome.detach();
        self.notify = None;
    }
}
