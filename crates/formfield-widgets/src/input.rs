#![forbid(unsafe_code)]

//! Single-line text editor.
//!
//! A headless single-line editor with cursor management, selection,
//! word-level operations, and IME composition. Grapheme-cluster aware for
//! correct Unicode handling. The host owns rendering; this type owns the
//! text state and edit semantics only.

use formfield_core::event::{Event, ImeEvent, ImePhase, KeyCode, KeyEvent, KeyEventKind};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A single-line text editor.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Text value. Never contains line breaks or control characters.
    value: String,
    /// Cursor position (grapheme index).
    cursor: usize,
    /// Selection anchor (grapheme index). When set, selection spans from
    /// anchor to cursor.
    selection_anchor: Option<usize>,
    /// Active IME composition text (preedit), if any.
    ime_composition: Option<String>,
    /// Placeholder text shown by the host when the value is empty.
    placeholder: String,
    /// Maximum length in graphemes (None = unlimited).
    max_length: Option<usize>,
    /// When disabled, every event is ignored.
    disabled: bool,
}

impl TextInput {
    /// Create a new empty input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Builder methods ---

    /// Set the text value (builder). Cursor moves to the end.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor = self.value.graphemes(true).count();
        self.selection_anchor = None;
        self
    }

    /// Set the placeholder text (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the maximum length in graphemes (builder).
    #[must_use]
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    // --- Value access ---

    /// Get the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the value, moving the cursor to the end and clearing any
    /// selection (the behavior of a host assigning a bound value).
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.grapheme_count();
        self.selection_anchor = None;
    }

    /// Clear all text.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.selection_anchor = None;
    }

    /// Get the cursor position (grapheme index).
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the placeholder text.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Check whether the editor is disabled.
    #[inline]
    #[must_use]
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable the editor. A disabled editor ignores all events.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// The display-cell column of the cursor, for host caret placement.
    ///
    /// Counts the visual width of everything before the cursor, including
    /// any in-progress IME preedit.
    #[must_use]
    pub fn visual_cursor_column(&self) -> usize {
        let mut col: usize = self
            .value
            .graphemes(true)
            .take(self.cursor)
            .map(UnicodeWidthStr::width)
            .sum();
        if let Some(ime) = &self.ime_composition {
            col += UnicodeWidthStr::width(ime.as_str());
        }
        col
    }

    /// Get selected text, if any.
    #[must_use]
    pub fn selected_text(&self) -> Option<&str> {
        let anchor = self.selection_anchor?;
        let (start, end) = self.selection_range(anchor);
        let byte_start = self.grapheme_byte_offset(start);
        let byte_end = self.grapheme_byte_offset(end);
        Some(&self.value[byte_start..byte_end])
    }

    // --- IME composition ---

    /// Start an IME composition session, replacing any selection.
    pub fn ime_start_composition(&mut self) {
        if self.ime_composition.is_none() {
            self.delete_selection();
        }
        self.ime_composition = Some(String::new());
        #[cfg(feature = "tracing")]
        self.trace_edit("ime_start");
    }

    /// Update the active IME preedit text. Starts a session if none is
    /// active.
    pub fn ime_update_composition(&mut self, preedit: impl Into<String>) {
        if self.ime_composition.is_none() {
            self.delete_selection();
        }
        self.ime_composition = Some(preedit.into());
        #[cfg(feature = "tracing")]
        self.trace_edit("ime_update");
    }

    /// Commit the active IME preedit into the value.
    ///
    /// Returns `true` if a composition session existed (even if empty).
    pub fn ime_commit_composition(&mut self) -> bool {
        let Some(preedit) = self.ime_composition.take() else {
            return false;
        };
        if !preedit.is_empty() {
            self.insert_text(&preedit);
        }
        #[cfg(feature = "tracing")]
        self.trace_edit("ime_commit");
        true
    }

    /// Cancel the active IME composition session.
    ///
    /// Returns `true` if a session was active.
    pub fn ime_cancel_composition(&mut self) -> bool {
        let cancelled = self.ime_composition.take().is_some();
        #[cfg(feature = "tracing")]
        if cancelled {
            self.trace_edit("ime_cancel");
        }
        cancelled
    }

    /// Get the active IME preedit text, if any.
    #[must_use]
    pub fn ime_composition(&self) -> Option<&str> {
        self.ime_composition.as_deref()
    }

    // --- Event handling ---

    /// Handle an input event.
    ///
    /// Returns `true` if the state changed. A disabled editor returns
    /// `false` without inspecting the event.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        if self.disabled {
            return false;
        }
        match event {
            Event::Key(key)
                if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat =>
            {
                self.handle_key(key)
            }
            Event::Ime(ime) => self.handle_ime_event(ime),
            Event::Paste(paste) => {
                self.delete_selection();
                self.insert_text(&paste.text);
                true
            }
            _ => false,
        }
    }

    fn handle_ime_event(&mut self, ime: &ImeEvent) -> bool {
        match ime.phase {
            ImePhase::Start => {
                self.ime_start_composition();
                true
            }
            ImePhase::Update => {
                self.ime_update_composition(&ime.text);
                true
            }
            ImePhase::Commit => {
                if self.ime_composition.is_some() {
                    self.ime_update_composition(&ime.text);
                    self.ime_commit_composition()
                } else if !ime.text.is_empty() {
                    self.delete_selection();
                    self.insert_text(&ime.text);
                    true
                } else {
                    false
                }
            }
            ImePhase::Cancel => self.ime_cancel_composition(),
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let ctrl = key.ctrl();
        let shift = key.shift();

        match key.code {
            KeyCode::Char(c) if !ctrl => {
                self.delete_selection();
                self.insert_char(c);
                true
            }
            // Ctrl+A: select all
            KeyCode::Char('a') if ctrl => {
                self.select_all();
                true
            }
            // Ctrl+W: delete word back
            KeyCode::Char('w') if ctrl => {
                self.delete_word_back();
                true
            }
            KeyCode::Backspace => {
                if self.selection_anchor.is_some() {
                    self.delete_selection();
                } else if ctrl {
                    self.delete_word_back();
                } else {
                    self.delete_char_back();
                }
                true
            }
            KeyCode::Delete => {
                if self.selection_anchor.is_some() {
                    self.delete_selection();
                } else if ctrl {
                    self.delete_word_forward();
                } else {
                    self.delete_char_forward();
                }
                true
            }
            KeyCode::Left => {
                if ctrl {
                    self.move_cursor_word_left(shift);
                } else if shift {
                    self.move_cursor_left_select();
                } else {
                    self.move_cursor_left();
                }
                true
            }
            KeyCode::Right => {
                if ctrl {
                    self.move_cursor_word_right(shift);
                } else if shift {
                    self.move_cursor_right_select();
                } else {
                    self.move_cursor_right();
                }
                true
            }
            KeyCode::Home => {
                if shift {
                    self.ensure_selection_anchor();
                } else {
                    self.selection_anchor = None;
                }
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                if shift {
                    self.ensure_selection_anchor();
                } else {
                    self.selection_anchor = None;
                }
                self.cursor = self.grapheme_count();
                true
            }
            _ => false,
        }
    }

    #[cfg(feature = "tracing")]
    fn trace_edit(&self, operation: &'static str) {
        let _span = tracing::debug_span!(
            "input.edit",
            operation,
            cursor = self.cursor,
            graphemes = self.grapheme_count(),
            has_selection = self.selection_anchor.is_some()
        )
        .entered();
    }

    // --- Editing operations ---

    /// Map line breaks and tabs to spaces, drop other control characters.
    fn sanitize(text: &str) -> String {
        text.chars()
            .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
            .filter(|c| !c.is_control())
            .collect()
    }

    /// Insert text at the cursor.
    ///
    /// Line breaks and tabs become spaces, other control characters are
    /// dropped, and the insertion is truncated to respect `max_length`.
    pub fn insert_text(&mut self, text: &str) {
        let clean = Self::sanitize(text);
        if clean.is_empty() {
            return;
        }

        let current = self.grapheme_count();
        let available = match self.max_length {
            Some(max) if current >= max => return,
            Some(max) => max - current,
            None => usize::MAX,
        };

        let incoming = clean.graphemes(true).count();
        let to_insert = if incoming > available {
            let end_byte = clean
                .grapheme_indices(true)
                .map(|(i, _)| i)
                .nth(available)
                .unwrap_or(clean.len());
            &clean[..end_byte]
        } else {
            clean.as_str()
        };

        let byte_offset = self.grapheme_byte_offset(self.cursor);
        self.value.insert_str(byte_offset, to_insert);

        // Combining characters may merge with the preceding grapheme, so
        // advance by the realized delta rather than the inserted count.
        let delta = self.grapheme_count().saturating_sub(current);
        self.cursor = (self.cursor + delta).min(self.grapheme_count());
        #[cfg(feature = "tracing")]
        self.trace_edit("insert_text");
    }

    fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }

        let old_count = self.grapheme_count();
        let byte_offset = self.grapheme_byte_offset(self.cursor);
        self.value.insert(byte_offset, c);

        let new_count = self.grapheme_count();
        if let Some(max) = self.max_length
            && new_count > max
        {
            // Revert: the character did not fit.
            self.value.drain(byte_offset..byte_offset + c.len_utf8());
            return;
        }

        // Cursor stays put when the character merged into the previous
        // grapheme (combining marks).
        if new_count > old_count {
            self.cursor += 1;
        }
    }

    fn delete_char_back(&mut self) {
        if self.cursor > 0 {
            let byte_start = self.grapheme_byte_offset(self.cursor - 1);
            let byte_end = self.grapheme_byte_offset(self.cursor);
            self.value.drain(byte_start..byte_end);
            self.cursor -= 1;
        }
    }

    fn delete_char_forward(&mut self) {
        if self.cursor < self.grapheme_count() {
            let byte_start = self.grapheme_byte_offset(self.cursor);
            let byte_end = self.grapheme_byte_offset(self.cursor + 1);
            self.value.drain(byte_start..byte_end);
        }
    }

    fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let graphemes: Vec<&str> = self.value.graphemes(true).collect();
        let old_cursor = self.cursor;
        let mut pos = old_cursor;

        // Skip trailing whitespace; if none, delete one run of the same
        // class (word or punctuation).
        let mut skipped_whitespace = false;
        while pos > 0 && grapheme_class(graphemes[pos - 1]) == CharClass::Whitespace {
            pos -= 1;
            skipped_whitespace = true;
        }
        if !skipped_whitespace && pos > 0 {
            let target = grapheme_class(graphemes[pos - 1]);
            while pos > 0 && grapheme_class(graphemes[pos - 1]) == target {
                pos -= 1;
            }
        }

        if pos < old_cursor {
            let byte_start = self.grapheme_byte_offset(pos);
            let byte_end = self.grapheme_byte_offset(old_cursor);
            self.value.drain(byte_start..byte_end);
            self.cursor = pos;
        }
    }

    fn delete_word_forward(&mut self) {
        let old_cursor = self.cursor;
        self.move_cursor_word_right(false);
        let end = self.cursor;
        self.cursor = old_cursor;

        if end > old_cursor {
            let byte_start = self.grapheme_byte_offset(old_cursor);
            let byte_end = self.grapheme_byte_offset(end);
            self.value.drain(byte_start..byte_end);
        }
    }

    // --- Selection ---

    /// Select all text.
    pub fn select_all(&mut self) {
        self.selection_anchor = Some(0);
        self.cursor = self.grapheme_count();
    }

    /// Delete selected text. No-op if no selection.
    fn delete_selection(&mut self) {
        if let Some(anchor) = self.selection_anchor.take() {
            let (start, end) = self.selection_range(anchor);
            let byte_start = self.grapheme_byte_offset(start);
            let byte_end = self.grapheme_byte_offset(end);
            self.value.drain(byte_start..byte_end);
            self.cursor = start;
        }
    }

    fn ensure_selection_anchor(&mut self) {
        if self.selection_anchor.is_none() {
            self.selection_anchor = Some(self.cursor);
        }
    }

    fn selection_range(&self, anchor: usize) -> (usize, usize) {
        if anchor <= self.cursor {
            (anchor, self.cursor)
        } else {
            (self.cursor, anchor)
        }
    }

    // --- Cursor movement ---

    fn move_cursor_left(&mut self) {
        if let Some(anchor) = self.selection_anchor.take() {
            self.cursor = self.cursor.min(anchor);
        } else if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    fn move_cursor_right(&mut self) {
        if let Some(anchor) = self.selection_anchor.take() {
            self.cursor = self.cursor.max(anchor);
        } else if self.cursor < self.grapheme_count() {
            self.cursor += 1;
        }
    }

    fn move_cursor_left_select(&mut self) {
        self.ensure_selection_anchor();
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    fn move_cursor_right_select(&mut self) {
        self.ensure_selection_anchor();
        if self.cursor < self.grapheme_count() {
            self.cursor += 1;
        }
    }

    fn move_cursor_word_left(&mut self, select: bool) {
        if select {
            self.ensure_selection_anchor();
        } else {
            self.selection_anchor = None;
        }
        if self.cursor == 0 {
            return;
        }

        let graphemes: Vec<&str> = self.value.graphemes(true).collect();
        let mut pos = self.cursor;

        // Skip separators, then the word itself.
        while pos > 0 && grapheme_class(graphemes[pos - 1]) != CharClass::Word {
            pos -= 1;
        }
        while pos > 0 && grapheme_class(graphemes[pos - 1]) == CharClass::Word {
            pos -= 1;
        }
        self.cursor = pos;
    }

    fn move_cursor_word_right(&mut self, select: bool) {
        if select {
            self.ensure_selection_anchor();
        } else {
            self.selection_anchor = None;
        }

        let graphemes: Vec<&str> = self.value.graphemes(true).collect();
        let max = graphemes.len();
        if self.cursor >= max {
            return;
        }

        let mut pos = self.cursor;

        // Skip the current word if inside one, then separators.
        while pos < max && grapheme_class(graphemes[pos]) == CharClass::Word {
            pos += 1;
        }
        while pos < max && grapheme_class(graphemes[pos]) != CharClass::Word {
            pos += 1;
        }
        self.cursor = pos;
    }

    // --- Internal helpers ---

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    fn grapheme_byte_offset(&self, grapheme_idx: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(grapheme_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

/// Coarse grapheme classification for word-wise operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharClass {
    Whitespace,
    Word,
    Punctuation,
}

pub(crate) fn grapheme_class(g: &str) -> CharClass {
    if g.chars().all(char::is_whitespace) {
        CharClass::Whitespace
    } else if g.chars().any(char::is_alphanumeric) {
        CharClass::Word
    } else {
        CharClass::Punctuation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formfield_core::event::{Modifiers, PasteEvent};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code))
    }

    fn ctrl_press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code).with_modifiers(Modifiers::CTRL))
    }

    #[test]
    fn empty_input() {
        let input = TextInput::new();
        assert!(input.value().is_empty());
        assert_eq!(input.cursor(), 0);
        assert!(input.selected_text().is_none());
    }

    #[test]
    fn with_value_places_cursor_at_end() {
        let input = TextInput::new().with_value("hello");
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn set_value_moves_cursor_to_end() {
        let mut input = TextInput::new().with_value("hello world");
        input.handle_event(&press(KeyCode::Home));
        input.set_value("hi");
        assert_eq!(input.value(), "hi");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn clear_resets_state() {
        let mut input = TextInput::new().with_value("hello");
        input.clear();
        assert!(input.value().is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn typing_appends() {
        let mut input = TextInput::new();
        for c in "abc".chars() {
            assert!(input.handle_event(&press(KeyCode::Char(c))));
        }
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn typing_mid_value() {
        let mut input = TextInput::new().with_value("ac");
        input.handle_event(&press(KeyCode::Left));
        input.handle_event(&press(KeyCode::Char('b')));
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn max_length_truncates() {
        let mut input = TextInput::new().with_max_length(3);
        for c in "abcdef".chars() {
            input.handle_event(&press(KeyCode::Char(c)));
        }
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn max_length_truncates_paste() {
        let mut input = TextInput::new().with_max_length(4);
        input.handle_event(&Event::Paste(PasteEvent::bracketed("abcdef")));
        assert_eq!(input.value(), "abcd");
    }

    #[test]
    fn backspace_and_delete() {
        let mut input = TextInput::new().with_value("hello");
        input.handle_event(&press(KeyCode::Backspace));
        assert_eq!(input.value(), "hell");
        input.handle_event(&press(KeyCode::Home));
        input.handle_event(&press(KeyCode::Delete));
        assert_eq!(input.value(), "ell");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = TextInput::new().with_value("hi");
        input.handle_event(&press(KeyCode::Home));
        input.handle_event(&press(KeyCode::Backspace));
        assert_eq!(input.value(), "hi");
    }

    #[test]
    fn word_movement() {
        let mut input = TextInput::new().with_value("hello world test");
        input.move_cursor_word_left(false);
        assert_eq!(input.cursor(), 12);
        input.move_cursor_word_left(false);
        assert_eq!(input.cursor(), 6);
        input.move_cursor_word_left(false);
        assert_eq!(input.cursor(), 0);

        input.move_cursor_word_right(false);
        assert_eq!(input.cursor(), 6);
        input.move_cursor_word_right(false);
        assert_eq!(input.cursor(), 12);
        input.move_cursor_word_right(false);
        assert_eq!(input.cursor(), 16);
    }

    #[test]
    fn delete_word_back_runs() {
        let mut input = TextInput::new().with_value("hello world");
        input.handle_event(&ctrl_press(KeyCode::Char('w')));
        assert_eq!(input.value(), "hello ");
        input.handle_event(&ctrl_press(KeyCode::Char('w')));
        assert_eq!(input.value(), "hello");
        input.handle_event(&ctrl_press(KeyCode::Char('w')));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn select_all_then_type_replaces() {
        let mut input = TextInput::new().with_value("hello");
        input.handle_event(&ctrl_press(KeyCode::Char('a')));
        assert_eq!(input.selected_text(), Some("hello"));
        input.handle_event(&press(KeyCode::Char('x')));
        assert_eq!(input.value(), "x");
    }

    #[test]
    fn paste_sanitizes_line_breaks() {
        let mut input = TextInput::new();
        input.handle_event(&Event::Paste(PasteEvent::bracketed("a\nb\tc")));
        assert_eq!(input.value(), "a b c");
    }

    #[test]
    fn unicode_grapheme_deletion() {
        let mut input = TextInput::new().with_value("café");
        input.handle_event(&press(KeyCode::Backspace));
        assert_eq!(input.value(), "caf");
    }

    #[test]
    fn multi_codepoint_grapheme_cursor() {
        let mut input = TextInput::new().with_value("a👩‍💻b");
        assert_eq!(input.cursor(), 3);
        input.handle_event(&press(KeyCode::Left));
        input.handle_event(&press(KeyCode::Backspace));
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn ime_commit_inserts_at_cursor() {
        let mut input = TextInput::new().with_value("ab");
        input.handle_event(&press(KeyCode::Left));
        assert!(input.handle_event(&Event::Ime(ImeEvent::start())));
        assert!(input.handle_event(&Event::Ime(ImeEvent::update("漢"))));
        assert_eq!(input.ime_composition(), Some("漢"));
        assert!(input.handle_event(&Event::Ime(ImeEvent::commit("漢"))));
        assert_eq!(input.ime_composition(), None);
        assert_eq!(input.value(), "a漢b");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn ime_cancel_keeps_value() {
        let mut input = TextInput::new().with_value("hello");
        input.handle_event(&Event::Ime(ImeEvent::start()));
        input.handle_event(&Event::Ime(ImeEvent::update("👩‍💻")));
        assert!(input.handle_event(&Event::Ime(ImeEvent::cancel())));
        assert_eq!(input.value(), "hello");
        assert_eq!(input.ime_composition(), None);
    }

    #[test]
    fn disabled_ignores_events() {
        let mut input = TextInput::new().with_value("ab");
        input.set_disabled(true);
        assert!(!input.handle_event(&press(KeyCode::Char('x'))));
        assert!(!input.handle_event(&Event::Paste(PasteEvent::bracketed("y"))));
        assert_eq!(input.value(), "ab");
        input.set_disabled(false);
        assert!(input.handle_event(&press(KeyCode::Char('x'))));
        assert_eq!(input.value(), "abx");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut input = TextInput::new();
        let release = Event::Key(KeyEvent::new(KeyCode::Char('a')).with_kind(KeyEventKind::Release));
        assert!(!input.handle_event(&release));
        assert!(input.value().is_empty());
    }

    #[test]
    fn visual_cursor_column_counts_wide_graphemes() {
        let input = TextInput::new().with_value("a漢b");
        // 'a' (1) + '漢' (2) + 'b' (1)
        assert_eq!(input.visual_cursor_column(), 4);
    }

    #[test]
    fn visual_cursor_column_includes_preedit() {
        let mut input = TextInput::new().with_value("ab");
        input.ime_update_composition("漢");
        assert_eq!(input.visual_cursor_column(), 4);
    }

    #[test]
    fn combining_mark_merges_without_cursor_advance() {
        let mut input = TextInput::new().with_value("a");
        input.handle_event(&press(KeyCode::Char('\u{0301}')));
        assert_eq!(input.value(), "a\u{0301}");
        assert_eq!(input.cursor(), 1);
    }
}
