#![forbid(unsafe_code)]

//! Multi-line text editor.
//!
//! A headless multi-line editor: the value may contain line breaks, Enter
//! inserts one, and vertical movement keeps a sticky column across lines.
//! Carries a `rows` hint (visible line count) the host uses when sizing
//! the editor surface; the hint is clamped to a minimum of 1. Editing is
//! grapheme-cluster aware, same as [`crate::input::TextInput`].

use formfield_core::event::{Event, ImeEvent, ImePhase, KeyCode, KeyEvent, KeyEventKind};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::input::{CharClass, grapheme_class};

/// Default visible row count when the host does not configure one.
pub const DEFAULT_ROWS: u16 = 3;

/// A multi-line text editor.
#[derive(Debug, Clone)]
pub struct TextArea {
    /// Text value. May contain `\n`; never other control characters.
    value: String,
    /// Cursor position (grapheme index over the whole buffer; a line
    /// break counts as one grapheme).
    cursor: usize,
    /// Selection anchor (grapheme index).
    selection_anchor: Option<usize>,
    /// Active IME composition text (preedit), if any.
    ime_composition: Option<String>,
    /// Placeholder text shown by the host when the value is empty.
    placeholder: String,
    /// Visible line count hint for the host. Always >= 1.
    rows: u16,
    /// Sticky column (grapheme offset within a line) for Up/Down runs.
    desired_column: Option<usize>,
    /// When disabled, every event is ignored.
    disabled: bool,
}

impl Default for TextArea {
    fn default() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            selection_anchor: None,
            ime_composition: None,
            placeholder: String::new(),
            rows: DEFAULT_ROWS,
            desired_column: None,
            disabled: false,
        }
    }
}

impl TextArea {
    /// Create a new empty textarea.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

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

    /// Set the visible row count (builder), clamped to >= 1.
    #[must_use]
    pub fn with_rows(mut self, rows: u16) -> Self {
        self.rows = rows.max(1);
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
        self.desired_column = None;
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

    /// The visible row count hint.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Set the visible row count hint, clamped to a minimum of 1.
    pub fn set_rows(&mut self, rows: u16) {
        self.rows = rows.max(1);
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

    /// The cursor position as `(line, column)` in grapheme units.
    #[must_use]
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let gs: Vec<&str> = self.value.graphemes(true).collect();
        let start = line_start(&gs, self.cursor);
        let line = gs[..self.cursor].iter().filter(|g| **g == "\n").count();
        (line, self.cursor - start)
    }

    /// The display-cell column of the cursor within its line, for host
    /// caret placement. Includes any in-progress IME preedit.
    #[must_use]
    pub fn visual_cursor_column(&self) -> usize {
        let gs: Vec<&str> = self.value.graphemes(true).collect();
        let start = line_start(&gs, self.cursor);
        let mut col: usize = gs[start..self.cursor]
            .iter()
            .map(|g| UnicodeWidthStr::width(*g))
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
    }

    /// Update the active IME preedit text. Starts a session if none is
    /// active.
    pub fn ime_update_composition(&mut self, preedit: impl Into<String>) {
        if self.ime_composition.is_none() {
            self.delete_selection();
        }
        self.ime_composition = Some(preedit.into());
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
        true
    }

    /// Cancel the active IME composition session.
    ///
    /// Returns `true` if a session was active.
    pub fn ime_cancel_composition(&mut self) -> bool {
        self.ime_composition.take().is_some()
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
        let changed = match event {
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
        };
        #[cfg(feature = "tracing")]
        if changed {
            self.trace_edit();
        }
        changed
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

        // Vertical movement keeps the sticky column; everything else
        // forgets it.
        if !matches!(key.code, KeyCode::Up | KeyCode::Down) {
            self.desired_column = None;
        }

        match key.code {
            KeyCode::Char(c) if !ctrl => {
                self.delete_selection();
                self.insert_char(c);
                true
            }
            KeyCode::Enter => {
                self.delete_selection();
                self.insert_char('\n');
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
                    self.ensure_selection_anchor();
                    if self.cursor > 0 {
                        self.cursor -= 1;
                    }
                } else if let Some(anchor) = self.selection_anchor.take() {
                    self.cursor = self.cursor.min(anchor);
                } else if self.cursor > 0 {
                    self.cursor -= 1;
                }
                true
            }
            KeyCode::Right => {
                if ctrl {
                    self.move_cursor_word_right(shift);
                } else if shift {
                    self.ensure_selection_anchor();
                    if self.cursor < self.grapheme_count() {
                        self.cursor += 1;
                    }
                } else if let Some(anchor) = self.selection_anchor.take() {
                    self.cursor = self.cursor.max(anchor);
                } else if self.cursor < self.grapheme_count() {
                    self.cursor += 1;
                }
                true
            }
            KeyCode::Up => {
                self.update_selection_for_move(shift);
                self.move_cursor_up();
                true
            }
            KeyCode::Down => {
                self.update_selection_for_move(shift);
                self.move_cursor_down();
                true
            }
            KeyCode::Home => {
                self.update_selection_for_move(shift);
                let gs: Vec<&str> = self.value.graphemes(true).collect();
                self.cursor = line_start(&gs, self.cursor);
                true
            }
            KeyCode::End => {
                self.update_selection_for_move(shift);
                let gs: Vec<&str> = self.value.graphemes(true).collect();
                self.cursor = line_end(&gs, self.cursor);
                true
            }
            _ => false,
        }
    }

    #[cfg(feature = "tracing")]
    fn trace_edit(&self) {
        let (line, col) = self.cursor_line_col();
        let _span = tracing::debug_span!(
            "textarea.edit",
            line,
            col,
            graphemes = self.grapheme_count(),
            has_selection = self.selection_anchor.is_some()
        )
        .entered();
    }

    // --- Editing operations ---

    /// Normalize `\r\n` and `\r` to `\n`, keep tabs, drop other control
    /// characters.
    fn sanitize(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    out.push('\n');
                }
                '\n' | '\t' => out.push(c),
                c if c.is_control() => {}
                c => out.push(c),
            }
        }
        out
    }

    /// Insert text at the cursor, preserving line breaks.
    pub fn insert_text(&mut self, text: &str) {
        let clean = Self::sanitize(text);
        if clean.is_empty() {
            return;
        }
        let current = self.grapheme_count();
        let byte_offset = self.grapheme_byte_offset(self.cursor);
        self.value.insert_str(byte_offset, &clean);
        let delta = self.grapheme_count().saturating_sub(current);
        self.cursor = (self.cursor + delta).min(self.grapheme_count());
        self.desired_column = None;
    }

    fn insert_char(&mut self, c: char) {
        if c.is_control() && c != '\n' && c != '\t' {
            return;
        }
        let old_count = self.grapheme_count();
        let byte_offset = self.grapheme_byte_offset(self.cursor);
        self.value.insert(byte_offset, c);
        if self.grapheme_count() > old_count {
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
        let gs: Vec<&str> = self.value.graphemes(true).collect();
        let old_cursor = self.cursor;
        let mut pos = old_cursor;

        let mut skipped_whitespace = false;
        while pos > 0 && grapheme_class(gs[pos - 1]) == CharClass::Whitespace {
            pos -= 1;
            skipped_whitespace = true;
        }
        if !skipped_whitespace && pos > 0 {
            let target = grapheme_class(gs[pos - 1]);
            while pos > 0 && grapheme_class(gs[pos - 1]) == target {
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

    fn update_selection_for_move(&mut self, select: bool) {
        if select {
            self.ensure_selection_anchor();
        } else {
            self.selection_anchor = None;
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

    fn move_cursor_up(&mut self) {
        let gs: Vec<&str> = self.value.graphemes(true).collect();
        let start = line_start(&gs, self.cursor);
        let col = self.desired_column.unwrap_or(self.cursor - start);
        self.desired_column = Some(col);

        if start == 0 {
            // Already on the first line.
            self.cursor = 0;
            return;
        }
        let prev_start = line_start(&gs, start - 1);
        let prev_len = (start - 1) - prev_start;
        self.cursor = prev_start + col.min(prev_len);
    }

    fn move_cursor_down(&mut self) {
        let gs: Vec<&str> = self.value.graphemes(true).collect();
        let start = line_start(&gs, self.cursor);
        let col = self.desired_column.unwrap_or(self.cursor - start);
        self.desired_column = Some(col);

        let end = line_end(&gs, self.cursor);
        if end == gs.len() {
            // Already on the last line.
            self.cursor = gs.len();
            return;
        }
        let next_start = end + 1;
        let next_end = line_end(&gs, next_start);
        self.cursor = next_start + col.min(next_end - next_start);
    }

    fn move_cursor_word_left(&mut self, select: bool) {
        self.update_selection_for_move(select);
        if self.cursor == 0 {
            return;
        }
        let gs: Vec<&str> = self.value.graphemes(true).collect();
        let mut pos = self.cursor;
        while pos > 0 && grapheme_class(gs[pos - 1]) != CharClass::Word {
            pos -= 1;
        }
        while pos > 0 && grapheme_class(gs[pos - 1]) == CharClass::Word {
            pos -= 1;
        }
        self.cursor = pos;
    }

    fn move_cursor_word_right(&mut self, select: bool) {
        self.update_selection_for_move(select);
        let gs: Vec<&str> = self.value.graphemes(true).collect();
        let max = gs.len();
        if self.cursor >= max {
            return;
        }
        let mut pos = self.cursor;
        while pos < max && grapheme_class(gs[pos]) == CharClass::Word {
            pos += 1;
        }
        while pos < max && grapheme_class(gs[pos]) != CharClass::Word {
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

/// Grapheme index of the first grapheme on the line containing `idx`.
fn line_start(gs: &[&str], idx: usize) -> usize {
    let mut pos = idx.min(gs.len());
    while pos > 0 && gs[pos - 1] != "\n" {
        pos -= 1;
    }
    pos
}

/// Grapheme index of the line break ending the line containing `idx`, or
/// `gs.len()` on the last line.
fn line_end(gs: &[&str], idx: usize) -> usize {
    let mut pos = idx.min(gs.len());
    while pos < gs.len() && gs[pos] != "\n" {
        pos += 1;
    }
    pos
}
