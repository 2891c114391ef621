#![forbid(unsafe_code)]

//! Lifecycle scenarios for the FormField control.
//!
//! These tests drive the control the way a host runtime does: construct
//! once, push configuration snapshots on every render cycle, forward user
//! input, read outputs after change notifications, and tear down at the
//! end. They exercise boundary behavior the inline unit tests do not:
//! full init → update* → destroy sequences and cross-variant state.

use formfield_core::Element;
use formfield_core::event::{Event, KeyCode, KeyEvent};
use formfield_widgets::Control;
use formfield_widgets::field::{FieldConfig, FieldWidget};
use std::cell::RefCell;
use std::rc::Rc;

// ── Helpers ────────────────────────────────────────────────────────

fn key_press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code))
}

fn type_text(widget: &mut FieldWidget, text: &str) {
    for c in text.chars() {
        widget.handle_event(&key_press(KeyCode::Char(c)));
    }
}

struct Host {
    widget: FieldWidget,
    container: Element,
    notifications: Rc<RefCell<usize>>,
}

impl Host {
    fn init() -> Self {
        let container = Element::new("div");
        let notifications = Rc::new(RefCell::new(0usize));
        let counter = Rc::clone(&notifications);
        let mut widget = FieldWidget::new();
        widget.init(
            &container,
            Box::new(move || {
                *counter.borrow_mut() += 1;
            }),
        );
        Self {
            widget,
            container,
            notifications,
        }
    }

    fn notifications(&self) -> usize {
        *self.notifications.borrow()
    }
}

// ── Scenarios ──────────────────────────────────────────────────────

#[test]
fn scenario_a_single_line_with_placeholder() {
    let mut host = Host::init();
    host.widget.update_view(&FieldConfig {
        value: Some(String::new()),
        multiline: Some(false),
        placeholder: Some("Name".into()),
        rows: None,
        disabled: false,
    });

    assert!(!host.widget.is_multiline());
    let chrome = host.widget.chrome_element();
    assert!(chrome.contains(&host.widget.input_element()));
    assert!(!chrome.contains(&host.widget.textarea_element()));
    assert_eq!(host.widget.input().placeholder(), "Name");
    assert_eq!(host.widget.input().value(), "");
    assert!(!host.widget.input().disabled());
}

#[test]
fn scenario_b_switch_to_multiline() {
    let mut host = Host::init();
    host.widget.update_view(&FieldConfig {
        placeholder: Some("Name".into()),
        ..Default::default()
    });
    host.widget.update_view(&FieldConfig {
        value: Some(String::new()),
        multiline: Some(true),
        placeholder: Some("Notes".into()),
        rows: Some(5),
        disabled: false,
    });

    assert!(host.widget.is_multiline());
    let chrome = host.widget.chrome_element();
    assert_eq!(chrome.child_count(), 1);
    assert!(chrome.contains(&host.widget.textarea_element()));
    assert!(!host.widget.input_element().is_attached());
    assert_eq!(host.widget.textarea().rows(), 5);
    assert_eq!(host.widget.textarea().placeholder(), "Notes");
}

#[test]
fn scenario_c_negative_rows_clamp_to_one() {
    let mut host = Host::init();
    host.widget.update_view(&FieldConfig {
        multiline: Some(true),
        rows: Some(5),
        ..Default::default()
    });
    host.widget.update_view(&FieldConfig {
        multiline: Some(true),
        rows: Some(-2),
        ..Default::default()
    });
    assert_eq!(host.widget.textarea().rows(), 1);
}

#[test]
fn scenario_d_typing_updates_outputs_and_notifies() {
    let mut host = Host::init();
    host.widget.update_view(&FieldConfig::default());
    type_text(&mut host.widget, "abc");

    assert_eq!(host.widget.outputs().value, "abc");
    assert!(host.notifications() >= 1);
}

#[test]
fn scenario_e_destroy_leaves_container_empty() {
    let mut host = Host::init();
    host.widget.update_view(&FieldConfig {
        multiline: Some(true),
        ..Default::default()
    });
    host.widget.destroy();
    assert_eq!(host.container.child_count(), 0);
}

// ── Properties ─────────────────────────────────────────────────────

#[test]
fn round_trip_config_then_user_edit() {
    let mut host = Host::init();
    host.widget.update_view(&FieldConfig {
        value: Some("hello".into()),
        ..Default::default()
    });
    assert_eq!(host.widget.outputs().value, "hello");

    type_text(&mut host.widget, "!!");
    // User edits flow into outputs without another update_view.
    assert_eq!(host.widget.outputs().value, "hello!!");
}

#[test]
fn identical_updates_are_idempotent() {
    let mut host = Host::init();
    let config = FieldConfig {
        value: Some("stable".into()),
        multiline: Some(true),
        placeholder: Some("Notes".into()),
        rows: Some(4),
        disabled: false,
    };
    host.widget.update_view(&config);
    let cursor_after_first = host.widget.textarea().cursor();
    host.widget.update_view(&config);

    assert_eq!(host.widget.textarea().cursor(), cursor_after_first);
    assert_eq!(host.widget.textarea().rows(), 4);
    assert_eq!(host.widget.textarea().placeholder(), "Notes");
    assert_eq!(host.widget.outputs().value, "stable");
    assert_eq!(host.widget.chrome_element().child_count(), 1);
}

#[test]
fn notification_observes_mutated_value() {
    // The change callback fires after the value mutation, so outputs read
    // immediately afterwards reflect the keystroke that triggered it.
    let mut host = Host::init();
    host.widget.update_view(&FieldConfig::default());

    let before = host.notifications();
    host.widget.handle_event(&key_press(KeyCode::Char('z')));
    assert_eq!(host.notifications(), before + 1);
    assert_eq!(host.widget.outputs().value, "z");
}

#[test]
fn user_edits_survive_in_multiline_until_next_update() {
    let mut host = Host::init();
    host.widget.update_view(&FieldConfig {
        multiline: Some(true),
        ..Default::default()
    });
    type_text(&mut host.widget, "line one");
    host.widget.handle_event(&key_press(KeyCode::Enter));
    type_text(&mut host.widget, "line two");

    assert_eq!(host.widget.outputs().value, "line one\nline two");
}

#[test]
fn disabled_field_ignores_typing() {
    let mut host = Host::init();
    host.widget.update_view(&FieldConfig {
        value: Some("locked".into()),
        disabled: true,
        ..Default::default()
    });
    type_text(&mut host.widget, "nope");
    assert_eq!(host.widget.outputs().value, "locked");
    assert_eq!(host.notifications(), 0);
}

#[test]
fn repeated_swaps_keep_one_mounted_child() {
    let mut host = Host::init();
    for i in 0..6 {
        host.widget.update_view(&FieldConfig {
            multiline: Some(i % 2 == 0),
            ..Default::default()
        });
        assert_eq!(host.widget.chrome_element().child_count(), 1);
    }
}

#[test]
fn full_lifecycle_init_update_destroy() {
    let mut host = Host::init();
    host.widget.update_view(&FieldConfig {
        value: Some("v1".into()),
        ..Default::default()
    });
    type_text(&mut host.widget, "23");
    host.widget.update_view(&FieldConfig {
        value: Some("v2".into()),
        multiline: Some(true),
        rows: Some(2),
        ..Default::default()
    });
    assert_eq!(host.widget.outputs().value, "v2");

    host.widget.destroy();
    assert_eq!(host.container.child_count(), 0);
    // Outputs remain readable after teardown; the control just holds no
    // mounted elements anymore.
    assert_eq!(host.widget.outputs().value, "v2");
}
