#![forbid(unsafe_code)]

//! Core: canonical input events and the retained element tree.
//!
//! # Role in FormField
//! `formfield-core` is the layer a host runtime and a control share. It owns
//! the normalized event types the editors consume and the element tree that
//! models the host's document fragment a control is allowed to mutate.
//!
//! # Primary responsibilities
//! - **Event**: canonical input events (keys, paste, IME, focus).
//! - **Element**: cheap clonable handles to retained tree nodes, with
//!   mount/detach/replace operations that preserve node identity.
//!
//! # How it fits in the system
//! The host forwards `Event` values into a control; the control grafts its
//! chrome into a host-owned `Element` container and moves its editor
//! surfaces between detached and mounted positions without re-creating
//! them. `formfield-widgets` builds the actual control on top of both.

pub mod element;
pub mod event;

pub use element::Element;
pub use event::{Event, ImeEvent, ImePhase, KeyCode, KeyEvent, KeyEventKind, Modifiers, PasteEvent};
