#![forbid(unsafe_code)]

//! FormField control widgets.
//!
//! A custom form control for host-driven runtimes: a text field that
//! toggles between a single-line editor ([`input::TextInput`]) and a
//! multi-line editor ([`textarea::TextArea`]), wrapped in a
//! [`field::FieldWidget`] that implements the host lifecycle contract.
//!
//! The host owns the page, rendering, data binding, and persistence. A
//! control only mutates the container element it was handed, reconciles
//! its editors from configuration snapshots, and reports its value back.

pub mod field;
pub mod input;
pub mod textarea;

use formfield_core::Element;

/// Zero-argument change notification a control invokes after every
/// user-driven value mutation. The mutation strictly precedes the call,
/// so a host reading outputs from inside the callback sees the new value.
pub type NotifyChange = Box<dyn FnMut()>;

/// The host ↔ control lifecycle contract.
///
/// The host drives a control through `init` → `update_view`* → `destroy`,
/// pushing a fresh configuration snapshot on every render cycle and
/// pulling outputs whenever it has been notified of a change. Calls are
/// synchronous on the host's UI loop; none of them blocks or suspends.
pub trait Control {
    /// Host-owned configuration snapshot, supplied fresh on every update.
    type Config;

    /// The values the control reports back to the host.
    type Outputs;

    /// Attach the control's chrome into `container` and store the change
    /// callback. Called exactly once, before any other lifecycle call.
    fn init(&mut self, container: &Element, notify: NotifyChange);

    /// Reconcile the control against a new configuration snapshot.
    fn update_view(&mut self, config: &Self::Config);

    /// Read the control's current outputs. Pure; no side effects.
    fn outputs(&self) -> Self::Outputs;

    /// Detach everything the control mounted. Idempotent.
    fn destroy(&mut self);
}
