//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop for Leptos with typed payload formats.
//! A payload is a `(format, value)` pair stored on the event's
//! `DataTransfer`. Drop zones declare the formats they accept and only
//! allow a drop when one of them is present, so a payload of the wrong
//! kind never reaches a handler.
//!
//! Rows that should only drag from a handle stay non-draggable until the
//! handle is pressed (`make_on_handle_mousedown`).

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DragEvent;

/// A payload in flight
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragData {
    pub format: &'static str,
    pub value: String,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Payload currently being dragged from this page
    pub dragging_read: ReadSignal<Option<DragData>>,
    pub dragging_write: WriteSignal<Option<DragData>>,
    /// Key of the drop zone under the pointer
    pub over_zone_read: ReadSignal<Option<String>>,
    pub over_zone_write: WriteSignal<Option<String>>,
    /// Key of the handle that armed its row for dragging
    pub armed_read: ReadSignal<Option<String>>,
    pub armed_write: WriteSignal<Option<String>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<DragData>);
    let (over_zone_read, over_zone_write) = signal(None::<String>);
    let (armed_read, armed_write) = signal(None::<String>);
    DndSignals {
        dragging_read,
        dragging_write,
        over_zone_read,
        over_zone_write,
        armed_read,
        armed_write,
    }
}

impl DndSignals {
    /// Whether a payload of `format` is being dragged
    pub fn is_dragging(&self, format: &str) -> bool {
        self.dragging_read
            .with(|d| d.as_ref().is_some_and(|d| d.format == format))
    }

    /// Whether the payload `(format, value)` is being dragged
    pub fn is_dragging_value(&self, format: &str, value: &str) -> bool {
        self.dragging_read
            .with(|d| d.as_ref().is_some_and(|d| d.format == format && d.value == value))
    }

    pub fn is_over(&self, zone: &str) -> bool {
        self.over_zone_read.with(|z| z.as_deref() == Some(zone))
    }

    pub fn is_armed(&self, handle: &str) -> bool {
        self.armed_read.with(|a| a.as_deref() == Some(handle))
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.over_zone_write.set(None);
    dnd.armed_write.set(None);
}

// ========================
// DataTransfer access
// ========================

/// Store the payload on the event and mark the drag as a move
pub fn begin_drag(dnd: &DndSignals, ev: &DragEvent, format: &'static str, value: &str) -> bool {
    let Some(transfer) = ev.data_transfer() else {
        return false;
    };
    if transfer.set_data(format, value).is_err() {
        return false;
    }
    transfer.set_effect_allowed("move");
    dnd.dragging_write.set(Some(DragData {
        format,
        value: value.to_string(),
    }));
    true
}

/// Whether the event carries a payload of `format`. Readable during
/// `dragover`, unlike the payload value itself.
pub fn has_format(ev: &DragEvent, format: &str) -> bool {
    ev.data_transfer()
        .map(|t| t.types().iter().any(|ty| ty.as_string().as_deref() == Some(format)))
        .unwrap_or(false)
}

/// First accepted format present on the event
pub fn accepted_format(ev: &DragEvent, accepts: &[&'static str]) -> Option<&'static str> {
    accepts.iter().copied().find(|format| has_format(ev, format))
}

/// Payload value for `format`; only available on `drop`
pub fn read_data(ev: &DragEvent, format: &'static str) -> Option<DragData> {
    let value = ev.data_transfer()?.get_data(format).ok()?;
    if value.is_empty() {
        return None;
    }
    Some(DragData { format, value })
}

/// `id` of the topmost element under the pointer, if it has one
pub fn target_element_id(ev: &DragEvent) -> Option<String> {
    let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let id = element.id();
    (!id.is_empty()).then_some(id)
}

// ========================
// Handler factories
// ========================

/// Create dragstart handler for a draggable element carrying `data`
pub fn make_on_dragstart(dnd: DndSignals, data: DragData) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        if begin_drag(&dnd, &ev, data.format, &data.value) {
            // nested draggables: the innermost one owns the drag
            ev.stop_propagation();
        }
    }
}

/// Create dragend handler; runs whether or not a drop happened
pub fn make_on_dragend<F>(dnd: DndSignals, on_end: F) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn() + Clone + 'static,
{
    move |_ev: DragEvent| {
        end_drag(&dnd);
        on_end();
    }
}

/// Create dragover handler for a zone. The drop is only allowed when one
/// of `accepts` is on the event.
pub fn make_on_dragover(dnd: DndSignals, zone: String, accepts: &'static [&'static str]) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        if accepted_format(&ev, accepts).is_none() {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_drop_effect("move");
        }
        if !dnd.is_over(&zone) {
            dnd.over_zone_write.set(Some(zone.clone()));
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(dnd: DndSignals, zone: String) -> impl Fn(DragEvent) + Clone + 'static {
    move |_ev: DragEvent| {
        if dnd.is_over(&zone) {
            dnd.over_zone_write.set(None);
        }
    }
}

/// Create drop handler. `on_drop` receives the payload and the topmost
/// element id under the pointer. Events without an accepted payload are
/// left to bubble.
pub fn make_on_drop<F>(dnd: DndSignals, accepts: &'static [&'static str], on_drop: F) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn(DragData, Option<String>) + Clone + 'static,
{
    move |ev: DragEvent| {
        let Some(format) = accepted_format(&ev, accepts) else {
            return;
        };
        ev.prevent_default();
        ev.stop_propagation();
        dnd.over_zone_write.set(None);
        if let Some(data) = read_data(&ev, format) {
            on_drop(data, target_element_id(&ev));
        }
    }
}

/// Create mousedown handler for a drag handle: arms its row
pub fn make_on_handle_mousedown(dnd: DndSignals, handle: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            dnd.armed_write.set(Some(handle.clone()));
        }
    }
}

/// Create mouseup handler for a drag handle: disarms without dragging
pub fn make_on_handle_mouseup(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        dnd.armed_write.set(None);
    }
}
