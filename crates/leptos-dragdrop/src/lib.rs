//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop for flat Leptos lists.
//! The dragged row's payload travels through the native `DataTransfer`
//! as JSON, so any serde type can be carried between rows.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use serde::{de::DeserializeOwned, Serialize};
use web_sys::DragEvent;

/// Format the payload is stored under in the `DataTransfer`
pub const PAYLOAD_FORMAT: &str = "text/plain";

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Row currently being dragged (set one tick after dragstart)
    pub dragging_read: ReadSignal<Option<String>>,
    pub dragging_write: WriteSignal<Option<String>>,
    /// Row currently hovered as a drop target
    pub over_read: ReadSignal<Option<String>>,
    pub over_write: WriteSignal<Option<String>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<String>);
    let (over_read, over_write) = signal(None::<String>);
    DndSignals {
        dragging_read,
        dragging_write,
        over_read,
        over_write,
    }
}

impl DndSignals {
    pub fn is_dragging(&self, row_id: &str) -> bool {
        self.dragging_read.with(|d| d.as_deref() == Some(row_id))
    }

    pub fn is_over(&self, row_id: &str) -> bool {
        self.over_read.with(|o| o.as_deref() == Some(row_id))
    }
}

/// Serialize a payload for the `DataTransfer` channel
pub fn encode_payload<P: Serialize>(payload: &P) -> Option<String> {
    match serde_json::to_string(payload) {
        Ok(s) => Some(s),
        Err(e) => {
            log::error!("[DND] Failed to encode payload: {}", e);
            None
        }
    }
}

/// Parse a payload read back from the `DataTransfer` channel
pub fn decode_payload<P: DeserializeOwned>(raw: &str) -> Option<P> {
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str(raw) {
        Ok(p) => Some(p),
        Err(e) => {
            log::warn!("[DND] Rejected payload {:?}: {}", raw, e);
            None
        }
    }
}

/// Store a payload in the event's `DataTransfer`
pub fn write_payload<P: Serialize>(ev: &DragEvent, payload: &P) -> bool {
    let Some(encoded) = encode_payload(payload) else { return false };
    match ev.data_transfer() {
        Some(dt) => dt.set_data(PAYLOAD_FORMAT, &encoded).is_ok(),
        None => false,
    }
}

/// Read a payload from the event's `DataTransfer`
pub fn read_payload<P: DeserializeOwned>(ev: &DragEvent) -> Option<P> {
    let raw = ev.data_transfer()?.get_data(PAYLOAD_FORMAT).ok()?;
    decode_payload(&raw)
}

/// Create dragstart handler for a draggable row
///
/// The dragging mark is deferred by one tick so the browser snapshots the
/// drag image before the row's styling changes.
pub fn make_on_dragstart<P>(dnd: DndSignals, row_id: String, payload: P) -> impl Fn(DragEvent) + Clone + 'static
where
    P: Serialize + Clone + 'static,
{
    move |ev: DragEvent| {
        if !write_payload(&ev, &payload) {
            return;
        }
        let dragging = dnd.dragging_write;
        let id = row_id.clone();
        Timeout::new(0, move || dragging.set(Some(id))).forget();
    }
}

/// Create dragover/dragenter handler (marks the row as drop target)
///
/// Rows for which `accepts` returns false are left alone, so the browser
/// shows its no-drop cursor and never fires `drop` on them.
pub fn make_on_dragover<F>(dnd: DndSignals, row_id: String, accepts: F) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn() -> bool + Clone + 'static,
{
    move |ev: DragEvent| {
        if !accepts() {
            return;
        }
        ev.prevent_default();
        if dnd.over_read.with_untracked(|o| o.as_deref() != Some(row_id.as_str())) {
            dnd.over_write.set(Some(row_id.clone()));
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(dnd: DndSignals, row_id: String) -> impl Fn(DragEvent) + Clone + 'static {
    move |_ev: DragEvent| {
        if dnd.over_read.with_untracked(|o| o.as_deref() == Some(row_id.as_str())) {
            dnd.over_write.set(None);
        }
    }
}

/// Create dragend handler (fires on the source row, dropped or not)
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        dnd.dragging_write.set(None);
        dnd.over_write.set(None);
    }
}

/// Create drop handler for a row; `on_drop` receives the decoded payload
pub fn make_on_drop<P, F>(dnd: DndSignals, on_drop: F) -> impl Fn(DragEvent) + Clone + 'static
where
    P: DeserializeOwned,
    F: Fn(P) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        dnd.over_write.set(None);
        if let Some(payload) = read_payload::<P>(&ev) {
            on_drop(payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Payload {
        id: String,
        #[serde(rename = "type")]
        kind: String,
    }

    #[test]
    fn test_payload_wire_shape() {
        let p = Payload { id: "id1".to_string(), kind: "group".to_string() };
        let encoded = encode_payload(&p).unwrap();
        assert_eq!(encoded, r#"{"id":"id1","type":"group"}"#);
        assert_eq!(decode_payload::<Payload>(&encoded), Some(p));
    }

    #[test]
    fn test_decode_rejects_foreign_data() {
        // Dragging plain text from elsewhere on the page
        assert_eq!(decode_payload::<Payload>("hello"), None);
        assert_eq!(decode_payload::<Payload>(""), None);
        assert_eq!(decode_payload::<Payload>(r#"{"id":"x"}"#), None);
    }
}
