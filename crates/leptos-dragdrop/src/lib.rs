//! Leptos DragDrop Utilities
//!
//! Mouse-driven drag-and-drop for reorderable lists.
//! Uses a movement threshold to distinguish click from drag, measures the
//! rendered rows on every move and lets `studydash-core` decide where the
//! dragged row lands.

use leptos::html::Ul;
use leptos::prelude::*;
use studydash_core::list::{DragGesture, DropTarget, RowBounds};
use wasm_bindgen::JsCast;

/// Attribute every draggable row carries with its list index
pub const ROW_INDEX_ATTR: &str = "data-index";

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub gesture: RwSignal<DragGesture>,
    /// Where the row would land if dropped now
    pub drop_target: RwSignal<Option<DropTarget>>,
    /// Pending row index (mousedown but not yet dragging)
    pub pending_index: RwSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x: RwSignal<i32>,
    pub start_y: RwSignal<i32>,
    /// The list whose rows are measured
    pub list: NodeRef<Ul>,
}

pub fn create_dnd_signals(list: NodeRef<Ul>) -> DndSignals {
    DndSignals {
        gesture: RwSignal::new(DragGesture::Idle),
        drop_target: RwSignal::new(None),
        pending_index: RwSignal::new(None),
        start_x: RwSignal::new(0),
        start_y: RwSignal::new(0),
        list,
    }
}

impl DndSignals {
    /// Index of the row being dragged, tracked
    pub fn dragging(&self) -> Option<usize> {
        self.gesture.get().dragged()
    }

    /// Current rows, top to bottom, as laid out on screen
    fn measure(&self) -> Vec<RowBounds> {
        match self.list.get_untracked() {
            Some(list) => measure_rows(&list),
            None => Vec::new(),
        }
    }
}

/// Read the bounds of every `[data-index]` row under `container`
pub fn measure_rows(container: &web_sys::Element) -> Vec<RowBounds> {
    let selector = format!("[{}]", ROW_INDEX_ATTR);
    let Ok(nodes) = container.query_selector_all(&selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .filter_map(|el| {
            let index = el.get_attribute(ROW_INDEX_ATTR)?.parse::<usize>().ok()?;
            let rect = el.get_bounding_client_rect();
            Some(RowBounds::new(index, rect.top(), rect.height()))
        })
        .collect()
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.gesture.update(|g| g.end());
    dnd.drop_target.set(None);
    dnd.pending_index.set(None);
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore presses on the row's own controls
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlSelectElement>().is_some() { return; }
            }
            dnd.pending_index.set(Some(index));
            dnd.start_x.set(ev.client_x());
            dnd.start_y.set(ev.client_y());
        }
    }
}

/// Bind document mousemove: starts a drag once the pointer moved far enough,
/// then keeps `drop_target` pointing at the row under the pointer
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let gesture = dnd.gesture.get_untracked();

        if let (Some(pending), false) = (dnd.pending_index.get_untracked(), gesture.is_dragging()) {
            let dx = (ev.client_x() - dnd.start_x.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y.get_untracked()).abs();
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.gesture.update(|g| g.start(pending));
            }
        }

        let gesture = dnd.gesture.get_untracked();
        if gesture.is_dragging() {
            let target = gesture.preview(f64::from(ev.client_y()), &dnd.measure());
            if dnd.drop_target.get_untracked() != target {
                dnd.drop_target.set(target);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind document mouseup for drop detection. `on_drop(from, target)` runs
/// once per completed drag; a plain click only clears the pending state.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(usize, DropTarget) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let mut gesture = dnd.gesture.get_untracked();
        let dropped = gesture.finish(f64::from(ev.client_y()), &dnd.measure());
        end_drag(&dnd);
        if let Some((from, target)) = dropped {
            on_drop(from, target);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
