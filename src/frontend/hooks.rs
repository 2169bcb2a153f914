use devfolio::{
    content::{find_section, Section},
    motion::{header_is_scrolled, page_progress, view_progress},
};
use js_sys::Array;
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

const FALLBACK_VIEWPORT_HEIGHT: f64 = 720.0;

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn window_scroll_y() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_HEIGHT)
}

fn document_scroll_height() -> f64 {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0)
}

fn location_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

fn current_page_progress() -> f64 {
    page_progress(window_scroll_y(), document_scroll_height(), viewport_height())
}

fn current_view_progress(node: &NodeRef) -> f64 {
    let Some(element) = node.cast::<Element>() else {
        return 0.0;
    };

    let rect = element.get_bounding_client_rect();
    view_progress(rect.top(), rect.height(), viewport_height())
}

/// Window event subscription that unsubscribes when dropped.
struct WindowListener {
    events: &'static [&'static str],
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    fn add(events: &'static [&'static str], on_event: impl FnMut() + 'static) -> Self {
        let callback = Closure::<dyn FnMut()>::new(on_event);

        if let Some(win) = window() {
            for event in events {
                let _ = win.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
            }
        }

        Self { events, callback }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(win) = window() {
            for event in self.events {
                let _ = win.remove_event_listener_with_callback(
                    event,
                    self.callback.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

/// Absolute vertical scroll offset, updated on every scroll event.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state_eq(window_scroll_y);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with((), move |_| {
            let listener = WindowListener::add(&["scroll"], move || scroll_y.set(window_scroll_y()));
            move || drop(listener)
        });
    }

    *scroll_y
}

/// Re-renders only when the header crosses the scrolled threshold.
#[hook]
pub fn use_header_scrolled() -> bool {
    let scrolled = use_state_eq(|| header_is_scrolled(window_scroll_y()));

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let listener = WindowListener::add(&["scroll"], move || {
                scrolled.set(header_is_scrolled(window_scroll_y()))
            });
            move || drop(listener)
        });
    }

    *scrolled
}

/// Section named by the URL fragment, if the fragment is one of the page anchors.
#[hook]
pub fn use_active_section() -> Option<Section> {
    let active = use_state_eq(|| find_section(&location_hash()).copied());

    {
        let active = active.clone();
        use_effect_with((), move |_| {
            let listener = WindowListener::add(&["hashchange"], move || {
                active.set(find_section(&location_hash()).copied())
            });
            move || drop(listener)
        });
    }

    *active
}

#[hook]
pub fn use_page_progress() -> f64 {
    let progress = use_state_eq(|| 0.0);

    {
        let progress = progress.clone();
        use_effect_with((), move |_| {
            progress.set(current_page_progress());
            let listener = WindowListener::add(&["scroll", "resize"], move || {
                progress.set(current_page_progress())
            });
            move || drop(listener)
        });
    }

    *progress
}

/// Progress of `node` from entering the viewport bottom to leaving its top.
#[hook]
pub fn use_view_progress(node: NodeRef) -> f64 {
    let progress = use_state_eq(|| 0.0);

    {
        let progress = progress.clone();
        use_effect_with(node, move |node| {
            progress.set(current_view_progress(node));
            let node = node.clone();
            let listener = WindowListener::add(&["scroll", "resize"], move || {
                progress.set(current_view_progress(&node))
            });
            move || drop(listener)
        });
    }

    *progress
}

/// Latches to `true` the first time `node` intersects the viewport and never
/// resets, so one-shot animations do not replay on re-entry.
#[hook]
pub fn use_in_view_once(node: NodeRef) -> bool {
    let seen = use_state_eq(|| false);

    {
        let seen = seen.clone();
        use_effect_with(node, move |node| {
            let on_enter = {
                let seen = seen.clone();
                move || seen.set(true)
            };
            let observer = observe_first_entry(node, on_enter);
            if observer.is_none() {
                seen.set(true);
            }

            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        });
    }

    *seen
}

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_first_entry(
    node: &NodeRef,
    on_enter: impl Fn() + 'static,
) -> Option<(IntersectionObserver, EntryCallback)> {
    let element = node.cast::<Element>()?;

    let callback = EntryCallback::new(move |entries: Array, observer: IntersectionObserver| {
        let entered = entries.iter().any(|entry| {
            entry
                .dyn_into::<IntersectionObserverEntry>()
                .map(|entry| entry.is_intersecting())
                .unwrap_or(false)
        });

        if entered {
            on_enter();
            observer.disconnect();
        }
    });

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;
    observer.observe(&element);
    Some((observer, callback))
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// requestAnimationFrame loop. `on_frame` receives the frame timestamp in
/// milliseconds and returns whether another frame is wanted. Dropping the
/// loop cancels the pending frame.
pub struct AnimationLoop {
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl AnimationLoop {
    pub fn start(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let pending = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let next_pending = pending.clone();
        let next_callback = callback.clone();
        *callback.borrow_mut() = Some(FrameCallback::new(move |timestamp: f64| {
            next_pending.set(None);

            if !on_frame(timestamp) {
                let _ = next_callback.borrow_mut().take();
                return;
            }

            if let Some(callback) = next_callback.borrow().as_ref() {
                next_pending.set(request_frame(callback));
            }
        }));

        let first = callback.borrow().as_ref().and_then(request_frame);
        pending.set(first);

        Self { pending, callback }
    }
}

fn request_frame(callback: &FrameCallback) -> Option<i32> {
    window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            if let Some(win) = window() {
                let _ = win.cancel_animation_frame(handle);
            }
        }

        let _ = self.callback.borrow_mut().take();
    }
}
