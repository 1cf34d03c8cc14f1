// Reveal-on-scroll wrapper. A section starts hidden (faded, offset, scaled
// down) and transitions to its resting state the first time enough of it
// scrolls into the viewport. The transition is one-shot: scrolling away
// never hides it again.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Fraction of the wrapped region that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.2;

const TRANSITION: &str = "transition: opacity 0.6s ease-out, transform 0.6s ease-out;";

/// Sign of the initial vertical offset. `Up` starts below its resting
/// position and slides up into place; `Down` starts above it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealDirection {
    #[default]
    Up,
    Down,
}

impl RevealDirection {
    /// Vertical offset of the hidden state, in px.
    pub fn hidden_offset(self) -> f64 {
        match self {
            RevealDirection::Up => 50.0,
            RevealDirection::Down => -50.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Visible,
}

/// Two-state machine behind the wrapper, fed raw visibility ratios so the
/// threshold rule lives in one place and tests need no DOM.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reveal {
    revealed: bool,
}

impl Reveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RevealPhase {
        if self.revealed {
            RevealPhase::Visible
        } else {
            RevealPhase::Hidden
        }
    }

    /// Record one intersection observation. Crossing the threshold flips the
    /// machine to `Visible`; later observations never flip it back.
    pub fn observe(&mut self, visible_ratio: f64) -> RevealPhase {
        if visible_ratio >= REVEAL_THRESHOLD {
            self.revealed = true;
        }
        self.phase()
    }
}

pub fn hidden_style(direction: RevealDirection) -> String {
    format!(
        "opacity: 0; transform: translateY({}px) scale(0.9); {TRANSITION}",
        direction.hidden_offset()
    )
}

pub fn visible_style() -> String {
    format!("opacity: 1; transform: translateY(0px) scale(1); {TRANSITION}")
}

/// Wraps arbitrary children and defers their appearance until first scrolled
/// into view, driven by an `IntersectionObserver` on the wrapper div.
#[component]
pub fn RevealOnScroll(
    #[prop(optional)] direction: RevealDirection,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let (revealed, set_revealed) = signal(false);

    Effect::new(move || {
        let Some(el) = node.get() else { return };
        let mut machine = Reveal::new();
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if machine.observe(entry.intersection_ratio()) == RevealPhase::Visible {
                        set_revealed.set(true);
                        observer.disconnect();
                    }
                }
            },
        );
        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("IntersectionObserver unavailable, content stays hidden: {err:?}");
                return;
            }
        };
        observer.observe(&el);
        // Keeps the callback alive while the component is mounted and
        // detaches the observer if we unmount before revealing. SendWrapper
        // satisfies on_cleanup's Send + Sync bound; wasm is single-threaded.
        let cleanup = send_wrapper::SendWrapper::new((observer, callback));
        on_cleanup(move || {
            let (observer, callback) = cleanup.take();
            observer.disconnect();
            drop(callback);
        });
    });

    let style = move || {
        if revealed.get() {
            visible_style()
        } else {
            hidden_style(direction)
        }
    };

    view! {
        <div node_ref=node class="reveal" style=style>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert_eq!(Reveal::new().phase(), RevealPhase::Hidden);
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let mut reveal = Reveal::new();
        assert_eq!(reveal.observe(0.0), RevealPhase::Hidden);
        assert_eq!(reveal.observe(0.19), RevealPhase::Hidden);
    }

    #[test]
    fn reveals_at_threshold() {
        let mut reveal = Reveal::new();
        assert_eq!(reveal.observe(REVEAL_THRESHOLD), RevealPhase::Visible);
    }

    #[test]
    fn never_hides_again_after_reveal() {
        let mut reveal = Reveal::new();
        reveal.observe(0.8);
        // Scrolled fully out of view again.
        assert_eq!(reveal.observe(0.0), RevealPhase::Visible);
        assert_eq!(reveal.phase(), RevealPhase::Visible);
    }

    #[test]
    fn direction_offsets_are_mirrored() {
        assert_eq!(RevealDirection::Up.hidden_offset(), 50.0);
        assert_eq!(RevealDirection::Down.hidden_offset(), -50.0);
        assert_eq!(
            RevealDirection::Up.hidden_offset(),
            -RevealDirection::Down.hidden_offset()
        );
    }

    #[test]
    fn default_direction_is_up() {
        assert_eq!(RevealDirection::default(), RevealDirection::Up);
    }

    #[test]
    fn hidden_style_encodes_offset_and_scale() {
        let up = hidden_style(RevealDirection::Up);
        assert!(up.contains("opacity: 0"));
        assert!(up.contains("translateY(50px)"));
        assert!(up.contains("scale(0.9)"));
        let down = hidden_style(RevealDirection::Down);
        assert!(down.contains("translateY(-50px)"));
    }

    #[test]
    fn both_styles_share_the_easing() {
        for style in [hidden_style(RevealDirection::Up), visible_style()] {
            assert!(style.contains("0.6s ease-out"));
        }
        assert!(visible_style().contains("opacity: 1"));
        assert!(visible_style().contains("translateY(0px) scale(1)"));
    }
}
