use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// Piecewise-linear lookup over ordered `(progress, value)` breakpoints.
///
/// Input below the first breakpoint returns the first value, input above the
/// last returns the last value, and duplicate breakpoints behave as a step.
/// Breakpoints must be sorted by progress.
pub fn interpolate(progress: f32, curve: &[(f32, f32)]) -> f32 {
    let Some(&(first_p, first_v)) = curve.first() else {
        return 0.0;
    };
    if progress <= first_p {
        return first_v;
    }

    let mut value = first_v;
    for pair in curve.windows(2) {
        let (p0, v0) = pair[0];
        let (p1, v1) = pair[1];
        if progress >= p1 {
            value = v1;
        } else {
            return v0 + (v1 - v0) * (progress - p0) / (p1 - p0);
        }
    }
    value
}

/// Normalized progress of an element travelling through the viewport:
/// 0.0 when its top edge reaches the viewport bottom, 1.0 once its bottom
/// edge leaves through the top. `top` is viewport-relative (bounding rect).
pub fn viewport_progress(top: f32, height: f32, viewport_height: f32) -> f32 {
    let total = viewport_height + height;
    if total <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / total).clamp(0.0, 1.0)
}

/// The fade-in / hold / fade-out envelope the scroll-linked sections share:
/// four breakpoints (enter-start, enter-end, exit-start, exit-end) driving
/// opacity, vertical offset, blur and scale from one progress value.
pub struct RevealCurves {
    pub opacity: [(f32, f32); 4],
    pub y: [(f32, f32); 4],
    pub blur: [(f32, f32); 4],
    pub scale: [(f32, f32); 4],
}

impl RevealCurves {
    /// Section-header envelope: slides 50px, blurs to 5px at the edges.
    pub fn header(enter_start: f32, enter_end: f32, exit_start: f32, exit_end: f32) -> Self {
        Self {
            opacity: [(enter_start, 0.0), (enter_end, 1.0), (exit_start, 1.0), (exit_end, 0.0)],
            y: [(enter_start, 50.0), (enter_end, 0.0), (exit_start, 0.0), (exit_end, -50.0)],
            blur: [(enter_start, 5.0), (enter_end, 0.0), (exit_start, 0.0), (exit_end, 5.0)],
            scale: [(enter_start, 0.95), (enter_end, 1.0), (exit_start, 1.0), (exit_end, 0.95)],
        }
    }

    /// Card envelope: larger travel for the grid items.
    pub fn card(enter_start: f32, enter_end: f32, exit_start: f32, exit_end: f32) -> Self {
        Self {
            opacity: [(enter_start, 0.0), (enter_end, 1.0), (exit_start, 1.0), (exit_end, 0.0)],
            y: [(enter_start, 100.0), (enter_end, 0.0), (exit_start, 0.0), (exit_end, -100.0)],
            blur: [(enter_start, 5.0), (enter_end, 0.0), (exit_start, 0.0), (exit_end, 5.0)],
            scale: [(enter_start, 0.85), (enter_end, 1.0), (exit_start, 1.0), (exit_end, 0.9)],
        }
    }

    /// Renders the four samples as an inline style for the host element.
    pub fn style(&self, progress: f32) -> String {
        let opacity = interpolate(progress, &self.opacity);
        let y = interpolate(progress, &self.y);
        let blur = interpolate(progress, &self.blur);
        let scale = interpolate(progress, &self.scale);
        format!(
            "opacity: {opacity:.3}; transform: translateY({y:.1}px) scale({scale:.3}); filter: blur({blur:.1}px);"
        )
    }
}

fn sample_progress(node: &NodeRef, window: &web_sys::Window) -> Option<f32> {
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    let viewport_h = window.inner_height().ok().and_then(|v| v.as_f64())? as f32;
    Some(viewport_progress(
        rect.top() as f32,
        rect.height() as f32,
        viewport_h,
    ))
}

/// Subscribes to window scroll and reports the node's viewport progress,
/// sampled once at mount and then per scroll event. Updates are
/// epsilon-gated so a flood of scroll events doesn't re-render the host for
/// sub-pixel movement. The listener is removed on unmount.
#[hook]
pub fn use_viewport_progress(node: NodeRef) -> f32 {
    let progress = use_state(|| 0.0f32);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |node| {
                let node = node.clone();
                let window = web_sys::window().unwrap();
                let listener_window = window.clone();
                let last = Rc::new(Cell::new(-1.0f32));

                if let Some(initial) = sample_progress(&node, &window) {
                    last.set(initial);
                    progress.set(initial);
                }

                let callback = Closure::wrap(Box::new(move || {
                    if let Some(next) = sample_progress(&node, &listener_window) {
                        if (next - last.get()).abs() > 0.002 {
                            last.set(next);
                            progress.set(next);
                        }
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    drop(callback);
                }
            },
            node,
        );
    }

    *progress
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: [(f32, f32); 4] = [(0.0, 0.0), (0.2, 1.0), (0.85, 1.0), (1.0, 0.0)];

    #[test]
    fn clamps_below_and_above_the_domain() {
        assert_eq!(interpolate(-1.0, &HEADER), interpolate(0.0, &HEADER));
        assert_eq!(interpolate(2.0, &HEADER), interpolate(1.0, &HEADER));
    }

    #[test]
    fn returns_exact_values_at_breakpoints() {
        assert_eq!(interpolate(0.0, &HEADER), 0.0);
        assert_eq!(interpolate(0.2, &HEADER), 1.0);
        assert_eq!(interpolate(0.85, &HEADER), 1.0);
        assert_eq!(interpolate(1.0, &HEADER), 0.0);
    }

    #[test]
    fn interpolates_linearly_between_breakpoints() {
        assert!((interpolate(0.1, &HEADER) - 0.5).abs() < 1e-6);
        let y = [(0.1f32, 50.0f32), (0.25, 0.0)];
        assert!((interpolate(0.175, &y) - 25.0).abs() < 1e-4);
    }

    #[test]
    fn holds_the_plateau_between_enter_and_exit() {
        assert_eq!(interpolate(0.5, &HEADER), 1.0);
    }

    #[test]
    fn duplicate_breakpoints_act_as_a_step() {
        let step = [(0.0f32, 0.0f32), (0.5, 0.0), (0.5, 1.0), (1.0, 1.0)];
        assert_eq!(interpolate(0.49, &step), 0.0);
        assert_eq!(interpolate(0.5, &step), 1.0);
        assert_eq!(interpolate(0.51, &step), 1.0);
    }

    #[test]
    fn empty_curve_samples_to_zero() {
        assert_eq!(interpolate(0.5, &[]), 0.0);
    }

    #[test]
    fn viewport_progress_covers_the_full_travel() {
        // top edge at the viewport bottom
        assert_eq!(viewport_progress(800.0, 400.0, 800.0), 0.0);
        // bottom edge leaving through the top
        assert_eq!(viewport_progress(-400.0, 400.0, 800.0), 1.0);
        // halfway through
        let mid = viewport_progress(200.0, 400.0, 800.0);
        assert!((mid - 0.5).abs() < 1e-6);
    }

    #[test]
    fn viewport_progress_clamps_outside_the_travel() {
        assert_eq!(viewport_progress(2000.0, 400.0, 800.0), 0.0);
        assert_eq!(viewport_progress(-2000.0, 400.0, 800.0), 1.0);
    }

    #[test]
    fn reveal_style_is_fully_resolved_on_the_plateau() {
        let curves = RevealCurves::header(0.0, 0.2, 0.85, 1.0);
        let style = curves.style(0.5);
        assert!(style.contains("opacity: 1.000"));
        assert!(style.contains("translateY(0.0px)"));
        assert!(style.contains("blur(0.0px)"));
    }
}
