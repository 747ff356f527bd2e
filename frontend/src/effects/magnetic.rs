use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

/// Element bounds in viewport coordinates.
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Target offset pulling an element toward the pointer: the pointer's
/// distance from the element center, damped by `strength`. The caller
/// animates between targets; this only produces them.
pub fn compute_offset(
    pointer_x: f32,
    pointer_y: f32,
    bounds: &Bounds,
    strength: f32,
) -> (f32, f32) {
    let center_x = bounds.left + bounds.width / 2.0;
    let center_y = bounds.top + bounds.height / 2.0;
    (
        (pointer_x - center_x) * strength,
        (pointer_y - center_y) * strength,
    )
}

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    pub href: AttrValue,
    #[prop_or(0.5)]
    pub strength: f32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub external: bool,
    pub children: Children,
}

/// Call-to-action button that leans toward the cursor while hovered and
/// springs back on leave (the spring lives in CSS).
#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let node = use_node_ref();
    let offset = use_state(|| (0.0f32, 0.0f32));

    let onmousemove = {
        let node = node.clone();
        let offset = offset.clone();
        let strength = props.strength;
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = node.cast::<HtmlElement>() {
                let rect = element.get_bounding_client_rect();
                let bounds = Bounds {
                    left: rect.left() as f32,
                    top: rect.top() as f32,
                    width: rect.width() as f32,
                    height: rect.height() as f32,
                };
                offset.set(compute_offset(
                    e.client_x() as f32,
                    e.client_y() as f32,
                    &bounds,
                    strength,
                ));
            }
        })
    };

    let onmouseleave = {
        let offset = offset.clone();
        Callback::from(move |_: MouseEvent| offset.set((0.0, 0.0)))
    };

    let (x, y) = *offset;
    let style = format!("transform: translate({x:.1}px, {y:.1}px);");

    html! {
        <div ref={node} class="magnetic-wrap" style={style} {onmousemove} {onmouseleave}>
            <a
                class={classes!("btn", "btn-primary", props.class.clone())}
                href={props.href.clone()}
                target={props.external.then_some("_blank")}
                rel={props.external.then_some("noopener noreferrer")}
            >
                { for props.children.iter() }
                <span class="btn-shine" aria-hidden="true"></span>
            </a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds {
        left: 100.0,
        top: 200.0,
        width: 80.0,
        height: 40.0,
    };

    #[test]
    fn pointer_at_center_produces_no_offset() {
        assert_eq!(compute_offset(140.0, 220.0, &BOUNDS, 0.5), (0.0, 0.0));
    }

    #[test]
    fn offset_scales_linearly_with_strength() {
        let (x1, y1) = compute_offset(180.0, 240.0, &BOUNDS, 0.5);
        let (x2, y2) = compute_offset(180.0, 240.0, &BOUNDS, 1.0);
        assert_eq!((x2, y2), (x1 * 2.0, y1 * 2.0));
    }

    #[test]
    fn offset_points_toward_the_pointer() {
        // pointer left of and above center
        let (x, y) = compute_offset(120.0, 210.0, &BOUNDS, 0.5);
        assert!(x < 0.0);
        assert!(y < 0.0);
    }

    #[test]
    fn zero_strength_pins_the_element() {
        assert_eq!(compute_offset(500.0, 500.0, &BOUNDS, 0.0), (0.0, 0.0));
    }
}
