use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpotlightCardProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Card with a radial highlight that follows the pointer while hovered.
#[function_component(SpotlightCard)]
pub fn spotlight_card(props: &SpotlightCardProps) -> Html {
    let node = use_node_ref();
    let spotlight = use_state(|| None::<(f32, f32)>);

    let onmousemove = {
        let node = node.clone();
        let spotlight = spotlight.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = node.cast::<HtmlElement>() {
                let rect = element.get_bounding_client_rect();
                spotlight.set(Some((
                    e.client_x() as f32 - rect.left() as f32,
                    e.client_y() as f32 - rect.top() as f32,
                )));
            }
        })
    };

    let onmouseleave = {
        let spotlight = spotlight.clone();
        Callback::from(move |_: MouseEvent| spotlight.set(None))
    };

    let overlay_style = match *spotlight {
        Some((x, y)) => format!(
            "opacity: 1; background: radial-gradient(600px circle at {x:.0}px {y:.0}px, rgba(129, 118, 242, 0.15), transparent 40%);"
        ),
        None => "opacity: 0;".to_string(),
    };

    html! {
        <div
            ref={node}
            class={classes!("spotlight-card", props.class.clone())}
            {onmousemove}
            {onmouseleave}
        >
            <div class="spotlight-overlay" style={overlay_style} aria-hidden="true"></div>
            <div class="spotlight-content">
                { for props.children.iter() }
            </div>
        </div>
    }
}
