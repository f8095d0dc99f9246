use yew::prelude::*;

use crate::interaction::{Interaction, InteractionState, PointerAction};

#[derive(Properties, PartialEq)]
pub struct MotionProps {
    pub interaction: Interaction,
    #[prop_or("div")]
    pub tag: &'static str,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// Element that reacts to hover and press. Leaving the element drops any
/// gesture, so it always comes back to its stylesheet look.
#[function_component(Motion)]
pub fn motion(props: &MotionProps) -> Html {
    let state = use_state(InteractionState::default);

    let on_pointer = |action: PointerAction| {
        let state = state.clone();
        Callback::from(move |_: PointerEvent| state.set(state.next(action)))
    };

    let style = props.interaction.style(*state);

    html! {
        <@{props.tag}
            class={props.class.clone()}
            href={props.href.clone()}
            aria-label={props.label.clone()}
            style={style}
            onclick={props.onclick.clone()}
            onpointerenter={on_pointer(PointerAction::Enter)}
            onpointerleave={on_pointer(PointerAction::Leave)}
            onpointerdown={on_pointer(PointerAction::Down)}
            onpointerup={on_pointer(PointerAction::Up)}
        >
            { for props.children.iter() }
        </@>
    }
}
