use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::animation::{AnimationDescriptor, Stagger, Visibility};
use crate::config;
use crate::hooks::viewport::{use_in_view, InViewOptions};
use crate::layout::{SectionKind, Trigger};

/// Props every page section receives from the page.
#[derive(Properties, PartialEq, Clone)]
pub struct SectionProps {
    pub visibility: Visibility,
    pub on_reveal: Callback<SectionKind>,
}

/// What a section shares with the animated elements inside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealContext {
    pub visibility: Visibility,
    pub stagger: Stagger,
}

#[derive(Properties, PartialEq)]
pub struct SectionFrameProps {
    pub kind: SectionKind,
    pub visibility: Visibility,
    pub on_reveal: Callback<SectionKind>,
    #[prop_or("section")]
    pub tag: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Container for one page section. Wires the section's trigger to `on_reveal`
/// and hands the current visibility down to its `RevealItem`s.
#[function_component(SectionFrame)]
pub fn section_frame(props: &SectionFrameProps) -> Html {
    let node = use_node_ref();
    let kind = props.kind;
    let trigger = kind.trigger();

    let in_view = use_in_view(node.clone(), InViewOptions::default());

    {
        let on_reveal = props.on_reveal.clone();
        use_effect_with_deps(
            move |_| {
                let timer = (trigger == Trigger::Mount).then(|| {
                    Timeout::new(config::MOUNT_REVEAL_DELAY_MS, move || on_reveal.emit(kind))
                });
                // dropping the handle cancels a pending reveal
                move || drop(timer)
            },
            (),
        );
    }

    {
        let on_reveal = props.on_reveal.clone();
        use_effect_with_deps(
            move |in_view| {
                if *in_view && trigger == Trigger::Viewport {
                    on_reveal.emit(kind);
                }
                || ()
            },
            in_view,
        );
    }

    let context = RevealContext { visibility: props.visibility, stagger: Stagger::NONE };

    html! {
        <@{props.tag}
            ref={node}
            id={kind.anchor()}
            class={classes!(kind.name(), props.class.clone())}
            style={props.style.clone()}
        >
            <ContextProvider<RevealContext> context={context}>
                { for props.children.iter() }
            </ContextProvider<RevealContext>>
        </@>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealGroupProps {
    /// Entrance of the group container itself.
    #[prop_or_default]
    pub descriptor: Option<AnimationDescriptor>,
    #[prop_or(Stagger::CHILDREN)]
    pub stagger: Stagger,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Staggers the `RevealItem`s below it by their index.
#[function_component(RevealGroup)]
pub fn reveal_group(props: &RevealGroupProps) -> Html {
    let parent = use_context::<RevealContext>().unwrap_or(RevealContext {
        visibility: Visibility::Visible,
        stagger: Stagger::NONE,
    });
    let style = props
        .descriptor
        .map(|descriptor| descriptor.style(parent.visibility, 0));
    let context = RevealContext { stagger: props.stagger, ..parent };

    html! {
        <div class={props.class.clone()} style={style}>
            <ContextProvider<RevealContext> context={context}>
                { for props.children.iter() }
            </ContextProvider<RevealContext>>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealItemProps {
    pub descriptor: AnimationDescriptor,
    #[prop_or_default]
    pub index: usize,
    #[prop_or("div")]
    pub tag: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealItem)]
pub fn reveal_item(props: &RevealItemProps) -> Html {
    let context = use_context::<RevealContext>().unwrap_or(RevealContext {
        visibility: Visibility::Visible,
        stagger: Stagger::NONE,
    });
    let style = props
        .descriptor
        .style(context.visibility, context.stagger.delay_for(props.index));

    html! {
        <@{props.tag} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </@>
    }
}
