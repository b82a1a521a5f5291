use yew::prelude::*;

use crate::config;
use crate::motion::visibility::use_reveal;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub divider: bool,
    pub children: Children,
}

/// Page section that fades in the first time it scrolls into view.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), config::REVEAL_AMOUNT);

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("page-section", "reveal", revealed.then_some("revealed"), props.class.clone())}
        >
            { for props.children.iter() }
            if props.divider {
                <Divider />
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContainerProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(Container)]
pub fn container(props: &ContainerProps) -> Html {
    html! {
        <div class={classes!("container", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(Divider)]
pub fn divider() -> Html {
    html! { <div class="divider"></div> }
}
