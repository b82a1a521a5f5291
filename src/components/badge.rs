use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Green,
    Blue,
}

impl BadgeTone {
    fn class(self) -> &'static str {
        match self {
            BadgeTone::Green => "badge-green",
            BadgeTone::Blue => "badge-blue",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub tone: BadgeTone,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={classes!("badge", props.tone.class(), props.class.clone())}>
            { for props.children.iter() }
        </span>
    }
}
