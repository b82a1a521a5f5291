use log::warn;
use yew::prelude::*;

use crate::motion::smooth_scroll::scroll_to_section;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

pub fn button_classes(variant: ButtonVariant, size: ButtonSize) -> Classes {
    let variant = match variant {
        ButtonVariant::Primary => "btn-primary",
        ButtonVariant::Outline => "btn-outline",
    };
    let size = match size {
        ButtonSize::Sm => "btn-sm",
        ButtonSize::Md => "btn-md",
        ButtonSize::Lg => "btn-lg",
    };
    classes!("btn", variant, size)
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub class: Classes,
    /// Renders a link to this URL instead of a `<button>`.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    /// Renders an in-page link that smooth-scrolls to the section with this id.
    #[prop_or_default]
    pub section: Option<AttrValue>,
    #[prop_or_default]
    pub new_tab: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = classes!(button_classes(props.variant, props.size), props.class.clone());

    if let Some(section) = props.section.clone() {
        let href = format!("#{}", section);
        let onclick = {
            let onclick = props.onclick.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                if let Err(err) = scroll_to_section(&section) {
                    warn!("anchor navigation failed: {}", err);
                }
                onclick.emit(e);
            })
        };
        return html! {
            <a {class} {href} {onclick}>{ for props.children.iter() }</a>
        };
    }

    if let Some(href) = props.href.clone() {
        let (target, rel) = if props.new_tab {
            (Some("_blank"), Some("noreferrer"))
        } else {
            (None, None)
        };
        return html! {
            <a {class} {href} {target} {rel} onclick={props.onclick.clone()}>
                { for props.children.iter() }
            </a>
        };
    }

    html! {
        <button {class} type="button" onclick={props.onclick.clone()}>
            { for props.children.iter() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_reflect_variant_and_size() {
        let classes = button_classes(ButtonVariant::Outline, ButtonSize::Lg).to_string();
        assert_eq!(classes, "btn btn-outline btn-lg");
        let classes = button_classes(ButtonVariant::default(), ButtonSize::default()).to_string();
        assert_eq!(classes, "btn btn-primary btn-md");
        let classes = button_classes(ButtonVariant::Outline, ButtonSize::Sm).to_string();
        assert_eq!(classes, "btn btn-outline btn-sm");
    }
}
