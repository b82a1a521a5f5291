use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::roi::{format_usd, group_thousands, RoiInputs};

#[derive(Properties, PartialEq)]
pub struct RoiOverlayProps {
    pub on_close: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct NumberFieldProps {
    id: AttrValue,
    label: &'static str,
    value: String,
    on_input: Callback<String>,
}

#[function_component(NumberField)]
fn number_field(props: &NumberFieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    html! {
        <>
            <label class="roi-label" for={props.id.clone()}>{props.label}</label>
            <input
                id={props.id.clone()}
                class="roi-input"
                type="number"
                min="0"
                value={props.value.clone()}
                {oninput}
            />
        </>
    }
}

fn field_setter(field: &UseStateHandle<String>) -> Callback<String> {
    let field = field.clone();
    Callback::from(move |value: String| field.set(value))
}

/// Modal ROI estimator. The fields keep whatever the visitor typed; the
/// estimate is computed from the coerced numbers on every render.
#[function_component(RoiOverlay)]
pub fn roi_overlay(props: &RoiOverlayProps) -> Html {
    let defaults = RoiInputs::default();
    let visitors = use_state(|| defaults.visitors.to_string());
    let conversion = use_state(|| defaults.conversion_rate_percent.to_string());
    let value = use_state(|| defaults.value_per_lead.to_string());

    let estimate = RoiInputs::from_fields(&visitors, &conversion, &value).estimate();

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="roi-backdrop" role="dialog" aria-modal="true" aria-labelledby="roi-title">
            <div class="roi-dialog">
                <h3 id="roi-title">{"ROI Calculator"}</h3>
                <NumberField
                    id="roi-visitors"
                    label="Monthly Visitors"
                    value={(*visitors).clone()}
                    on_input={field_setter(&visitors)}
                />
                <NumberField
                    id="roi-conversion"
                    label="Conversion Rate (%)"
                    value={(*conversion).clone()}
                    on_input={field_setter(&conversion)}
                />
                <NumberField
                    id="roi-value"
                    label="Value per Lead ($)"
                    value={(*value).clone()}
                    on_input={field_setter(&value)}
                />
                <p class="roi-result">{format!("Estimated Leads: {}", group_thousands(estimate.leads))}</p>
                <p class="roi-result last">{format!("Estimated Revenue: {}", format_usd(estimate.revenue))}</p>
                <div class="roi-actions">
                    <Button variant={ButtonVariant::Outline} size={ButtonSize::Sm} onclick={close}>{"Close"}</Button>
                </div>
            </div>
        </div>
    }
}
