use yew::prelude::*;

use crate::components::faq_item::FaqItem;
use crate::components::section::{Container, Section};
use crate::content::{Run, FAQS};

fn render_run(run: &Run) -> Html {
    match *run {
        Run::Text(text) => html! { {text} },
        Run::Strong(text) => html! { <strong>{text}</strong> },
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <Section id="faqs" class="dark">
            <Container>
                <h2 class="section-title centered">{"Your Guide To Most Common Questions"}</h2>
                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(i, entry)| html! {
                        <FaqItem id={entry.id} question={entry.question.to_string()} open={i == 0}>
                            <p>{ for entry.answer.iter().map(render_run) }</p>
                        </FaqItem>
                    }) }
                </div>
            </Container>
            <style>
                {r#"
                    .faq-list {
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .faq-item {
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .faq-question {
                        display: flex;
                        width: 100%;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1rem 0;
                        background: none;
                        border: none;
                        color: inherit;
                        font-size: 1.125rem;
                        font-weight: 600;
                        text-align: left;
                        cursor: pointer;
                    }
                    .toggle-icon {
                        margin-left: 1rem;
                        font-size: 1.25rem;
                    }
                    .faq-answer p {
                        margin: 0 0 1.5rem;
                        color: #cbd5e1;
                    }
                "#}
            </style>
        </Section>
    }
}
