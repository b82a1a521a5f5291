use yew::prelude::*;

use crate::components::card::{Card, CardContent};
use crate::components::section::{Container, Section};
use crate::content::{Testimonial, TESTIMONIALS};

const STAR_PATH: &str = "M12 17.27 18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z";

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    testimonial: &'static Testimonial,
    order: usize,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let testimonial = props.testimonial;
    // Stagger the entrance a little per card.
    let style = format!("transition-delay: {}ms;", props.order * 70);

    html! {
        <div class="testimonial" {style}>
            <Card>
                <CardContent class="testimonial-body">
                    <div class="testimonial-author">
                        <div class="avatar">{testimonial.initial().to_string()}</div>
                        <div>
                            <div class="author-name">{testimonial.name}</div>
                            <div class="author-role">{testimonial.role}</div>
                        </div>
                    </div>
                    <div class="stars" aria-label="5 stars">
                        { for (0..5).map(|_| html! {
                            <svg viewBox="0 0 24 24" class="star" fill="currentColor"><path d={STAR_PATH} /></svg>
                        }) }
                    </div>
                    <p class="quote">{format!("“{}”", testimonial.quote)}</p>
                </CardContent>
            </Card>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <Section id="testimonials" class="dark">
            <Container>
                <h2 class="section-title centered">{"Results Our Clients Talk About"}</h2>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(order, testimonial)| html! {
                        <TestimonialCard {testimonial} {order} />
                    }) }
                </div>
            </Container>
            <style>
                {r#"
                    .testimonial-grid {
                        display: grid;
                        gap: 1.5rem;
                        grid-template-columns: repeat(3, 1fr);
                    }
                    .testimonial .card {
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .testimonial .card:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.2);
                    }
                    .testimonial-body {
                        font-size: 0.875rem;
                    }
                    .testimonial-author {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .avatar {
                        display: grid;
                        place-content: center;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        background: linear-gradient(to bottom right, #e2e8f0, #cbd5e1);
                        color: #334155;
                    }
                    .author-name {
                        font-weight: 500;
                        color: #0f172a;
                    }
                    .author-role {
                        font-size: 0.75rem;
                        color: #475569;
                    }
                    .stars {
                        display: flex;
                        gap: 0.25rem;
                        margin-top: 0.75rem;
                        color: #eab308;
                    }
                    .star {
                        width: 1rem;
                        height: 1rem;
                    }
                    .quote {
                        margin-top: 0.75rem;
                        font-style: italic;
                        color: #334155;
                    }
                    @media (max-width: 768px) {
                        .testimonial-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </Section>
    }
}
