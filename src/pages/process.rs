use yew::prelude::*;

use crate::components::card::{Card, CardContent};
use crate::components::section::{Container, Section};
use crate::config;
use crate::content::PROCESS_STEPS;
use crate::motion::step_tracker::use_step_tracker;

/// Centre-line timeline with a dot that follows the step currently in view.
#[function_component(Timeline)]
fn timeline() -> Html {
    let container = use_node_ref();
    let tracker = use_step_tracker(container.clone(), PROCESS_STEPS.len(), config::STEP_VISIBILITY_THRESHOLD);

    let dot_style = format!("top: {}px;", tracker.indicator_offset);

    html! {
        <div class="timeline" ref={container}>
            <div class="timeline-line"></div>
            <div class="timeline-dot" style={dot_style}></div>
            { for PROCESS_STEPS.iter().enumerate().map(|(i, step)| {
                let active = tracker.active_index == i;
                html! {
                    <div
                        class={classes!("timeline-row", if i % 2 == 0 { "row-left" } else { "row-right" })}
                        data-index={i.to_string()}
                    >
                        <div class="timeline-slot">
                            <Card class={classes!("timeline-card", active.then_some("active"))}>
                                <CardContent class="flush">
                                    <h3>{step.title}</h3>
                                    <p>{step.body}</p>
                                </CardContent>
                            </Card>
                        </div>
                        <div class="timeline-slot"></div>
                    </div>
                }
            }) }
        </div>
    }
}

#[function_component(ProcessTimeline)]
pub fn process_timeline() -> Html {
    html! {
        <Section id="process" class="process">
            <Container>
                <h2 class="section-title centered light">{"Our Process"}</h2>
                <Timeline />
            </Container>
            <style>
                {r#"
                    .process {
                        background: #0b1224;
                    }
                    .timeline {
                        position: relative;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .timeline-line {
                        position: absolute;
                        left: 50%;
                        top: 0;
                        height: 100%;
                        width: 4px;
                        transform: translateX(-50%);
                        background: #334155;
                    }
                    .timeline-dot {
                        position: absolute;
                        left: 50%;
                        z-index: 20;
                        width: 1.5rem;
                        height: 1.5rem;
                        transform: translate(-50%, -50%);
                        border-radius: 9999px;
                        border: 4px solid #0b1224;
                        background: #3b82f6;
                        box-shadow: 0 0 0 6px rgba(30, 64, 175, 0.15);
                        transition: top 400ms ease-in-out;
                        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }
                    .timeline-row {
                        display: flex;
                        width: 100%;
                        align-items: center;
                        justify-content: space-between;
                        margin-bottom: 6rem;
                    }
                    .timeline-row.row-right {
                        flex-direction: row-reverse;
                    }
                    .timeline-slot {
                        width: 41.666%;
                    }
                    .timeline-card {
                        padding: 1.5rem;
                        background: #1e293b;
                        border-color: #334155;
                        color: #cbd5e1;
                        transition: all 0.3s ease;
                    }
                    .timeline-card.active {
                        background: #2563eb;
                        border-color: #60a5fa;
                        color: #ffffff;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.25);
                    }
                    .timeline-card h3 {
                        margin: 0 0 0.5rem;
                        font-size: 1.125rem;
                        font-weight: 600;
                    }
                    .timeline-card p {
                        margin: 0;
                        font-size: 0.875rem;
                    }
                    @keyframes pulse {
                        50% { opacity: 0.6; }
                    }
                    @media (max-width: 768px) {
                        .timeline-dot {
                            display: none;
                        }
                        .timeline-slot {
                            width: 100%;
                        }
                        .timeline-slot:empty {
                            display: none;
                        }
                    }
                "#}
            </style>
        </Section>
    }
}
