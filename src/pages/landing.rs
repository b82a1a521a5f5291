use chrono::{Datelike, Utc};
use log::debug;
use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::roi_calculator::RoiOverlay;
use crate::components::section::{Container, Section};
use crate::config;
use crate::content::MILESTONES;
use crate::motion::smooth_scroll::use_smooth_scroll;
use crate::motion::typewriter::{longest_phrase_chars, split_accent, use_typewriter, Phase, TypewriterConfig};
use crate::pages::faq::Faq;
use crate::pages::pricing::{ComparePlans, Packages};
use crate::pages::process::ProcessTimeline;
use crate::pages::testimonials::Testimonials;

#[function_component(HeroHeading)]
fn hero_heading() -> Html {
    let frame = use_typewriter(config::HERO_PHRASES, TypewriterConfig::default());
    let min_width = format!("min-width: {}ch;", longest_phrase_chars(config::HERO_PHRASES));

    let accented = frame.phrase_index == config::HERO_PHRASES.len() - 1 && frame.phase != Phase::Erasing;
    let typed = if accented {
        let (accent, rest) = split_accent(&frame.text, config::HERO_ACCENT);
        html! { <><span class="accent">{accent.to_string()}</span>{rest.to_string()}</> }
    } else {
        html! { {frame.text.clone()} }
    };

    html! {
        <h1 class="hero-title">
            <span class="typed" style={min_width}>{typed}</span>
            <span class="caret" aria-hidden="true"></span>
        </h1>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <Section id="hero" class="hero">
            <div class="hero-background" aria-hidden="true"></div>
            <Container class="centered">
                <HeroHeading />
                <p class="hero-subtitle">
                    {"Transparent pricing, proven results, no long-term contracts."}
                </p>
                <div class="cta-group">
                    <Button size={ButtonSize::Lg} href={config::BOOKING_URL}>{"Book My Free SEO Call"}</Button>
                    <Button size={ButtonSize::Lg} variant={ButtonVariant::Outline} section="packages">
                        {"See Packages"}
                    </Button>
                </div>
            </Container>
        </Section>
    }
}

#[function_component(ProblemSolution)]
fn problem_solution() -> Html {
    html! {
        <Section id="problem-solution" class="light-fade">
            <Container>
                <h2 class="section-title">{"The Problem & Our Solution"}</h2>
                <p class="lead">
                    {"Competitors outrank you. Ads get pricier every month. Without SEO, you’re invisible to buyers already searching for what you sell. We turn invisibility into discoverability with a compound-growth SEO system: fix what’s broken, publish what earns, and earn links that last."}
                </p>
            </Container>
        </Section>
    }
}

#[function_component(Journey)]
fn journey() -> Html {
    html! {
        <Section id="journey" class="dark">
            <Container>
                <h2 class="section-title centered">{"What to Expect"}</h2>
                <div class="milestone-grid">
                    { for MILESTONES.iter().enumerate().map(|(i, milestone)| html! {
                        <div class="milestone" style={format!("transition-delay: {}ms;", i * 80)}>
                            <div class={classes!("milestone-icon", milestone.accent)}>{milestone.icon}</div>
                            <h3>{milestone.title}</h3>
                            <p>{milestone.text}</p>
                        </div>
                    }) }
                </div>
            </Container>
        </Section>
    }
}

#[function_component(Costs)]
fn costs() -> Html {
    html! {
        <Section id="costs" class="muted">
            <Container class="two-column">
                <div>
                    <h2 class="section-title">{"Why Our Pricing Works"}</h2>
                    <p class="lead">
                        {"Our packages are built in line with U.S. benchmarks (Ahrefs, Backlinko) — competitive, transparent, and ROI-focused."}
                    </p>
                </div>
                <div class="benchmark">
                    <p class="benchmark-range">{"$1,000–$7,500/mo"}</p>
                    <p class="benchmark-note">{"Average U.S. SEO pricing benchmark"}</p>
                </div>
            </Container>
        </Section>
    }
}

#[function_component(RoiSection)]
fn roi_section() -> Html {
    let show_roi = use_state(|| false);

    let open = {
        let show_roi = show_roi.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("ROI calculator opened");
            show_roi.set(true);
        })
    };
    let close = {
        let show_roi = show_roi.clone();
        Callback::from(move |_: ()| {
            debug!("ROI calculator closed");
            show_roi.set(false);
        })
    };

    html! {
        <Section id="roi" class="dark">
            <Container class="centered">
                <h2 class="section-title">{"See Your ROI"}</h2>
                <p class="lead">{"Estimate how SEO pays off vs paid ads."}</p>
                <Button variant={ButtonVariant::Outline} onclick={open}>{"Launch ROI Calculator"}</Button>
                if *show_roi {
                    <RoiOverlay on_close={close} />
                }
            </Container>
        </Section>
    }
}

#[function_component(FinalCta)]
fn final_cta() -> Html {
    html! {
        <Section id="cta" class="hero final" divider={false}>
            <div class="hero-background soft" aria-hidden="true"></div>
            <Container class="centered">
                <h2 class="section-title">{"Ready to grow smarter with SEO?"}</h2>
                <p class="hero-subtitle">{"Transparent pricing. No contracts. Real traction."}</p>
                <div class="cta-group">
                    <Button size={ButtonSize::Lg} href={config::BOOKING_URL} new_tab=true>{"Book My Free SEO Call"}</Button>
                    <Button size={ButtonSize::Lg} variant={ButtonVariant::Outline} section="packages">
                        {"See Packages"}
                    </Button>
                </div>
            </Container>
        </Section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <>
            <div class="sticky-cta">
                <Button class="full-width" href={config::BOOKING_URL}>{"Book My Free SEO Call"}</Button>
            </div>
            <footer class="site-footer">
                <Container class="footer-row">
                    <span class="muted-text">{format!("© {} {}", year, config::STUDIO_NAME)}</span>
                    <div class="footer-links">
                        <a href="#packages">{"Packages"}</a>
                        <a href="#compare">{"Compare"}</a>
                        <a href="#faqs">{"FAQs"}</a>
                    </div>
                </Container>
            </footer>
        </>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_smooth_scroll();

    html! {
        <div class="landing-page">
            <Hero />
            <ProblemSolution />
            <Packages />
            <ComparePlans />
            <Journey />
            <Costs />
            <RoiSection />
            <ProcessTimeline />
            <Testimonials />
            <Faq />
            <FinalCta />
            <Footer />
            <style>
                {r#"
                    * {
                        box-sizing: border-box;
                    }
                    body {
                        margin: 0;
                        min-height: 100vh;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #0f172a;
                        background: #ffffff;
                    }
                    .container {
                        width: 100%;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .container.centered {
                        text-align: center;
                    }
                    .container.two-column {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                        align-items: center;
                    }
                    .page-section {
                        position: relative;
                        padding: 6rem 0;
                        scroll-margin-top: 8rem;
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(16px);
                        transition: opacity 0.5s ease, transform 0.5s ease;
                    }
                    .reveal.revealed {
                        opacity: 1;
                        transform: none;
                    }
                    .divider {
                        max-width: 72rem;
                        height: 1px;
                        margin: 4rem auto 0;
                        background: linear-gradient(to right, transparent, rgba(203, 213, 225, 0.6), transparent);
                    }
                    .section-title {
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin: 0 0 2rem;
                    }
                    .section-title.centered {
                        text-align: center;
                    }
                    .lead {
                        max-width: 48rem;
                        color: #334155;
                    }
                    .centered .lead {
                        margin: 0 auto 1.5rem;
                    }
                    .dark {
                        background: #0f172a;
                        color: #ffffff;
                    }
                    .dark .lead,
                    .process .section-title {
                        color: #cbd5e1;
                    }
                    .muted {
                        background: #f8fafc;
                    }
                    .light-fade {
                        background: linear-gradient(to bottom, #ffffff, rgba(255, 255, 255, 0.6));
                    }
                    .packages {
                        background: rgba(248, 250, 252, 0.7);
                    }

                    .btn {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 1rem;
                        font-weight: 500;
                        text-decoration: none;
                        cursor: pointer;
                        transition: background-color 0.2s ease, transform 0.1s ease;
                    }
                    .btn:active {
                        transform: scale(0.98);
                    }
                    .btn-primary {
                        background: #1b2a4a;
                        color: #ffffff;
                        border: 1px solid #1b2a4a;
                    }
                    .btn-primary:hover {
                        background: #16233d;
                    }
                    .btn-outline {
                        background: transparent;
                        color: #1b2a4a;
                        border: 1px solid #1b2a4a;
                    }
                    .btn-outline:hover {
                        background: #e9f1ff;
                    }
                    .dark .btn-outline,
                    .hero .btn-outline {
                        color: #ffffff;
                        border-color: #ffffff;
                    }
                    .dark .btn-outline:hover,
                    .hero .btn-outline:hover {
                        color: #1b2a4a;
                    }
                    .btn-sm { padding: 0.5rem 0.75rem; font-size: 0.875rem; }
                    .btn-md { padding: 0.625rem 1rem; font-size: 0.875rem; }
                    .btn-lg { padding: 0.75rem 1.25rem; font-size: 1rem; }
                    .full-width { width: 100%; }

                    .badge {
                        display: inline-flex;
                        align-items: center;
                        border-radius: 9999px;
                        padding: 0.25rem 0.75rem;
                        font-size: 0.75rem;
                        font-weight: 600;
                        color: #ffffff;
                    }
                    .badge-green {
                        background: #16a34a;
                        box-shadow: 0 0 18px rgba(22, 163, 74, 0.45);
                    }
                    .badge-blue {
                        background: #2563eb;
                        box-shadow: 0 0 18px rgba(37, 99, 235, 0.45);
                    }

                    .card {
                        border-radius: 1rem;
                        background: #ffffff;
                        color: #0f172a;
                        border: 1px solid rgba(226, 232, 240, 0.6);
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                    }
                    .card-content {
                        padding: 1.5rem;
                    }
                    .card-content.flush {
                        padding: 0;
                    }

                    .hero {
                        color: #ffffff;
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        z-index: -1;
                        background:
                            radial-gradient(90% 70% at 50% 10%, rgba(59, 130, 246, 0.25), transparent 60%),
                            linear-gradient(to bottom, #0b1224, rgba(11, 18, 36, 0.92));
                    }
                    .hero-background.soft {
                        background:
                            radial-gradient(90% 70% at 50% 10%, rgba(59, 130, 246, 0.18), transparent 60%),
                            linear-gradient(to bottom, #0b1224, rgba(11, 18, 36, 0.96));
                    }
                    .hero-title {
                        font-size: 3.75rem;
                        font-weight: 700;
                        letter-spacing: -0.025em;
                        margin: 0 0 1rem;
                    }
                    .typed {
                        display: inline-block;
                        vertical-align: top;
                        white-space: nowrap;
                    }
                    .accent {
                        color: #4da3ff;
                    }
                    .caret {
                        display: inline-block;
                        width: 2px;
                        height: 1.2em;
                        margin-left: 0.25rem;
                        vertical-align: middle;
                        background: rgba(255, 255, 255, 0.9);
                        animation: blink 1s step-end infinite;
                    }
                    @keyframes blink {
                        50% { opacity: 0; }
                    }
                    .hero-subtitle {
                        margin-bottom: 2rem;
                        font-size: 1.25rem;
                        color: rgba(226, 232, 240, 0.9);
                    }
                    .cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                    }

                    .milestone-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }
                    .milestone {
                        padding: 1.5rem;
                        border-radius: 1rem;
                        text-align: center;
                        background: rgba(30, 41, 59, 0.5);
                        box-shadow: inset 0 0 0 1px rgba(255, 255, 255, 0.1);
                        transition: background-color 0.2s ease;
                    }
                    .milestone:hover {
                        background: #1e293b;
                    }
                    .milestone-icon {
                        font-size: 2.5rem;
                        margin-bottom: 0.75rem;
                    }
                    .milestone-icon.blue { text-shadow: 0 0 18px rgba(59, 130, 246, 0.6); }
                    .milestone-icon.green { text-shadow: 0 0 18px rgba(34, 197, 94, 0.6); }
                    .milestone-icon.yellow { text-shadow: 0 0 18px rgba(234, 179, 8, 0.6); }
                    .milestone-icon.red { text-shadow: 0 0 18px rgba(239, 68, 68, 0.6); }
                    .milestone h3 {
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }
                    .milestone p {
                        font-size: 0.875rem;
                        color: #cbd5e1;
                    }

                    .benchmark {
                        text-align: center;
                        background: #ffffff;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                    }
                    .benchmark-range {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #2563eb;
                        margin: 0;
                    }
                    .benchmark-note {
                        margin-top: 0.5rem;
                        font-size: 0.875rem;
                        color: #475569;
                    }

                    .roi-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.7);
                    }
                    .roi-dialog {
                        width: 100%;
                        max-width: 28rem;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: #ffffff;
                        color: #0f172a;
                        text-align: left;
                    }
                    .roi-dialog h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin: 0 0 1rem;
                    }
                    .roi-label {
                        display: block;
                        margin-bottom: 0.5rem;
                        font-size: 0.875rem;
                    }
                    .roi-input {
                        width: 100%;
                        margin-bottom: 1rem;
                        padding: 0.5rem;
                        border: 1px solid #cbd5e1;
                        border-radius: 0.25rem;
                    }
                    .roi-result {
                        margin: 0.5rem 0 0;
                        color: #1e293b;
                    }
                    .roi-result.last {
                        margin-bottom: 1rem;
                    }
                    .roi-actions {
                        display: flex;
                        justify-content: flex-end;
                        gap: 0.75rem;
                    }
                    .roi-actions .btn-outline {
                        color: #1b2a4a;
                        border-color: #1b2a4a;
                    }

                    .sticky-cta {
                        display: none;
                    }
                    .site-footer {
                        padding: 2rem 0;
                        font-size: 0.875rem;
                        border-top: 1px solid rgba(0, 0, 0, 0.1);
                    }
                    .footer-row {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                    }
                    .muted-text,
                    .footer-links a {
                        color: #64748b;
                    }
                    .footer-links {
                        display: flex;
                        gap: 1rem;
                    }
                    .footer-links a {
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .footer-links a:hover {
                        color: #1b2a4a;
                    }

                    @media (max-width: 768px) {
                        .hero-title {
                            font-size: 2.25rem;
                        }
                        .container.two-column,
                        .milestone-grid {
                            grid-template-columns: 1fr;
                        }
                        .footer-row {
                            flex-direction: column;
                        }
                        .sticky-cta {
                            display: block;
                            position: fixed;
                            left: 0;
                            right: 0;
                            bottom: 0;
                            z-index: 40;
                            padding: 0.75rem 1rem;
                            border-top: 1px solid rgba(0, 0, 0, 0.1);
                            background: rgba(255, 255, 255, 0.9);
                            backdrop-filter: blur(8px);
                        }
                    }
                "#}
            </style>
        </div>
    }
}
