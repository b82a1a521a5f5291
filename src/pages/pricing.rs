use yew::prelude::*;

use crate::components::badge::Badge;
use crate::components::button::{Button, ButtonVariant};
use crate::components::card::{Card, CardContent};
use crate::components::section::{Container, Section};
use crate::config;
use crate::content::{format_price, Package, COMPARISON, PACKAGES};

#[derive(Properties, PartialEq)]
struct PackageCardProps {
    package: &'static Package,
}

#[function_component(PackageCard)]
fn package_card(props: &PackageCardProps) -> Html {
    let package = props.package;

    html! {
        <Card class={classes!("package-card", package.highlighted.then_some("highlighted"))}>
            if let Some((label, tone)) = package.badge {
                <Badge {tone} class="package-badge">{label}</Badge>
            }
            <CardContent>
                <h3>{package.name}</h3>
                if let Some(amount) = package.monthly_price {
                    <div class="price">
                        {format_price(amount)}
                        <span class="period">{" / month"}</span>
                    </div>
                }
                if let Some(blurb) = package.blurb {
                    <p class="package-blurb">{blurb}</p>
                }
                if !package.features.is_empty() {
                    <ul class="check-list">
                        { for package.features.iter().map(|feature| html! {
                            <li><span class="check">{"✓"}</span><span>{*feature}</span></li>
                        }) }
                    </ul>
                }
                <div class="package-actions">
                    <Button href={config::BOOKING_URL}>{package.cta}</Button>
                    if package.monthly_price.is_none() {
                        <Button variant={ButtonVariant::Outline} section="compare">{"Compare Plans"}</Button>
                    }
                </div>
            </CardContent>
        </Card>
    }
}

#[function_component(Packages)]
pub fn packages() -> Html {
    html! {
        <Section id="packages" class="packages">
            <Container>
                <h2 class="section-title centered">{"SEO Packages"}</h2>
                <div class="package-grid">
                    { for PACKAGES.iter().map(|package| html! { <PackageCard {package} /> }) }
                </div>
            </Container>
            <style>
                {r#"
                    .package-grid {
                        display: grid;
                        gap: 2rem;
                        grid-template-columns: repeat(3, 1fr);
                    }
                    .package-card {
                        position: relative;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .package-card:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 12px 28px rgba(2, 6, 23, 0.25);
                    }
                    .package-card.highlighted {
                        border: 2px solid #2563eb;
                    }
                    .package-card.highlighted:hover {
                        box-shadow: 0 12px 28px rgba(30, 64, 175, 0.35);
                    }
                    .package-badge {
                        position: absolute;
                        top: -0.75rem;
                        left: 50%;
                        transform: translateX(-50%);
                    }
                    .package-card h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .price {
                        font-size: 2.25rem;
                        font-weight: 800;
                        letter-spacing: -0.02em;
                    }
                    .price .period {
                        font-size: 1rem;
                        font-weight: 500;
                        color: #64748b;
                    }
                    .package-blurb {
                        color: #334155;
                    }
                    .check-list {
                        list-style: none;
                        padding: 0;
                        margin-top: 1.5rem;
                        font-size: 0.875rem;
                    }
                    .check-list li {
                        display: flex;
                        gap: 0.75rem;
                        margin-bottom: 0.75rem;
                        line-height: 1.6;
                    }
                    .check {
                        color: #2563eb;
                        font-weight: 700;
                    }
                    .package-actions {
                        display: flex;
                        gap: 0.75rem;
                        margin-top: 1.5rem;
                    }
                    @media (max-width: 768px) {
                        .package-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </Section>
    }
}

#[function_component(ComparePlans)]
pub fn compare_plans() -> Html {
    html! {
        <Section id="compare" class="compare">
            <Container>
                <h2 class="section-title centered">{"Compare Plans"}</h2>
                <table class="compare-table">
                    <thead>
                        <tr>
                            <th>{"Feature"}</th>
                            { for PACKAGES.iter().map(|package| html! { <th>{package.name}</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        { for COMPARISON.iter().enumerate().map(|(i, row)| html! {
                            <tr class={classes!((i % 2 == 1).then_some("striped"))}>
                                <td>{row.feature}</td>
                                { for row.cells.iter().map(|cell| html! { <td>{*cell}</td> }) }
                            </tr>
                        }) }
                    </tbody>
                </table>
            </Container>
            <style>
                {r#"
                    .compare-table {
                        width: 100%;
                        text-align: left;
                        border-collapse: collapse;
                        border-radius: 0.75rem;
                        overflow: hidden;
                    }
                    .compare-table thead {
                        background: rgba(241, 245, 249, 0.7);
                        border-bottom: 1px solid #e2e8f0;
                        color: #0f172a;
                    }
                    .compare-table th,
                    .compare-table td {
                        padding: 1rem;
                    }
                    .compare-table tr.striped {
                        background: rgba(0, 0, 0, 0.02);
                    }
                "#}
            </style>
        </Section>
    }
}
