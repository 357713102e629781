//! Plan selection screen, shown after sign-up. Rendered in the wide shell.

use leptos::prelude::*;

#[cfg(test)]
#[path = "plans_test.rs"]
mod plans_test;

/// A plan tile on the selection screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanOption {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub blurb: &'static str,
}

pub const PLAN_OPTIONS: [PlanOption; 3] = [
    PlanOption { id: "starter", name: "Starter", price: "Free", blurb: "For trying things out." },
    PlanOption { id: "team", name: "Team", price: "$12 / seat", blurb: "For small teams." },
    PlanOption { id: "business", name: "Business", price: "Contact us", blurb: "For larger organizations." },
];

#[component]
pub fn PlansPage() -> impl IntoView {
    view! {
        <div class="plans">
            <h1 class="plans__title">"Choose a plan"</h1>
            <div class="plans__grid">
                {PLAN_OPTIONS
                    .iter()
                    .map(|plan| {
                        view! {
                            <form class="plan-card">
                                <input type="hidden" name="plan" value=plan.id/>
                                <h2 class="plan-card__name">{plan.name}</h2>
                                <p class="plan-card__price">{plan.price}</p>
                                <p class="plan-card__blurb">{plan.blurb}</p>
                                <button class="auth-button" type="submit">"Select"</button>
                            </form>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
