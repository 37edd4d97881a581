use dioxus::prelude::*;

use crate::app::pages::routes::Route;

/// Landing page with one card per portal.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "p-home",
            h1 { class: "p-home__title", "Talent Hub" }
            p { class: "p-home__subtitle",
                "Hiring and job-seeking under one roof. Pick a portal to get started."
            }

            div { class: "p-home__cards",
                PortalCard {
                    title: "Candidate",
                    description: "Build your profile and stay visible to employers.",
                    to: Route::CandidateDashboard {},
                }
                PortalCard {
                    title: "Employer",
                    description: "Search candidates by skills, experience and availability.",
                    to: Route::EmployerSearch {},
                }
                PortalCard {
                    title: "Master Admin",
                    description: "Manage organizations and employer accounts.",
                    to: Route::MasterAdmin {},
                }
            }
        }
    }
}

#[component]
fn PortalCard(title: &'static str, description: &'static str, to: Route) -> Element {
    rsx! {
        Link { class: "p-home__card", to: to,
            h2 { "{title}" }
            p { "{description}" }
        }
    }
}
