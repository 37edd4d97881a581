//! Application routes
//!
//! One router over the three portals. The employer search page is the main
//! surface; candidate and admin pages are thinner.

use dioxus::document;
use dioxus::prelude::*;

use crate::app::layouts::AppNavbar;
use crate::app::pages::{
    CandidateDashboard, CandidateProfile, EmployerSearch, Home, MasterAdmin,
};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    // Candidate portal
    #[route("/candidate")]
    CandidateDashboard {},

    // Employer portal
    #[route("/employer/search")]
    EmployerSearch {},
    #[route("/employer/candidates/:candidate_id")]
    CandidateProfile { candidate_id: u64 },

    // Master admin portal
    #[route("/master")]
    MasterAdmin {},
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Talent Hub app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    const MAIN_CSS: Asset = asset!("/assets/main.css");

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "c-layout",
            AppNavbar {}
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}
