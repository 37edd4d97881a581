use dioxus::prelude::*;

use crate::app::pages::routes::Route;

/// Global navbar with the portal links.
#[component]
pub fn AppNavbar() -> Element {
    rsx! {
        nav { class: "c-navbar",
            Link {
                to: Route::Home {},
                class: "c-navbar__logo",
                "Talent Hub"
            }

            div { class: "c-navbar__links",
                Link {
                    to: Route::CandidateDashboard {},
                    class: "c-navbar__link",
                    "My Profile"
                }
                Link {
                    to: Route::EmployerSearch {},
                    class: "c-navbar__link",
                    "Find Candidates"
                }
                Link {
                    to: Route::MasterAdmin {},
                    class: "c-navbar__link",
                    "Admin"
                }
            }
        }
    }
}
