//! Master admin portal
//!
//! Organization list with a create form, plus a read-only table of employer
//! accounts across all organizations.

use std::collections::HashMap;

use dioxus::prelude::*;

use crate::app::components::{EmptyState, ErrorMessage, LoadingText, ToastHost};
use crate::search::format_date;
use crate::server_fns::{create_organization, get_employers, get_organizations};
use crate::shared::hooks::use_toast;

#[component]
pub fn MasterAdmin() -> Element {
    let mut toast = use_toast();
    let mut org_name = use_signal(String::new);
    let mut org_email = use_signal(String::new);

    let mut organizations = use_server_future(|| async { get_organizations().await })?;
    let employers = use_server_future(|| async { get_employers().await })?;

    let on_create = move |evt: FormEvent| {
        evt.prevent_default();
        let name = org_name.read().clone();
        let email = org_email.read().clone();
        spawn(async move {
            match create_organization(name, email).await {
                Ok(org) => {
                    toast.success(format!("Organization \"{}\" created.", org.name));
                    org_name.set(String::new());
                    org_email.set(String::new());
                    organizations.restart();
                }
                Err(e) => toast.error(e.to_string()),
            }
        });
    };

    // Resolve organization names for the employers table from the same fetch
    let org_names: HashMap<u64, String> = match &*organizations.read() {
        Some(Ok(orgs)) => orgs.iter().map(|org| (org.id, org.name.clone())).collect(),
        _ => HashMap::new(),
    };

    let organizations_table = match &*organizations.read() {
        None => rsx! { LoadingText { message: "Loading organizations..." } },
        Some(Ok(orgs)) if orgs.is_empty() => rsx! {
            EmptyState {
                icon: "🏢",
                title: "No organizations yet",
                description: "Create the first client organization above.",
            }
        },
        Some(Ok(orgs)) => rsx! {
            table { class: "p-admin__table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Contact" }
                        th { "Created" }
                    }
                }
                tbody {
                    for org in orgs.iter() {
                        tr { key: "{org.id}",
                            td { "{org.name}" }
                            td { "{org.contact_email}" }
                            td { {format_date(&org.created_at)} }
                        }
                    }
                }
            }
        },
        Some(Err(e)) => rsx! { ErrorMessage { message: e.to_string() } },
    };

    let employers_table = match &*employers.read() {
        None => rsx! { LoadingText { message: "Loading employers..." } },
        Some(Ok(accounts)) if accounts.is_empty() => rsx! {
            EmptyState {
                icon: "👥",
                title: "No employer accounts",
                description: "Employer accounts appear here once organizations add recruiters.",
            }
        },
        Some(Ok(accounts)) => rsx! {
            table { class: "p-admin__table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Organization" }
                        th { "Status" }
                    }
                }
                tbody {
                    for account in accounts.iter() {
                        tr { key: "{account.id}",
                            td { "{account.full_name}" }
                            td { "{account.email}" }
                            td {
                                {org_names
                                    .get(&account.organization_id)
                                    .cloned()
                                    .unwrap_or_else(|| format!("#{}", account.organization_id))}
                            }
                            td { if account.is_active { "Active" } else { "Disabled" } }
                        }
                    }
                }
            }
        },
        Some(Err(e)) => rsx! { ErrorMessage { message: e.to_string() } },
    };

    rsx! {
        div { class: "p-admin",
            ToastHost { current: toast.current }
            h1 { class: "p-admin__title", "Master Admin" }

            section { class: "p-admin__section",
                h2 { "Organizations" }

                form { class: "p-admin__form", onsubmit: on_create,
                    input {
                        r#type: "text",
                        placeholder: "Organization name",
                        value: "{org_name}",
                        oninput: move |evt| org_name.set(evt.value()),
                    }
                    input {
                        r#type: "email",
                        placeholder: "Contact email",
                        value: "{org_email}",
                        oninput: move |evt| org_email.set(evt.value()),
                    }
                    button { r#type: "submit", class: "c-button c-button--primary", "Create" }
                }

                {organizations_table}
            }

            section { class: "p-admin__section",
                h2 { "Employer accounts" }
                {employers_table}
            }
        }
    }
}
