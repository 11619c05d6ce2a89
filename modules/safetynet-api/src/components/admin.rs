use dioxus::prelude::*;

use super::layout::Layout;
use super::{AdminListView, PageChrome};
use crate::templates::render_to_html;

fn stat_card(value: String, label: &str, color: &str) -> Element {
    let text_class = format!("text-3xl font-bold text-{color}-700");
    rsx! {
        div { class: "bg-white border border-gray-200 rounded-lg p-4 text-center",
            div { class: "{text_class}", "{value}" }
            div { class: "text-xs text-gray-400 mt-1", "{label}" }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn AdminPage(chrome: PageChrome, list: AdminListView) -> Element {
    let stats = list.stats;
    let filter_key = list.filter_key;
    rsx! {
        Layout { title: "Admin Dashboard".to_string(), active_page: "admin".to_string(), chrome: chrome,
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 py-10",
                h1 { class: "text-3xl font-bold mb-6", "Admin Dashboard" }

                div { class: "grid grid-cols-2 md:grid-cols-4 gap-4 mb-8",
                    { stat_card(stats.total.to_string(), "Total Reports", "blue") }
                    { stat_card(stats.pending.to_string(), "Pending Review", "yellow") }
                    { stat_card(stats.critical.to_string(), "Critical Incidents", "red") }
                    { stat_card(stats.resolved.to_string(), "Resolved", "green") }
                }

                form { method: "GET", action: "/admin", class: "flex gap-2 mb-4",
                    input {
                        r#type: "search", name: "q", value: "{list.search}",
                        placeholder: "Search reports by ID, description, or location...",
                        class: "flex-1 px-3 py-2 border border-gray-300 rounded text-sm"
                    }
                    if filter_key != "all" {
                        input { r#type: "hidden", name: "status", value: "{filter_key}" }
                    }
                    button {
                        r#type: "submit",
                        class: "px-4 py-2 bg-blue-600 text-white rounded text-sm hover:bg-blue-700 cursor-pointer",
                        "Search"
                    }
                }

                div { class: "flex flex-wrap gap-2 mb-4",
                    for tab in list.tabs.iter() {
                        {
                            let class = if tab.active {
                                "px-3 py-1.5 rounded-full text-sm bg-blue-600 text-white"
                            } else {
                                "px-3 py-1.5 rounded-full text-sm bg-gray-100 text-gray-700 hover:bg-gray-200"
                            };
                            let href = tab.href.clone();
                            let label = tab.label;
                            rsx! { a { href: "{href}", class: class, "{label}" } }
                        }
                    }
                }

                if list.reports.is_empty() {
                    div { class: "bg-white border border-gray-200 rounded-lg p-10 text-center text-gray-500",
                        "No reports found matching your search criteria"
                    }
                } else {
                    div { class: "bg-white border border-gray-200 rounded-lg overflow-x-auto",
                        table { class: "w-full text-sm",
                            thead { class: "bg-gray-50 text-left text-gray-500",
                                tr {
                                    th { class: "px-4 py-3", "ID" }
                                    th { class: "px-4 py-3", "Description" }
                                    th { class: "px-4 py-3", "Location" }
                                    th { class: "px-4 py-3", "Severity" }
                                    th { class: "px-4 py-3", "Status" }
                                    th { class: "px-4 py-3", "Reported" }
                                    th { class: "px-4 py-3", "Actions" }
                                }
                            }
                            tbody {
                                for report in list.reports.iter() {
                                    tr { class: "border-t border-gray-100 align-top",
                                        td { class: "px-4 py-3 font-mono",
                                            a { href: "/admin/reports/{report.id}", class: "text-blue-600 hover:underline",
                                                "{report.id}"
                                            }
                                        }
                                        td { class: "px-4 py-3 max-w-xs truncate", "{report.description}" }
                                        td { class: "px-4 py-3", "{report.address}" }
                                        td { class: "px-4 py-3 w-32",
                                            div { class: "w-full bg-gray-200 rounded-full h-2",
                                                div {
                                                    class: "h-2 rounded-full {report.severity_class}",
                                                    style: "width: {report.severity_width}%"
                                                }
                                            }
                                            span { class: "text-xs text-gray-500 mt-1 block", "{report.severity_score}%" }
                                        }
                                        td { class: "px-4 py-3",
                                            span { class: "px-2 py-0.5 rounded-full text-xs font-medium {report.status_class}",
                                                "{report.status_label}"
                                            }
                                        }
                                        td { class: "px-4 py-3 whitespace-nowrap",
                                            div { "{report.timestamp_label}" }
                                            div { class: "text-xs text-gray-500",
                                                if report.is_anonymous { "Anonymous" } else { "Identifiable" }
                                            }
                                        }
                                        td { class: "px-4 py-3",
                                            div { class: "flex flex-wrap gap-1",
                                                for action in report.actions.iter() {
                                                    form {
                                                        method: "POST",
                                                        action: "/admin/reports/{report.id}/{action.slug}",
                                                        class: "inline",
                                                        input { r#type: "hidden", name: "from", value: "list" }
                                                        input { r#type: "hidden", name: "q", value: "{list.search}" }
                                                        input { r#type: "hidden", name: "status", value: "{filter_key}" }
                                                        button {
                                                            r#type: "submit",
                                                            disabled: action.disabled,
                                                            class: "px-2 py-1 rounded text-xs cursor-pointer disabled:opacity-40 disabled:cursor-not-allowed {action.class}",
                                                            "{action.label}"
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_admin(chrome: PageChrome, list: AdminListView) -> String {
    let mut dom = VirtualDom::new_with_props(AdminPage, AdminPageProps { chrome, list });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
