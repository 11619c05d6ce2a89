use dioxus::prelude::*;

use super::layout::Layout;
use super::map::{MapView, ReportMap};
use super::{PageChrome, ReportView};
use crate::templates::render_to_html;

#[allow(non_snake_case)]
#[component]
fn ReportDetailPage(chrome: PageChrome, report: ReportView, map: MapView) -> Element {
    let title = format!("Report {}", report.id);
    let reporter = match (&report.contact, report.is_anonymous) {
        (_, true) => "Anonymous Report".to_string(),
        (Some(contact), false) => format!("Contact: {contact}"),
        (None, false) => "No contact information provided".to_string(),
    };
    rsx! {
        Layout { title: title, active_page: "admin".to_string(), chrome: chrome,
            div { class: "max-w-5xl mx-auto px-4 sm:px-6 py-10",
                a { href: "/admin", class: "text-sm text-blue-600 hover:underline", "← Back to reports" }
                div { class: "flex items-center gap-3 mt-3 mb-6",
                    h1 { class: "text-2xl font-bold", "Report Details: {report.id}" }
                    span { class: "px-2 py-0.5 rounded-full text-xs font-medium {report.status_class}",
                        "{report.status_label}"
                    }
                }

                div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                    div { class: "bg-white border border-gray-200 rounded-lg p-5 space-y-4",
                        div {
                            h3 { class: "text-sm font-semibold text-gray-500 mb-1", "Description" }
                            p { "{report.description}" }
                        }
                        if !report.additional_details.is_empty() {
                            div {
                                h3 { class: "text-sm font-semibold text-gray-500 mb-1", "Additional Details" }
                                p { class: "text-gray-700", "{report.additional_details}" }
                            }
                        }
                        div { class: "grid grid-cols-2 gap-4",
                            div {
                                h3 { class: "text-sm font-semibold text-gray-500 mb-1", "Severity Score" }
                                div { class: "w-full bg-gray-200 rounded-full h-2",
                                    div {
                                        class: "h-2 rounded-full {report.severity_class}",
                                        style: "width: {report.severity_width}%"
                                    }
                                }
                                span { class: "text-xs text-gray-500", "{report.severity_score}%" }
                            }
                            div {
                                h3 { class: "text-sm font-semibold text-gray-500 mb-1", "Timestamp" }
                                p { class: "text-sm", "{report.timestamp_label}" }
                            }
                        }
                        div {
                            h3 { class: "text-sm font-semibold text-gray-500 mb-1", "Reporter Information" }
                            p { class: "text-sm text-gray-700", "{reporter}" }
                        }
                    }

                    div { class: "bg-white border border-gray-200 rounded-lg p-5",
                        h3 { class: "text-sm font-semibold text-gray-500 mb-2", "Location" }
                        p { class: "text-sm mb-3", "{report.address}" }
                        ReportMap { map: map.clone() }
                    }
                }

                div { class: "bg-white border border-gray-200 rounded-lg p-5 mt-6",
                    h3 { class: "text-sm font-semibold text-gray-500 mb-2", "Evidence" }
                    if report.images.is_empty() {
                        p { class: "text-sm text-gray-500", "No images attached to this report" }
                    } else {
                        div { class: "grid grid-cols-2 md:grid-cols-4 gap-3",
                            for image in report.images.iter() {
                                img {
                                    src: "/images/{image}",
                                    alt: "Evidence for {report.id}",
                                    class: "rounded-md border border-gray-200 object-cover h-32 w-full"
                                }
                            }
                        }
                    }
                }

                div { class: "flex flex-wrap gap-2 mt-6",
                    for action in report.actions.iter() {
                        form { method: "POST", action: "/admin/reports/{report.id}/{action.slug}", class: "inline",
                            button {
                                r#type: "submit",
                                disabled: action.disabled,
                                class: "px-4 py-2 rounded text-sm font-medium cursor-pointer disabled:opacity-40 disabled:cursor-not-allowed {action.class}",
                                "{action.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_report_detail(chrome: PageChrome, report: ReportView, tile_url: Option<String>) -> String {
    let map = MapView {
        lat: report.lat,
        lng: report.lng,
        address: report.address.clone(),
        tile_url,
    };
    let mut dom = VirtualDom::new_with_props(
        ReportDetailPage,
        ReportDetailPageProps { chrome, report, map },
    );
    dom.rebuild_in_place();
    render_to_html(&dom)
}
