use dioxus::prelude::*;

use super::layout::Layout;
use super::PageChrome;
use crate::templates::render_to_html;

/// Values echoed back into the report form, plus the validation error that
/// sent the user back to it.
#[derive(Clone, PartialEq, Default)]
pub struct ReportFormView {
    pub description: String,
    pub address: String,
    pub lat: String,
    pub lng: String,
    pub is_anonymous: bool,
    pub contact: String,
    pub error: Option<String>,
}

const LOCATE_SCRIPT: &str = r#"
document.getElementById('locate-me')?.addEventListener('click', function () {
    if (!navigator.geolocation) return;
    navigator.geolocation.getCurrentPosition(function (pos) {
        document.getElementById('lat').value = pos.coords.latitude.toFixed(6);
        document.getElementById('lng').value = pos.coords.longitude.toFixed(6);
    });
});
"#;

#[allow(non_snake_case)]
#[component]
pub fn ReportFormSection(form: ReportFormView) -> Element {
    rsx! {
        section { id: "report-form", class: "bg-gray-50 py-16 px-4 sm:px-6",
            div { class: "max-w-3xl mx-auto",
                h2 { class: "text-3xl font-bold mb-8 text-gray-900", "Report a Safety Concern" }
                div { class: "bg-white shadow-lg rounded-3xl overflow-hidden p-6 md:p-8",
                    if let Some(err) = &form.error {
                        div { class: "form-error bg-red-50 border border-red-200 text-red-800 text-sm px-3 py-2 rounded mb-4",
                            "{err}"
                        }
                    }
                    form { method: "POST", action: "/report",
                        div { class: "mb-6",
                            textarea {
                                name: "description",
                                placeholder: "Describe the incident in detail...",
                                class: "w-full min-h-[150px] px-3 py-2 border border-gray-300 rounded-md text-base",
                                "{form.description}"
                            }
                        }
                        div { class: "grid grid-cols-1 md:grid-cols-2 gap-4 mb-4",
                            div {
                                label { r#for: "address", class: "block text-sm text-gray-600 mb-1", "Location" }
                                input {
                                    r#type: "text", name: "address", id: "address",
                                    value: "{form.address}",
                                    placeholder: "Street address or landmark",
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                                }
                            }
                            div {
                                label { r#for: "image", class: "block text-sm text-gray-600 mb-1", "Upload Evidence" }
                                input {
                                    r#type: "file", name: "image", id: "image",
                                    class: "w-full text-sm text-gray-700"
                                }
                            }
                        }
                        div { class: "grid grid-cols-2 md:grid-cols-3 gap-4 mb-6 items-end",
                            input {
                                r#type: "text", name: "lat", id: "lat", inputmode: "decimal",
                                value: "{form.lat}", placeholder: "Latitude",
                                class: "px-3 py-2 border border-gray-300 rounded-md"
                            }
                            input {
                                r#type: "text", name: "lng", id: "lng", inputmode: "decimal",
                                value: "{form.lng}", placeholder: "Longitude",
                                class: "px-3 py-2 border border-gray-300 rounded-md"
                            }
                            button {
                                r#type: "button", id: "locate-me",
                                class: "h-10 border border-blue-200 rounded-md hover:bg-blue-50 text-blue-700 text-sm",
                                "Add Location"
                            }
                        }
                        div { class: "flex items-center gap-2 mb-3",
                            input {
                                r#type: "checkbox", name: "is_anonymous", id: "is_anonymous",
                                checked: form.is_anonymous
                            }
                            label { r#for: "is_anonymous", class: "text-sm text-gray-700", "Submit anonymously" }
                        }
                        div { class: "mb-6",
                            input {
                                r#type: "text", name: "contact",
                                value: "{form.contact}",
                                placeholder: "Contact email or phone (optional, ignored for anonymous reports)",
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "w-full bg-red-500 hover:bg-red-600 text-white h-12 text-base rounded-md cursor-pointer",
                            "Submit Report"
                        }
                    }
                }
            }
            script { dangerous_inner_html: LOCATE_SCRIPT }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn ReportPage(chrome: PageChrome, form: ReportFormView) -> Element {
    rsx! {
        Layout { title: "Report".to_string(), active_page: "report".to_string(), chrome: chrome,
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 pt-12",
                h1 { class: "text-4xl font-bold text-gray-900 mb-6", "Report a Safety Concern" }
                p { class: "text-lg text-gray-600 max-w-3xl",
                    "Help make your community safer by reporting incidents, suspicious activities, or safety concerns. All reports are confidential and will be reviewed by our team."
                }
            }
            ReportFormSection { form: form.clone() }
        }
    }
}

pub fn render_report_page(chrome: PageChrome, form: ReportFormView) -> String {
    let mut dom = VirtualDom::new_with_props(ReportPage, ReportPageProps { chrome, form });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
