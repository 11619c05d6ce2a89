use dioxus::prelude::*;

use super::PageChrome;

struct NavItem {
    key: &'static str,
    label: &'static str,
    href: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { key: "home", label: "Home", href: "/" },
    NavItem { key: "report", label: "Report", href: "/report" },
    NavItem { key: "dashboard", label: "Dashboard", href: "/dashboard" },
    NavItem { key: "community", label: "Community", href: "/community" },
    NavItem { key: "about", label: "About", href: "/about" },
    NavItem { key: "contact", label: "Contact", href: "/contact" },
];

/// Site layout: top navbar, toast stack, page body, footer.
#[allow(non_snake_case)]
#[component]
pub fn Layout(title: String, active_page: String, chrome: PageChrome, children: Element) -> Element {
    let full_title = format!("{title} | SafetyNet");
    let nav = chrome.nav.clone();
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{full_title}" }
            script { src: "https://cdn.tailwindcss.com" }
            link { rel: "stylesheet", href: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" }
        }
        body { class: "min-h-screen flex flex-col bg-white font-sans text-gray-900",
            header { class: "sticky top-0 z-40 bg-white/90 backdrop-blur border-b border-gray-100",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 h-16 flex items-center justify-between",
                    a { href: "/", class: "text-xl font-bold text-blue-600", "SafetyNet" }
                    nav { class: "hidden md:flex items-center gap-6",
                        for item in NAV_ITEMS.iter() {
                            {
                                let class = if item.key == active_page {
                                    "text-sm font-medium text-blue-600"
                                } else {
                                    "text-sm font-medium text-gray-600 hover:text-blue-600 transition-colors"
                                };
                                let href = item.href;
                                let label = item.label;
                                rsx! { a { href: href, class: class, "{label}" } }
                            }
                        }
                    }
                    div { class: "flex items-center gap-3",
                        if nav.signed_in {
                            if nav.is_admin {
                                a {
                                    href: "/admin",
                                    class: "px-4 py-2 rounded-full bg-blue-600 text-white text-sm font-medium hover:bg-blue-700",
                                    "Admin"
                                }
                            }
                            span { class: "text-sm text-gray-500", "{nav.display_name}" }
                            form { method: "POST", action: "/logout", class: "inline",
                                button {
                                    r#type: "submit",
                                    class: "text-sm text-gray-600 hover:text-red-600 cursor-pointer",
                                    "Log out"
                                }
                            }
                        } else {
                            a {
                                href: "/login",
                                class: "px-4 py-2 rounded-full bg-blue-600 text-white text-sm font-medium hover:bg-blue-700",
                                "Login"
                            }
                        }
                    }
                }
            }
            div { class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80",
                for notice in chrome.notices.iter() {
                    {
                        let class = if notice.is_destructive() {
                            "toast rounded-lg shadow-lg px-4 py-3 bg-red-600 text-white"
                        } else {
                            "toast rounded-lg shadow-lg px-4 py-3 bg-white border border-gray-200 text-gray-900"
                        };
                        let title = notice.title.clone();
                        let description = notice.description.clone();
                        rsx! {
                            div { class: class, role: "status",
                                p { class: "text-sm font-semibold", "{title}" }
                                if let Some(desc) = description {
                                    p { class: "text-sm opacity-90 mt-1", "{desc}" }
                                }
                            }
                        }
                    }
                }
            }
            main { class: "flex-1",
                {children}
            }
            Footer {}
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "bg-gray-50 border-t border-gray-100",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 py-12 grid grid-cols-1 md:grid-cols-4 gap-8",
                div {
                    p { class: "text-lg font-bold text-blue-600 mb-2", "SafetyNet" }
                    p { class: "text-gray-600 text-sm max-w-xs",
                        "Connecting communities and law enforcement to build safer neighborhoods."
                    }
                }
                div {
                    h3 { class: "text-sm font-semibold text-gray-900 tracking-wider uppercase mb-3", "Platform" }
                    ul { class: "space-y-2 text-sm",
                        li { a { href: "/report", class: "text-gray-600 hover:text-blue-600", "Report Incident" } }
                        li { a { href: "/dashboard", class: "text-gray-600 hover:text-blue-600", "Safety Dashboard" } }
                        li { a { href: "/community", class: "text-gray-600 hover:text-blue-600", "Community" } }
                    }
                }
                div {
                    h3 { class: "text-sm font-semibold text-gray-900 tracking-wider uppercase mb-3", "Support" }
                    ul { class: "space-y-2 text-sm",
                        li { a { href: "/resources_safe", class: "text-gray-600 hover:text-blue-600", "Resources" } }
                        li { a { href: "/emergencycontacts", class: "text-gray-600 hover:text-blue-600", "Emergency Contacts" } }
                        li { a { href: "/contact", class: "text-gray-600 hover:text-blue-600", "Contact Us" } }
                    }
                }
                div {
                    h3 { class: "text-sm font-semibold text-gray-900 tracking-wider uppercase mb-3", "Company" }
                    ul { class: "space-y-2 text-sm",
                        li { a { href: "/about", class: "text-gray-600 hover:text-blue-600", "About" } }
                    }
                }
            }
            p { class: "text-center text-sm text-gray-500 pb-8",
                "© 2025 SafetyNet. All rights reserved."
            }
        }
    }
}
