use dioxus::prelude::*;

use super::layout::Layout;
use super::{matches_search, PageChrome};
use crate::templates::render_to_html;

pub struct Hotline {
    pub name: &'static str,
    pub number: &'static str,
    pub class: &'static str,
}

pub const HOTLINES: &[Hotline] = &[
    Hotline { name: "National Helpline", number: "112", class: "bg-red-100 text-red-800" },
    Hotline { name: "Cyber Crime", number: "1930", class: "bg-blue-100 text-blue-800" },
    Hotline { name: "Ambulance", number: "102", class: "bg-green-100 text-green-800" },
    Hotline { name: "Women Helpline", number: "1091", class: "bg-purple-100 text-purple-800" },
    Hotline { name: "Child Helpline", number: "1098", class: "bg-orange-100 text-orange-800" },
    Hotline { name: "Police", number: "100", class: "bg-yellow-100 text-yellow-800" },
    Hotline { name: "Disaster Management", number: "108", class: "bg-blue-100 text-blue-800" },
    Hotline { name: "Indian Railway Security Helpline", number: "1322", class: "bg-green-100 text-green-800" },
    Hotline { name: "Fire Department", number: "101", class: "bg-purple-100 text-purple-800" },
    Hotline { name: "Road Accident", number: "1073", class: "bg-yellow-100 text-yellow-800" },
];

pub struct Guide {
    pub name: &'static str,
    pub link: &'static str,
    pub class: &'static str,
}

pub const GUIDES: &[Guide] = &[
    Guide { name: "Riot Safety Guidelines", link: "#", class: "bg-red-100 text-red-800" },
    Guide { name: "Road Safety Manual", link: "#", class: "bg-yellow-100 text-yellow-800" },
    Guide { name: "First Aid Manual", link: "#", class: "bg-green-100 text-green-800" },
    Guide { name: "Fire Safety Guide", link: "#", class: "bg-orange-100 text-orange-800" },
    Guide { name: "Disaster Preparedness", link: "#", class: "bg-blue-100 text-blue-800" },
];

/// Hotlines whose name contains `search`, case-insensitively.
pub fn search_hotlines(search: &str) -> Vec<&'static Hotline> {
    HOTLINES.iter().filter(|h| matches_search(h.name, search)).collect()
}

pub fn search_guides(search: &str) -> Vec<&'static Guide> {
    GUIDES.iter().filter(|g| matches_search(g.name, search)).collect()
}

#[derive(Clone, PartialEq)]
struct EntryView {
    title: &'static str,
    detail: &'static str,
    href: String,
    link_label: &'static str,
    class: &'static str,
}

#[allow(non_snake_case)]
#[component]
fn DirectoryPage(
    chrome: PageChrome,
    title: String,
    action: String,
    placeholder: String,
    search: String,
    entries: Vec<EntryView>,
) -> Element {
    rsx! {
        Layout { title: title.clone(), active_page: String::new(), chrome: chrome,
            div { class: "max-w-4xl mx-auto py-16 px-4 sm:px-6",
                h1 { class: "text-3xl font-bold text-gray-900 mb-6", "{title}" }
                form { method: "GET", action: "{action}", class: "mb-6",
                    input {
                        r#type: "search", name: "q", value: "{search}",
                        placeholder: "{placeholder}",
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                    }
                }
                if entries.is_empty() {
                    p { class: "text-gray-500", "Nothing matches \"{search}\"." }
                }
                div { class: "grid grid-cols-1 sm:grid-cols-2 gap-6",
                    for entry in entries.iter() {
                        div { class: "directory-entry rounded-lg p-6 {entry.class}",
                            h3 { class: "text-lg font-semibold mb-3", "{entry.title}" }
                            div { class: "flex items-center justify-between",
                                span { class: "text-lg font-semibold", "{entry.detail}" }
                                a { href: "{entry.href}", class: "text-blue-600 hover:underline", "{entry.link_label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_emergency_contacts(chrome: PageChrome, search: String) -> String {
    let entries = search_hotlines(&search)
        .into_iter()
        .map(|h| EntryView {
            title: h.name,
            detail: h.number,
            href: format!("tel:{}", h.number),
            link_label: "Call",
            class: h.class,
        })
        .collect();
    let mut dom = VirtualDom::new_with_props(
        DirectoryPage,
        DirectoryPageProps {
            chrome,
            title: "Emergency Contacts".to_string(),
            action: "/emergencycontacts".to_string(),
            placeholder: "Search contacts...".to_string(),
            search,
            entries,
        },
    );
    dom.rebuild_in_place();
    render_to_html(&dom)
}

pub fn render_resources(chrome: PageChrome, search: String) -> String {
    let entries = search_guides(&search)
        .into_iter()
        .map(|g| EntryView {
            title: g.name,
            detail: "",
            href: g.link.to_string(),
            link_label: "View Guide",
            class: g.class,
        })
        .collect();
    let mut dom = VirtualDom::new_with_props(
        DirectoryPage,
        DirectoryPageProps {
            chrome,
            title: "Safety Resources".to_string(),
            action: "/resources_safe".to_string(),
            placeholder: "Search resources...".to_string(),
            search,
            entries,
        },
    );
    dom.rebuild_in_place();
    render_to_html(&dom)
}
