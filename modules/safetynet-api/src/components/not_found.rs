use dioxus::prelude::*;

use super::layout::Layout;
use super::PageChrome;
use crate::templates::render_to_html;

#[allow(non_snake_case)]
#[component]
fn NotFound(chrome: PageChrome, path: String) -> Element {
    rsx! {
        Layout { title: "Page not found".to_string(), active_page: String::new(), chrome: chrome,
            div { class: "max-w-xl mx-auto px-4 py-24 text-center",
                h1 { class: "text-6xl font-bold text-gray-900 mb-4", "404" }
                p { class: "text-xl text-gray-600 mb-2", "Oops! Page not found" }
                p { class: "text-sm text-gray-400 mb-8 font-mono", "{path}" }
                a { href: "/", class: "text-blue-600 hover:underline", "Return to Home" }
            }
        }
    }
}

pub fn render_not_found(chrome: PageChrome, path: String) -> String {
    let mut dom = VirtualDom::new_with_props(NotFound, NotFoundProps { chrome, path });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
