use dioxus::prelude::VirtualDom;

/// Render a VirtualDom into a complete HTML document string.
pub fn render_to_html(dom: &VirtualDom) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus::ssr::render(dom)
    )
}

/// Encode `value` as a JavaScript string literal that is safe to inline in
/// a `<script>` element.
pub fn js_string(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}
