use dioxus::prelude::*;

use super::layout::Layout;
use super::PageChrome;
use crate::templates::render_to_html;

/// Public safety dashboard. Figures are illustrative, not derived from the
/// triage store.
#[derive(Clone, PartialEq)]
pub struct DashboardData {
    pub stats: Vec<StatView>,
    pub recent: Vec<RecentRow>,
    // Chart data (pre-serialized JS for Chart.js)
    pub monthly_json: String,
    pub area_json: String,
    pub category_json: String,
}

#[derive(Clone, PartialEq)]
pub struct StatView {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub color: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct RecentRow {
    pub title: &'static str,
    pub location: &'static str,
    pub time: &'static str,
    pub status: &'static str,
}

const MONTHLY: &[(&str, u64)] = &[
    ("Jan", 40), ("Feb", 35), ("Mar", 45), ("Apr", 30), ("May", 25), ("Jun", 20),
    ("Jul", 15), ("Aug", 25), ("Sep", 30), ("Oct", 40), ("Nov", 35), ("Dec", 30),
];

const AREAS: &[(&str, u64)] = &[
    ("Downtown", 45),
    ("Westside", 30),
    ("Northside", 25),
    ("Eastside", 35),
    ("Southside", 40),
];

const CATEGORIES: &[(&str, u64, &str)] = &[
    ("Suspicious Activity", 40, "#3B82F6"),
    ("Theft", 25, "#10B981"),
    ("Vandalism", 15, "#F97316"),
    ("Noise Complaint", 20, "#8B5CF6"),
];

pub fn dashboard_data() -> DashboardData {
    DashboardData {
        stats: vec![
            StatView { label: "Total Reports", value: "2,547", change: "+12.5%", color: "blue" },
            StatView { label: "Active Cases", value: "385", change: "-3.2%", color: "orange" },
            StatView { label: "Community Members", value: "12,831", change: "+5.1%", color: "green" },
            StatView { label: "Resolved Issues", value: "1,926", change: "+18.3%", color: "purple" },
        ],
        recent: vec![
            RecentRow {
                title: "Suspicious activity near park",
                location: "Central Park, Main Entrance",
                time: "2 hours ago",
                status: "Under Review",
            },
            RecentRow {
                title: "Broken streetlight",
                location: "Oak Street & 5th Avenue",
                time: "5 hours ago",
                status: "Assigned",
            },
            RecentRow {
                title: "Noise complaint",
                location: "Riverdale Apartments, Block C",
                time: "8 hours ago",
                status: "Resolved",
            },
            RecentRow {
                title: "Vandalism at community center",
                location: "Downtown Community Center",
                time: "1 day ago",
                status: "In Progress",
            },
        ],
        monthly_json: build_line_chart("chart-monthly", MONTHLY, "#3B82F6"),
        area_json: build_bar_chart("chart-area", AREAS, "#10B981"),
        category_json: build_pie_chart("chart-category", CATEGORIES),
    }
}

fn stat_card(stat: &StatView) -> Element {
    let text_class = format!("text-3xl font-bold text-{}-700", stat.color);
    let change_class = if stat.change.starts_with('-') {
        "text-xs text-red-600 mt-1"
    } else {
        "text-xs text-green-600 mt-1"
    };
    rsx! {
        div { class: "bg-white border border-gray-200 rounded-lg p-4 text-center",
            div { class: "{text_class}", "{stat.value}" }
            div { class: "text-xs text-gray-400 mt-1", "{stat.label}" }
            div { class: change_class, "{stat.change} from last month" }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn Dashboard(chrome: PageChrome, data: DashboardData) -> Element {
    rsx! {
        Layout { title: "Dashboard".to_string(), active_page: "dashboard".to_string(), chrome: chrome,
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 py-12",
                h1 { class: "text-4xl font-bold text-gray-900 mb-2", "Safety Dashboard" }
                p { class: "text-lg text-gray-600 mb-8",
                    "An overview of incident trends and community activity in your area."
                }

                // --- Stat cards ---
                div { class: "grid grid-cols-2 md:grid-cols-4 gap-3 mb-6",
                    for stat in data.stats.iter() {
                        { stat_card(stat) }
                    }
                }

                script { src: "https://cdn.jsdelivr.net/npm/chart.js" }

                // --- Charts ---
                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-4 mb-6",
                    div { class: "bg-white border border-gray-200 rounded-lg p-4",
                        h3 { class: "font-semibold mb-3 text-sm", "Incidents by Month" }
                        canvas { id: "chart-monthly", height: "200" }
                        script { dangerous_inner_html: "{data.monthly_json}" }
                    }
                    div { class: "bg-white border border-gray-200 rounded-lg p-4",
                        h3 { class: "font-semibold mb-3 text-sm", "Incidents by Area" }
                        canvas { id: "chart-area", height: "200" }
                        script { dangerous_inner_html: "{data.area_json}" }
                    }
                    div { class: "bg-white border border-gray-200 rounded-lg p-4",
                        h3 { class: "font-semibold mb-3 text-sm", "Incident Types" }
                        canvas { id: "chart-category", height: "200" }
                        script { dangerous_inner_html: "{data.category_json}" }
                    }
                    div { class: "bg-white border border-gray-200 rounded-lg p-4",
                        h3 { class: "font-semibold mb-3 text-sm", "Recent Reports" }
                        ul { class: "divide-y divide-gray-100",
                            for row in data.recent.iter() {
                                li { class: "py-3 flex items-start justify-between gap-3",
                                    div {
                                        p { class: "text-sm font-medium", "{row.title}" }
                                        p { class: "text-xs text-gray-500", "{row.location} · {row.time}" }
                                    }
                                    span { class: "px-2 py-0.5 rounded-full text-xs font-medium bg-blue-100 text-blue-800 whitespace-nowrap",
                                        "{row.status}"
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

// --- Chart.js builders ---

pub fn build_line_chart(id: &str, data: &[(&str, u64)], color: &str) -> String {
    let labels: Vec<&str> = data.iter().map(|(l, _)| *l).collect();
    let values: Vec<u64> = data.iter().map(|(_, c)| *c).collect();

    format!(
        r#"new Chart(document.getElementById('{id}'),{{type:'line',data:{{labels:{labels},datasets:[{{label:'Incidents',data:{values},borderColor:'{color}',tension:0.3,fill:false}}]}},options:{{responsive:true,plugins:{{legend:{{display:false}}}},scales:{{y:{{beginAtZero:true,ticks:{{precision:0}}}}}}}}}});"#,
        id = id,
        labels = serde_json::to_string(&labels).unwrap_or_default(),
        values = serde_json::to_string(&values).unwrap_or_default(),
        color = color,
    )
}

pub fn build_bar_chart(id: &str, data: &[(&str, u64)], color: &str) -> String {
    let labels: Vec<&str> = data.iter().map(|(l, _)| *l).collect();
    let values: Vec<u64> = data.iter().map(|(_, c)| *c).collect();

    format!(
        r#"new Chart(document.getElementById('{id}'),{{type:'bar',data:{{labels:{labels},datasets:[{{data:{values},backgroundColor:'{color}'}}]}},options:{{responsive:true,plugins:{{legend:{{display:false}}}},scales:{{y:{{beginAtZero:true,ticks:{{precision:0}}}}}}}}}});"#,
        id = id,
        labels = serde_json::to_string(&labels).unwrap_or_default(),
        values = serde_json::to_string(&values).unwrap_or_default(),
        color = color,
    )
}

pub fn build_pie_chart(id: &str, data: &[(&str, u64, &str)]) -> String {
    let labels: Vec<&str> = data.iter().map(|(l, _, _)| *l).collect();
    let values: Vec<u64> = data.iter().map(|(_, v, _)| *v).collect();
    let colors: Vec<&str> = data.iter().map(|(_, _, c)| *c).collect();

    format!(
        r#"new Chart(document.getElementById('{id}'),{{type:'pie',data:{{labels:{labels},datasets:[{{data:{values},backgroundColor:{colors}}}]}},options:{{responsive:true,plugins:{{legend:{{position:'bottom',labels:{{boxWidth:12,padding:8}}}}}}}}}});"#,
        id = id,
        labels = serde_json::to_string(&labels).unwrap_or_default(),
        values = serde_json::to_string(&values).unwrap_or_default(),
        colors = serde_json::to_string(&colors).unwrap_or_default(),
    )
}

pub fn render_dashboard(chrome: PageChrome) -> String {
    let data = dashboard_data();
    let mut dom = VirtualDom::new_with_props(Dashboard, DashboardProps { chrome, data });
    dom.rebuild_in_place();
    render_to_html(&dom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_chart_embeds_labels_and_values() {
        let js = build_bar_chart("chart-area", AREAS, "#10B981");
        assert!(js.starts_with("new Chart(document.getElementById('chart-area')"));
        assert!(js.contains(r#"labels:["Downtown","Westside","Northside","Eastside","Southside"]"#));
        assert!(js.contains("data:[45,30,25,35,40]"));
    }

    #[test]
    fn pie_chart_carries_one_colour_per_slice() {
        let js = build_pie_chart("chart-category", CATEGORIES);
        assert!(js.contains(r##"backgroundColor:["#3B82F6","#10B981","#F97316","#8B5CF6"]"##));
    }

    #[test]
    fn monthly_series_covers_the_year() {
        let js = build_line_chart("chart-monthly", MONTHLY, "#3B82F6");
        assert!(js.contains("data:[40,35,45,30,25,20,15,25,30,40,35,30]"));
    }
}
