use dioxus::prelude::*;

use super::layout::Layout;
use super::report_form::{ReportFormSection, ReportFormView};
use super::{matches_search, PageChrome};
use crate::templates::render_to_html;

struct NewsItem {
    category: &'static str,
    title: &'static str,
    description: &'static str,
    class: &'static str,
}

const NEWS: &[NewsItem] = &[
    NewsItem {
        category: "Breaking News",
        title: "Community Safety Alert",
        description: "Important update regarding recent incidents in the downtown area...",
        class: "bg-red-100 text-red-800",
    },
    NewsItem {
        category: "Update",
        title: "Safety Tips",
        description: "Learn about the latest safety measures recommended by experts...",
        class: "bg-green-100 text-green-800",
    },
    NewsItem {
        category: "Community",
        title: "Neighborhood Watch",
        description: "Join your local neighborhood watch program and make a difference...",
        class: "bg-blue-100 text-blue-800",
    },
];

struct Feature {
    title: &'static str,
    description: &'static str,
    button: &'static str,
    href: &'static str,
    class: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Community Forum",
        description: "Connect with community members and share safety tips.",
        button: "Join Discussion",
        href: "/community",
        class: "bg-green-500 hover:bg-green-600",
    },
    Feature {
        title: "Safety Resources",
        description: "Access guides and resources for community safety.",
        button: "Browse Resources",
        href: "/resources_safe",
        class: "bg-purple-500 hover:bg-purple-600",
    },
    Feature {
        title: "Emergency Contacts",
        description: "Quick access to emergency services and hotlines.",
        button: "View Contacts",
        href: "/emergencycontacts",
        class: "bg-orange-500 hover:bg-orange-600",
    },
];

#[allow(non_snake_case)]
#[component]
fn HomePage(chrome: PageChrome, form: ReportFormView) -> Element {
    rsx! {
        Layout { title: "Home".to_string(), active_page: "home".to_string(), chrome: chrome,
            section { class: "bg-gradient-to-br from-blue-600 to-blue-700 text-white",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 py-24 md:py-32",
                    h1 { class: "text-4xl md:text-5xl lg:text-6xl font-bold mb-6 leading-tight max-w-3xl",
                        "Keeping Communities Safe Together"
                    }
                    p { class: "text-lg md:text-xl text-blue-50 mb-8 max-w-2xl",
                        "Join our network of vigilant citizens and law enforcement to create safer neighborhoods for everyone."
                    }
                    a {
                        href: "/report",
                        class: "inline-flex items-center px-6 py-3 bg-white text-blue-700 font-medium rounded-full shadow-lg hover:bg-blue-50",
                        "Get Started →"
                    }
                }
            }
            ReportFormSection { form: form.clone() }
            section { class: "bg-white py-16 px-4 sm:px-6",
                div { class: "max-w-7xl mx-auto",
                    h2 { class: "text-3xl font-bold mb-10 text-gray-900", "Latest News" }
                    div { class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                        for item in NEWS.iter() {
                            div { class: "rounded-2xl border border-gray-100 shadow-sm p-6",
                                span { class: "inline-block px-3 py-1 rounded-full text-xs font-medium mb-3 {item.class}",
                                    "{item.category}"
                                }
                                h3 { class: "text-xl font-semibold mb-2", "{item.title}" }
                                p { class: "text-gray-600", "{item.description}" }
                            }
                        }
                    }
                }
            }
            section { class: "bg-gray-50 py-16 px-4 sm:px-6",
                div { class: "max-w-7xl mx-auto grid grid-cols-1 md:grid-cols-3 gap-6",
                    for feature in FEATURES.iter() {
                        div { class: "bg-white rounded-2xl shadow-sm p-6 flex flex-col",
                            h3 { class: "text-xl font-semibold mb-2", "{feature.title}" }
                            p { class: "text-gray-600 mb-6 flex-1", "{feature.description}" }
                            a {
                                href: feature.href,
                                class: "text-center px-4 py-2 rounded-md text-white {feature.class}",
                                "{feature.button}"
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_home(chrome: PageChrome) -> String {
    let mut dom = VirtualDom::new_with_props(
        HomePage,
        HomePageProps {
            chrome,
            form: ReportFormView::default(),
        },
    );
    dom.rebuild_in_place();
    render_to_html(&dom)
}

// --- Community ---

struct Topic {
    title: &'static str,
    author: &'static str,
    date: &'static str,
    replies: u32,
    likes: u32,
    category: &'static str,
    excerpt: &'static str,
}

const TOPICS: &[Topic] = &[
    Topic {
        title: "Neighborhood Watch Program - Volunteers Needed",
        author: "Sarah Johnson",
        date: "2 days ago",
        replies: 28,
        likes: 42,
        category: "Neighborhood Watch",
        excerpt: "We're looking for volunteers to join our neighborhood watch program. Training will be provided...",
    },
    Topic {
        title: "New street lights installed on Oak Avenue",
        author: "Reyansh Verma",
        date: "3 days ago",
        replies: 15,
        likes: 23,
        category: "Infrastructure",
        excerpt: "The city has completed installation of new LED street lights along Oak Avenue, improving visibility and safety...",
    },
    Topic {
        title: "Safety concerns at Central Park after dark",
        author: "Neha Gupta",
        date: "5 days ago",
        replies: 32,
        likes: 18,
        category: "Public Safety",
        excerpt: "Several residents have reported suspicious activity at Central Park after sunset. I'd like to discuss possible solutions...",
    },
    Topic {
        title: "Community cleanup event this weekend",
        author: "David Wilson",
        date: "1 week ago",
        replies: 42,
        likes: 56,
        category: "Events",
        excerpt: "Join us for our monthly community cleanup event this Saturday from 9 AM to 12 PM. Meeting point will be at...",
    },
];

struct CommunityEvent {
    title: &'static str,
    date: &'static str,
    time: &'static str,
    location: &'static str,
    attendees: u32,
}

const EVENTS: &[CommunityEvent] = &[
    CommunityEvent {
        title: "Community Safety Workshop",
        date: "May 15, 2023",
        time: "6:00 PM - 8:00 PM",
        location: "Community Center, Wakad",
        attendees: 45,
    },
    CommunityEvent {
        title: "Neighborhood Watch Training",
        date: "May 22, 2023",
        time: "10:00 AM - 12:00 PM",
        location: "Public Library, Conference Room B",
        attendees: 28,
    },
    CommunityEvent {
        title: "Emergency Preparedness Seminar",
        date: "June 5, 2023",
        time: "7:00 PM - 9:00 PM",
        location: "Fire Station #3, Training Room",
        attendees: 36,
    },
];

fn topic_matches(topic: &Topic, search: &str) -> bool {
    matches_search(topic.title, search)
        || matches_search(topic.excerpt, search)
        || matches_search(topic.category, search)
}

#[allow(non_snake_case)]
#[component]
fn CommunityPage(chrome: PageChrome, search: String) -> Element {
    let topics: Vec<&Topic> = TOPICS.iter().filter(|t| topic_matches(t, &search)).collect();
    rsx! {
        Layout { title: "Community".to_string(), active_page: "community".to_string(), chrome: chrome,
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 py-12",
                h1 { class: "text-4xl font-bold text-gray-900 mb-2", "Community Forum" }
                p { class: "text-lg text-gray-600 mb-8",
                    "Connect with neighbors, share safety tips, and stay informed about local events."
                }
                form { method: "GET", action: "/community", class: "mb-8",
                    input {
                        r#type: "search", name: "q", value: "{search}",
                        placeholder: "Search discussions...",
                        class: "w-full md:w-96 px-3 py-2 border border-gray-300 rounded-md"
                    }
                }
                div { class: "grid grid-cols-1 lg:grid-cols-3 gap-8",
                    div { class: "lg:col-span-2 space-y-4",
                        h2 { class: "text-2xl font-semibold", "Recent Discussions" }
                        if topics.is_empty() {
                            p { class: "text-gray-500", "No discussions match your search." }
                        }
                        for topic in topics.iter() {
                            div { class: "bg-white border border-gray-200 rounded-lg p-5",
                                div { class: "flex items-center justify-between mb-2",
                                    span { class: "px-2 py-0.5 rounded-full text-xs bg-blue-100 text-blue-800", "{topic.category}" }
                                    span { class: "text-xs text-gray-500", "{topic.date}" }
                                }
                                h3 { class: "text-lg font-semibold mb-1", "{topic.title}" }
                                p { class: "text-gray-600 text-sm mb-3", "{topic.excerpt}" }
                                div { class: "flex gap-4 text-xs text-gray-500",
                                    span { "By {topic.author}" }
                                    span { "{topic.replies} replies" }
                                    span { "{topic.likes} likes" }
                                }
                            }
                        }
                    }
                    div { class: "space-y-4",
                        h2 { class: "text-2xl font-semibold", "Upcoming Events" }
                        for event in EVENTS.iter() {
                            div { class: "bg-white border border-gray-200 rounded-lg p-5",
                                h3 { class: "font-semibold mb-1", "{event.title}" }
                                p { class: "text-sm text-gray-600", "{event.date} · {event.time}" }
                                p { class: "text-sm text-gray-600", "{event.location}" }
                                p { class: "text-xs text-gray-500 mt-2", "{event.attendees} attending" }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_community(chrome: PageChrome, search: String) -> String {
    let mut dom = VirtualDom::new_with_props(CommunityPage, CommunityPageProps { chrome, search });
    dom.rebuild_in_place();
    render_to_html(&dom)
}

// --- About ---

const VALUES: &[(&str, &str)] = &[
    ("Safety First", "We prioritize the safety and well-being of communities in everything we do."),
    ("Community-Driven", "We believe in the power of communities coming together to create positive change."),
    ("Transparency", "We operate with full transparency and accountability to the communities we serve."),
    ("Excellence", "We strive for excellence in our platform, service, and community impact."),
];

#[allow(non_snake_case)]
#[component]
fn AboutPage(chrome: PageChrome) -> Element {
    rsx! {
        Layout { title: "About".to_string(), active_page: "about".to_string(), chrome: chrome,
            section { class: "bg-blue-50 py-20",
                div { class: "max-w-4xl mx-auto px-4 sm:px-6 text-center",
                    h1 { class: "text-4xl md:text-5xl font-bold text-gray-900 mb-6", "About SafetyNet" }
                    p { class: "text-xl text-gray-600",
                        "We're on a mission to create safer communities through technology, collaboration, and community engagement."
                    }
                }
            }
            section { class: "py-16",
                div { class: "max-w-4xl mx-auto px-4 sm:px-6 space-y-4 text-gray-600",
                    h2 { class: "text-3xl font-bold text-gray-900 mb-6", "Our Story" }
                    p {
                        "SafetyNet was founded in 2025 by the students of MIT-ADT University with a simple but powerful vision: to leverage technology to create safer neighborhoods where everyone feels secure and connected."
                    }
                    p {
                        "What began as a small community initiative in one neighborhood has grown into a comprehensive platform serving communities across the country."
                    }
                    p {
                        "Today, SafetyNet is helping thousands of communities collaborate with local authorities, share important safety information, and take proactive steps toward creating safer environments for all."
                    }
                }
            }
            section { class: "bg-gray-50 py-16",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6",
                    h2 { class: "text-3xl font-bold text-gray-900 mb-8 text-center", "Our Values" }
                    div { class: "grid grid-cols-1 md:grid-cols-4 gap-6",
                        for (title, description) in VALUES.iter() {
                            div { class: "bg-white rounded-2xl p-6 shadow-sm",
                                h3 { class: "text-xl font-bold text-gray-900 mb-2", "{title}" }
                                p { class: "text-gray-600", "{description}" }
                            }
                        }
                    }
                }
            }
            section { class: "bg-blue-600 py-16 text-center",
                h2 { class: "text-3xl font-bold text-white mb-6", "Ready to make your community safer?" }
                a {
                    href: "/report",
                    class: "inline-block px-6 py-3 bg-white text-blue-700 font-medium rounded-full",
                    "Report a Concern"
                }
            }
        }
    }
}

pub fn render_about(chrome: PageChrome) -> String {
    let mut dom = VirtualDom::new_with_props(AboutPage, AboutPageProps { chrome });
    dom.rebuild_in_place();
    render_to_html(&dom)
}

// --- Contact ---

/// Contact form values echoed back after a failed submission.
#[derive(Clone, PartialEq, Default)]
pub struct ContactFormView {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub error: Option<String>,
}

const CONTACT_INFO: &[(&str, &str, &str)] = &[
    ("Phone", "+91 1234567890", "Monday-Friday from 8am to 5pm"),
    ("Email", "contact@safetynet.org", "We'll respond within 24 hours"),
    ("Address", "Office 2, Street 10, Loni-Kalbhor, Pune", "Loni-Kalbhor, Pune"),
];

const FAQS: &[(&str, &str)] = &[
    (
        "What information should I include in my message?",
        "Please include your name, contact information, and a detailed description of your inquiry or concern. If you're reporting a safety issue, provide the location, date, time, and any other relevant details.",
    ),
    (
        "How quickly will I receive a response?",
        "For general inquiries, we aim to respond within 24 hours during business days. For urgent safety concerns, please call our emergency hotline for immediate assistance.",
    ),
    (
        "Is my information kept confidential?",
        "Yes, all information submitted through this form is confidential and will only be used to address your specific inquiry or concern.",
    ),
    (
        "Can I attach files to my message?",
        "Currently, our contact form doesn't support file attachments. If you need to share documents or images, please mention this in your message and we'll provide alternative methods.",
    ),
];

#[allow(non_snake_case)]
#[component]
fn ContactPage(chrome: PageChrome, form: ContactFormView) -> Element {
    rsx! {
        Layout { title: "Contact".to_string(), active_page: "contact".to_string(), chrome: chrome,
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 py-12",
                h1 { class: "text-4xl font-bold text-gray-900 mb-2", "Contact Us" }
                p { class: "text-lg text-gray-600 mb-10",
                    "Have questions or feedback? We'd love to hear from you."
                }
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-6 mb-12",
                    for (title, value, description) in CONTACT_INFO.iter() {
                        div { class: "bg-white border border-gray-200 rounded-lg p-6",
                            h3 { class: "font-semibold mb-1", "{title}" }
                            p { class: "text-blue-600", "{value}" }
                            p { class: "text-sm text-gray-500", "{description}" }
                        }
                    }
                }
                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-10",
                    div { class: "bg-white border border-gray-200 rounded-lg p-6",
                        h2 { class: "text-2xl font-semibold mb-4", "Send us a message" }
                        if let Some(err) = &form.error {
                            div { class: "form-error bg-red-50 border border-red-200 text-red-800 text-sm px-3 py-2 rounded mb-4",
                                "{err}"
                            }
                        }
                        form { method: "POST", action: "/contact", class: "space-y-4",
                            input {
                                r#type: "text", name: "name", value: "{form.name}", placeholder: "Your name",
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                            }
                            input {
                                r#type: "email", name: "email", value: "{form.email}", placeholder: "Your email",
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                            }
                            input {
                                r#type: "text", name: "subject", value: "{form.subject}", placeholder: "Subject",
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                            }
                            textarea {
                                name: "message", placeholder: "Your message",
                                class: "w-full min-h-[140px] px-3 py-2 border border-gray-300 rounded-md",
                                "{form.message}"
                            }
                            button {
                                r#type: "submit",
                                class: "w-full py-2.5 bg-blue-600 text-white rounded-md hover:bg-blue-700 cursor-pointer",
                                "Send Message"
                            }
                        }
                    }
                    div {
                        h2 { class: "text-2xl font-semibold mb-4", "Frequently Asked Questions" }
                        div { class: "space-y-4",
                            for (question, answer) in FAQS.iter() {
                                details { class: "bg-white border border-gray-200 rounded-lg p-4",
                                    summary { class: "font-medium cursor-pointer", "{question}" }
                                    p { class: "text-sm text-gray-600 mt-2", "{answer}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_contact(chrome: PageChrome, form: ContactFormView) -> String {
    let mut dom = VirtualDom::new_with_props(ContactPage, ContactPageProps { chrome, form });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
