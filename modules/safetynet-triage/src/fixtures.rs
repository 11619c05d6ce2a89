use safetynet_common::{Report, ReportLocation, ReportStatus};

struct Seed {
    id: &'static str,
    description: &'static str,
    lat: f64,
    lng: f64,
    address: &'static str,
    severity: i32,
    timestamp: &'static str,
    images: &'static [&'static str],
    status: ReportStatus,
    anonymous: bool,
    contact: &'static str,
    details: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "REP-001",
        description: "Suspicious individual loitering around elementary school",
        lat: 37.7749,
        lng: -122.4194,
        address: "123 School Street, Downtown",
        severity: 85,
        timestamp: "2023-07-15T14:30:00Z",
        images: &["report1_image1.jpg", "report1_image2.jpg"],
        status: ReportStatus::Pending,
        anonymous: true,
        contact: "anonymous@example.com",
        details: "Wearing dark clothing and carrying a large backpack. Has been seen taking photos of the playground.",
    },
    Seed {
        id: "REP-002",
        description: "Broken streetlight creating dangerous conditions at night",
        lat: 37.7833,
        lng: -122.4167,
        address: "456 Main Street, Northside",
        severity: 45,
        timestamp: "2023-07-16T19:45:00Z",
        images: &["report2_image1.jpg"],
        status: ReportStatus::Approved,
        anonymous: false,
        contact: "john.doe@example.com",
        details: "Streetlight has been flickering for weeks and now completely out. Area is very dark and several near-accidents have occurred.",
    },
    Seed {
        id: "REP-003",
        description: "Potential drug dealing activity in city park",
        lat: 37.7694,
        lng: -122.4862,
        address: "789 Park Avenue, Westside",
        severity: 78,
        timestamp: "2023-07-17T21:20:00Z",
        images: &["report3_image1.jpg", "report3_image2.jpg", "report3_image3.jpg"],
        status: ReportStatus::Critical,
        anonymous: true,
        contact: "anonymous123@example.com",
        details: "Multiple individuals exchanging small packages for cash. Regular activity between 8-10pm. Same vehicles return each night.",
    },
    Seed {
        id: "REP-004",
        description: "Vandalism on community center building",
        lat: 37.7831,
        lng: -122.4039,
        address: "101 Community Way, Eastside",
        severity: 40,
        timestamp: "2023-07-18T08:15:00Z",
        images: &["report4_image1.jpg"],
        status: ReportStatus::Pending,
        anonymous: false,
        contact: "mary.smith@example.com",
        details: "Graffiti appeared overnight on the north side of the building. Tags appear gang-related. Security camera may have footage.",
    },
    Seed {
        id: "REP-005",
        description: "Aggressive dog running loose in residential area",
        lat: 37.7439,
        lng: -122.4225,
        address: "202 Residential Lane, Southside",
        severity: 65,
        timestamp: "2023-07-19T16:55:00Z",
        images: &[],
        status: ReportStatus::NeedsInfo,
        anonymous: false,
        contact: "robert.johnson@example.com",
        details: "Large brown dog, possibly a pit bull mix, no collar seen. Has charged at pedestrians and other dog walkers. Last seen near the playground.",
    },
];

/// The reports the admin console starts with.
pub fn seed_reports() -> Vec<Report> {
    SEEDS
        .iter()
        .map(|s| Report {
            id: s.id.to_string(),
            description: s.description.to_string(),
            location: ReportLocation {
                lat: s.lat,
                lng: s.lng,
                address: s.address.to_string(),
            },
            severity_score: s.severity,
            timestamp: s.timestamp.to_string(),
            images: s.images.iter().map(|i| i.to_string()).collect(),
            status: s.status,
            is_anonymous: s.anonymous,
            reporter_contact_info: s.contact.to_string(),
            additional_details: s.details.to_string(),
        })
        .collect()
}
