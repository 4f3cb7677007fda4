use super::{
    CompanyValue, FaqEntry, Feature, PortfolioItem, PricingPlan, PricingTier, RateCategory,
    RateLine, Service, Stat, TeamMember, Testimonial,
};

pub const COMPANY_NAME: &str = "Skyline Aerial";
pub const COMPANY_TAGLINE: &str = "Professional drone services for every perspective";
pub const COMPANY_EMAIL: &str = "hello@skylineaerial.example";
pub const COMPANY_PHONE: &str = "+1 (555) 014-2290";

pub const STATS: &[Stat] = &[
    Stat { value: "1,200+", label: "Flights Completed" },
    Stat { value: "350+", label: "Happy Clients" },
    Stat { value: "12", label: "Certified Pilots" },
    Stat { value: "100%", label: "Safety Record" },
];

pub const SERVICES: &[Service] = &[
    Service {
        name: "Aerial Photography",
        summary: "High-resolution stills for real estate, events and marketing campaigns.",
        icon: "camera",
    },
    Service {
        name: "Aerial Videography",
        summary: "Cinematic 4K footage with smooth, stabilized flight paths.",
        icon: "video",
    },
    Service {
        name: "Roof & Structure Inspection",
        summary: "Close-range imaging of roofs, towers and facades without scaffolding.",
        icon: "inspect",
    },
    Service {
        name: "Mapping & Surveying",
        summary: "Orthomosaic maps and 3D models for construction and land management.",
        icon: "map",
    },
    Service {
        name: "Thermal Imaging",
        summary: "Radiometric thermal capture for solar farms, insulation and search work.",
        icon: "thermal",
    },
    Service {
        name: "Agricultural Monitoring",
        summary: "Multispectral crop health analysis across entire fields in one flight.",
        icon: "crop",
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Licensed & Insured",
        description: "Every pilot holds a commercial remote pilot certificate and every flight is fully insured.",
        icon: "shield",
    },
    Feature {
        title: "Fast Turnaround",
        description: "Edited photos in 48 hours and processed maps within five business days.",
        icon: "clock",
    },
    Feature {
        title: "Modern Fleet",
        description: "Enterprise airframes with RTK positioning, zoom and thermal payloads.",
        icon: "drone",
    },
    Feature {
        title: "Airspace Handled",
        description: "We file the authorizations and coordinate with air traffic control so you do not have to.",
        icon: "airspace",
    },
];

pub const PORTFOLIO: &[PortfolioItem] = &[
    PortfolioItem {
        title: "Harbor Front Residences",
        category: "Real Estate",
        summary: "Twilight aerial set for a 40-unit waterfront development launch.",
        image: "/assets/portfolio/harbor.jpg",
    },
    PortfolioItem {
        title: "Ridgeview Solar Array",
        category: "Thermal",
        summary: "Hot-spot survey of 12,000 panels completed in a single morning.",
        image: "/assets/portfolio/solar.jpg",
    },
    PortfolioItem {
        title: "County Road 9 Expansion",
        category: "Surveying",
        summary: "Weekly progress orthomosaics shared with the general contractor.",
        image: "/assets/portfolio/road.jpg",
    },
    PortfolioItem {
        title: "Autumn Vineyard Festival",
        category: "Events",
        summary: "Live overhead coverage and a highlight reel delivered the next day.",
        image: "/assets/portfolio/vineyard.jpg",
    },
    PortfolioItem {
        title: "St. Anne's Bell Tower",
        category: "Inspection",
        summary: "Masonry crack mapping without closing the square to the public.",
        image: "/assets/portfolio/tower.jpg",
    },
    PortfolioItem {
        title: "Greenacre Farms",
        category: "Agriculture",
        summary: "NDVI health maps guiding variable-rate fertilizer application.",
        image: "/assets/portfolio/farm.jpg",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "The listing photos sold the house before the open day. Worth every cent.",
        author: "Maria Chen",
        role: "Real Estate Agent",
    },
    Testimonial {
        quote: "Their thermal survey found three failing strings we had missed for months.",
        author: "David Okafor",
        role: "Solar Operations Manager",
    },
    Testimonial {
        quote: "Professional, punctual and the footage was stunning. We will book again next year.",
        author: "Priya Raman",
        role: "Event Coordinator",
    },
];

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Are your pilots licensed?",
        answer: "Yes. Every pilot holds a commercial remote pilot certificate and completes recurrent training each year.",
    },
    FaqEntry {
        question: "Do you carry insurance?",
        answer: "We carry liability coverage on every flight and can name your organization as an additional insured on request.",
    },
    FaqEntry {
        question: "What happens if the weather is bad?",
        answer: "Safety comes first. If wind, rain or visibility are outside limits we reschedule at no extra cost.",
    },
    FaqEntry {
        question: "Can you fly in controlled airspace?",
        answer: "Usually, yes. We request the necessary authorizations, which can take a few days, so let us know early.",
    },
    FaqEntry {
        question: "How soon will I receive my files?",
        answer: "Edited photos within 48 hours, edited video within five business days, and mapping deliverables within a week.",
    },
    FaqEntry {
        question: "Who owns the footage?",
        answer: "You do. Commercial packages include a full usage license; we only keep a copy for our portfolio with your permission.",
    },
    FaqEntry {
        question: "How far do you travel?",
        answer: "Anywhere within 50 miles is included. Beyond that we charge a per-mile travel fee listed on our rate card.",
    },
];

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        label: "Photography",
        tiers: &[
            PricingTier {
                name: "Starter",
                price: "$249",
                unit: "per shoot",
                description: "A quick aerial set for a single property.",
                bullets: &["15 edited photos", "One location", "Delivery in 48 hours"],
                highlighted: false,
            },
            PricingTier {
                name: "Professional",
                price: "$449",
                unit: "per shoot",
                description: "Our most popular package for agents and builders.",
                bullets: &[
                    "35 edited photos",
                    "Twilight session",
                    "Interactive 360 panorama",
                    "Delivery in 48 hours",
                ],
                highlighted: true,
            },
            PricingTier {
                name: "Premium",
                price: "$749",
                unit: "per shoot",
                description: "Full coverage for large estates and commercial sites.",
                bullets: &[
                    "60 edited photos",
                    "Twilight session",
                    "Two 360 panoramas",
                    "Same-day previews",
                ],
                highlighted: false,
            },
        ],
    },
    PricingPlan {
        label: "Video",
        tiers: &[
            PricingTier {
                name: "Highlight",
                price: "$399",
                unit: "per project",
                description: "A one-minute edited aerial clip.",
                bullets: &["60 second edit", "Licensed music", "4K delivery"],
                highlighted: false,
            },
            PricingTier {
                name: "Cinematic",
                price: "$899",
                unit: "per project",
                description: "A story-driven film combining aerial and ground footage.",
                bullets: &[
                    "Three minute edit",
                    "Ground camera operator",
                    "Color grading",
                    "Two revision rounds",
                ],
                highlighted: true,
            },
        ],
    },
    PricingPlan {
        label: "Inspection & Mapping",
        tiers: &[
            PricingTier {
                name: "Inspection",
                price: "$599",
                unit: "per site",
                description: "Detailed imaging of a roof or structure.",
                bullets: &["Zoom and close-range stills", "Annotated report", "Raw data included"],
                highlighted: false,
            },
            PricingTier {
                name: "Survey",
                price: "$1,200",
                unit: "from",
                description: "Orthomosaics and 3D models up to 100 acres.",
                bullets: &[
                    "RTK accuracy",
                    "Orthomosaic and DSM",
                    "3D mesh export",
                    "Cloud viewer access",
                ],
                highlighted: true,
            },
        ],
    },
];

pub const RATE_CARD: &[RateCategory] = &[
    RateCategory {
        name: "Flight Time",
        lines: &[
            RateLine { item: "Standard flight hour", rate: "$180 / hr", notes: "Minimum one hour" },
            RateLine { item: "Thermal payload hour", rate: "$260 / hr", notes: "Radiometric capture" },
            RateLine { item: "Night operations", rate: "+25%", notes: "Subject to authorization" },
        ],
    },
    RateCategory {
        name: "Post-Production",
        lines: &[
            RateLine { item: "Photo editing", rate: "$8 / image", notes: "Color and perspective correction" },
            RateLine { item: "Video editing", rate: "$95 / hr", notes: "Includes one revision" },
            RateLine { item: "Map processing", rate: "$150 / map", notes: "Orthomosaic and elevation model" },
        ],
    },
    RateCategory {
        name: "Travel & Logistics",
        lines: &[
            RateLine { item: "Within 50 miles", rate: "Included", notes: "" },
            RateLine { item: "Beyond 50 miles", rate: "$1.20 / mile", notes: "Round trip" },
            RateLine { item: "Airspace authorization", rate: "$75", notes: "Per controlled-airspace request" },
        ],
    },
    RateCategory {
        name: "Extras",
        lines: &[
            RateLine { item: "Rush delivery", rate: "+30%", notes: "Within 24 hours" },
            RateLine { item: "Raw footage", rate: "$50", notes: "Per project" },
            RateLine { item: "Weather standby day", rate: "No charge", notes: "Rescheduled at our discretion" },
        ],
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Jordan Blake",
        role: "Founder & Chief Pilot",
        bio: "Former helicopter pilot with over 3,000 hours in the air and a decade of drone operations.",
    },
    TeamMember {
        name: "Sam Ortiz",
        role: "Geospatial Lead",
        bio: "Licensed surveyor who turns flight data into maps, models and measurements.",
    },
    TeamMember {
        name: "Alex Novak",
        role: "Creative Director",
        bio: "Cinematographer responsible for every frame that leaves our editing suite.",
    },
];

pub const COMPANY_VALUES: &[CompanyValue] = &[
    CompanyValue {
        title: "Safety First",
        description: "Every flight follows a written risk assessment and pre-flight checklist.",
    },
    CompanyValue {
        title: "Craft",
        description: "We treat every deliverable as a portfolio piece.",
    },
    CompanyValue {
        title: "Clarity",
        description: "Fixed quotes, published rates and no surprises on the invoice.",
    },
];
