//! Marketing copy rendered by the section components.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "Case Studies", href: "#case-studies" },
    NavLink { label: "Automation", href: "#automation" },
    NavLink { label: "Contact", href: "#contact" },
];

// =============================================================================
// ABOUT
// =============================================================================

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "With expertise in no-code/low-code platforms and AI integrations, I specialize in building smart, \
     scalable solutions that transform complex challenges into simple, elegant systems.",
    "My mission is to simplify digital transformation by creating intelligent, automated, and sustainable \
     online ecosystems that empower businesses to focus on growth and innovation.",
];

pub const BELIEF: &str = "The best solutions are the simplest.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const ABOUT_STATS: [Stat; 4] = [
    Stat { value: "50+", label: "Projects Completed" },
    Stat { value: "3+", label: "Years Experience" },
    Stat { value: "100%", label: "Client Satisfaction" },
    Stat { value: "24/7", label: "Support Available" },
];

// =============================================================================
// SERVICES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Gradient modifier class, e.g. `accent--blue`.
    pub accent: &'static str,
    pub features: [&'static str; 4],
}

pub const SERVICES: [Service; 6] = [
    Service {
        title: "Website Design & Development",
        description: "No-code/low-code solutions that are fast, scalable, and beautiful",
        icon: "🌐",
        accent: "accent--blue",
        features: ["Responsive Design", "No-Code Platforms", "Fast Loading", "SEO Optimized"],
    },
    Service {
        title: "SEO Strategy & Optimization",
        description: "Data-driven SEO strategies that boost your online visibility",
        icon: "📈",
        accent: "accent--green",
        features: ["Keyword Research", "Technical SEO", "Content Strategy", "Analytics Setup"],
    },
    Service {
        title: "Social Media Setup & Brand Alignment",
        description: "Consistent brand presence across all social platforms",
        icon: "📱",
        accent: "accent--purple",
        features: ["Profile Optimization", "Content Strategy", "Brand Guidelines", "Engagement Growth"],
    },
    Service {
        title: "Google Maps & MX Record Integration",
        description: "Complete digital infrastructure setup for local businesses",
        icon: "🗺️",
        accent: "accent--orange",
        features: ["Google My Business", "Email Setup", "Domain Configuration", "Local SEO"],
    },
    Service {
        title: "AI Workflow Automation",
        description: "Intelligent automation using n8n and AI agents",
        icon: "🤖",
        accent: "accent--indigo",
        features: ["n8n Workflows", "AI Agents", "Process Automation", "Integration Setup"],
    },
    Service {
        title: "Digital Transformation Consulting",
        description: "Strategic guidance for complete digital ecosystem transformation",
        icon: "💡",
        accent: "accent--yellow",
        features: ["Strategy Planning", "Technology Selection", "Implementation", "Training & Support"],
    },
];

// =============================================================================
// CASE STUDIES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub results: [Metric; 3],
    pub services: [&'static str; 4],
    pub accent: &'static str,
}

pub const CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        title: "Physiotherabia",
        subtitle: "Saudi Physiotherapy Network",
        description: "Complete digital transformation for a leading physiotherapy network across Saudi Arabia, \
                      including SEO optimization, social media strategy, and comprehensive digital infrastructure.",
        icon: "🏥",
        results: [
            Metric { value: "300%", label: "Organic Traffic Increase" },
            Metric { value: "150%", label: "Social Media Engagement" },
            Metric { value: "85%", label: "Lead Generation Boost" },
        ],
        services: ["SEO Strategy", "Social Media Setup", "Digital Strategy", "Local SEO"],
        accent: "accent--blue",
    },
    CaseStudy {
        title: "Vendit",
        subtitle: "Vending Machine App - Kuwait",
        description: "End-to-end digital ecosystem creation for a vending machine application, including app \
                      development support, user acquisition strategy, and automated workflow implementation.",
        icon: "🤖",
        results: [
            Metric { value: "500%", label: "User Acquisition" },
            Metric { value: "200%", label: "App Downloads" },
            Metric { value: "90%", label: "User Retention" },
        ],
        services: ["App Development", "Digital Ecosystem", "User Acquisition", "Automation"],
        accent: "accent--purple",
    },
    CaseStudy {
        title: "Rush Projects",
        subtitle: "Prefabricated Real Estate Developer",
        description: "Complete website development and SEO launch for a prefabricated real estate developer, \
                      focusing on lead generation and brand positioning in the construction industry.",
        icon: "🏗️",
        results: [
            Metric { value: "400%", label: "Website Traffic" },
            Metric { value: "250%", label: "Lead Generation" },
            Metric { value: "95%", label: "Conversion Rate" },
        ],
        services: ["Website Development", "SEO Launch", "Lead Generation", "Brand Strategy"],
        accent: "accent--green",
    },
];

// =============================================================================
// AUTOMATION SHOWCASE
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkflowStep {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
    pub examples: [&'static str; 4],
}

pub const WORKFLOW_STEPS: [WorkflowStep; 4] = [
    WorkflowStep {
        title: "Trigger",
        description: "Data input from various sources",
        icon: "⚡",
        accent: "accent--yellow",
        examples: ["Form Submission", "Email Received", "API Call", "Scheduled Event"],
    },
    WorkflowStep {
        title: "Process",
        description: "AI analyzes and processes data",
        icon: "🧠",
        accent: "accent--indigo",
        examples: ["Data Analysis", "Content Generation", "Decision Making", "Pattern Recognition"],
    },
    WorkflowStep {
        title: "Action",
        description: "Automated actions are executed",
        icon: "⚙️",
        accent: "accent--green",
        examples: ["Send Email", "Update Database", "Create Content", "Generate Report"],
    },
    WorkflowStep {
        title: "Result",
        description: "Outcomes are delivered and tracked",
        icon: "📊",
        accent: "accent--pink",
        examples: ["Task Completed", "Notification Sent", "Report Generated", "Data Updated"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const BENEFITS: [Benefit; 3] = [
    Benefit {
        title: "24/7 Operation",
        description: "Your systems work around the clock, never taking a break",
        icon: "🕐",
    },
    Benefit { title: "Error Reduction", description: "AI eliminates human errors and ensures consistency", icon: "🎯" },
    Benefit {
        title: "Scalable Growth",
        description: "Handle increasing workload without proportional cost increase",
        icon: "📈",
    },
];

// =============================================================================
// CONTACT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        icon: "📧",
        title: "Email",
        value: "alexa.spina@udspecialize.com",
        href: "mailto:alexa.spina@udspecialize.com",
    },
    ContactChannel { icon: "📱", title: "Phone", value: "+20 106 009 2277", href: "tel:+201060092277" },
    ContactChannel { icon: "📍", title: "Location", value: "Cairo, Egypt", href: "#" },
];

pub const SPECIALTIES: [&str; 6] = [
    "Website Development",
    "SEO Optimization",
    "AI Automation",
    "Digital Strategy",
    "Social Media Setup",
    "Process Automation",
];

// =============================================================================
// FOOTER
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkGroup {
    pub heading: &'static str,
    pub links: [NavLink; 4],
}

pub const FOOTER_LINK_GROUPS: [LinkGroup; 3] = [
    LinkGroup {
        heading: "Services",
        links: [
            NavLink { label: "Website Development", href: "#services" },
            NavLink { label: "SEO Optimization", href: "#services" },
            NavLink { label: "AI Automation", href: "#automation" },
            NavLink { label: "Digital Strategy", href: "#services" },
        ],
    },
    LinkGroup {
        heading: "Company",
        links: [
            NavLink { label: "About", href: "#about" },
            NavLink { label: "Case Studies", href: "#case-studies" },
            NavLink { label: "Contact", href: "#contact" },
            NavLink { label: "Blog", href: "#" },
        ],
    },
    LinkGroup {
        heading: "Resources",
        links: [
            NavLink { label: "Documentation", href: "#" },
            NavLink { label: "Support", href: "#contact" },
            NavLink { label: "Privacy Policy", href: "#" },
            NavLink { label: "Terms of Service", href: "#" },
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { name: "LinkedIn", href: "#", icon: "💼" },
    SocialLink { name: "Twitter", href: "#", icon: "🐦" },
    SocialLink { name: "GitHub", href: "#", icon: "🐙" },
    SocialLink { name: "Email", href: "mailto:alexa.spina@udspecialize.com", icon: "📧" },
];
