//! Fixed project catalog. The home showcase rotates over the featured
//! prefix; the projects page filters the whole list.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub blurb: &'static str,
    pub tags: &'static [&'static str],
    /// Gradient class pair applied to the entry's card background.
    pub accent: &'static str,
    pub category: &'static str,
    pub featured: bool,
}

/// Entries the home carousel rotates over (a prefix of [`PROJECT_CATALOG`]).
pub const FEATURED_PROJECT_COUNT: usize = 6;

pub const PROJECT_CATEGORIES: &[&str] = &[
    "All",
    "Full-Stack",
    "Enterprise",
    "Desktop",
    "Web",
    "Integration",
    "System",
];

pub const PROJECT_CATALOG: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Sportshub — Sports Community Platform",
        blurb: "A comprehensive sports community website for discovering, joining, and \
                organizing sports events. Features authentication, event creation, live \
                updates, dashboards, and secure APIs built with modern MERN stack architecture.",
        tags: &["MongoDB", "Express.js", "React", "Node.js", "MERN"],
        accent: "from-blue-500 to-violet-500",
        category: "Full-Stack",
        featured: true,
    },
    ProjectEntry {
        title: "Salesforce LWC Student Portal",
        blurb: "Built a student resource access portal with authentication using Salesforce \
                Lightning Web Components and Apex. Custom Experience Cloud implementation \
                with announcements and course resources for enhanced student experience.",
        tags: &["Salesforce", "LWC", "Apex", "Experience Cloud"],
        accent: "from-green-500 to-blue-500",
        category: "Enterprise",
        featured: true,
    },
    ProjectEntry {
        title: "Game Launcher — Java OOP Hub",
        blurb: "Interactive gaming hub featuring multiple games (Flappy Bird, Tic Tac Toe, \
                etc.) with secure authentication system. Built using Java OOP principles \
                with MySQL database for user management and game statistics.",
        tags: &["Java", "MySQL", "OOP", "Game Development"],
        accent: "from-purple-500 to-pink-500",
        category: "Desktop",
        featured: true,
    },
    ProjectEntry {
        title: "E-commerce Computer Shop",
        blurb: "Marketplace for laptops and accessories built with C++ and Qt framework. \
                Features comprehensive login/signup/reset password functionality with \
                enhanced UI and SQLite database integration for inventory management.",
        tags: &["C++", "Qt", "SQLite", "DSA"],
        accent: "from-orange-500 to-red-500",
        category: "Desktop",
        featured: false,
    },
    ProjectEntry {
        title: "Zoho CRM Lead Merger Widget",
        blurb: "Automated lead merging functionality widget for Zoho CRM using APIs, \
                webhooks, and custom integrations. Streamlined CRM workflow automation \
                that reduces manual work and improves data consistency.",
        tags: &["Zoho CRM", "APIs", "Webhooks", "Automation"],
        accent: "from-cyan-500 to-blue-500",
        category: "Integration",
        featured: false,
    },
    ProjectEntry {
        title: "Student Management System",
        blurb: "Academic resources platform featuring comprehensive timetables, \
                announcements, and events management. Built with modern web technologies \
                and Firebase backend for real-time updates and seamless user experience.",
        tags: &["HTML", "CSS", "JavaScript", "Firebase"],
        accent: "from-emerald-500 to-teal-500",
        category: "Web",
        featured: false,
    },
    ProjectEntry {
        title: "Music Player — Web App",
        blurb: "Interactive audio player with modern UI features and smooth playback \
                controls. Built with vanilla JavaScript for optimal performance, featuring \
                playlist management, equalizer, and responsive design.",
        tags: &["HTML", "CSS", "JavaScript", "Audio API"],
        accent: "from-blue-500 to-violet-500",
        category: "Web",
        featured: false,
    },
    ProjectEntry {
        title: "Anime Hub — Interactive Website",
        blurb: "Anime-themed interactive website with engaging user interface and smooth \
                animations. Features content discovery, user engagement elements, and \
                responsive design for anime enthusiasts.",
        tags: &["HTML", "CSS", "JavaScript", "UI/UX"],
        accent: "from-purple-500 to-pink-500",
        category: "Web",
        featured: false,
    },
    ProjectEntry {
        title: "Salesforce Experience Cloud Portal",
        blurb: "Customized community portals with announcements and course resources using \
                Salesforce Experience Cloud. Enhanced user experience with custom branding, \
                navigation, and content management features.",
        tags: &["Salesforce", "Experience Cloud", "Community", "Custom Site"],
        accent: "from-green-500 to-blue-500",
        category: "Enterprise",
        featured: false,
    },
    ProjectEntry {
        title: "Console E-Commerce — Assembly Language",
        blurb: "Text-based e-commerce platform with authentication system built entirely \
                in Assembly language. Demonstrates advanced low-level programming expertise \
                with memory management and system calls.",
        tags: &["Assembly Language", "Console App", "Authentication", "Low-Level"],
        accent: "from-orange-500 to-red-500",
        category: "System",
        featured: false,
    },
];

pub fn featured_projects() -> &'static [ProjectEntry] {
    &PROJECT_CATALOG[..FEATURED_PROJECT_COUNT]
}

/// Filter predicate for the projects page: category match plus a
/// case-insensitive substring search over title, blurb and tags. An "All"
/// category and an empty query both pass everything.
pub fn project_matches(entry: &ProjectEntry, category: &str, query: &str) -> bool {
    if category != "All" && entry.category != category {
        return false;
    }
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    entry.title.to_lowercase().contains(&query)
        || entry.blurb.to_lowercase().contains(&query)
        || entry
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&query))
}
