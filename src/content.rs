//! Static site content. The section components iterate these records
//! directly, so the site's copy lives in one place.

pub const OWNER: &str = "Dana Reyes";
pub const TAGLINE: &str = "Full-Stack Developer | Rust & TypeScript";
pub const SITE_URL: &str = "https://danareyes.dev";

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub live_demo: &'static str,
    pub source_code: &'static str,
}

pub struct Skill {
    pub name: &'static str,
    pub percentage: u8,
}

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    /// devicon class rendered as `<i class=...>`
    pub icon: &'static str,
}

pub struct Education {
    pub level: &'static str,
    pub degree: &'static str,
    pub year: &'static str,
    pub school: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Driftline (Project Tracker)",
        description: "Project management platform with team boards, task tracking, and burndown analytics. Server-rendered with Leptos and Axum for fast first paint on slow connections.",
        image: "/images/project1.svg",
        technologies: &["Rust", "Leptos", "Axum", "PostgreSQL"],
        live_demo: "https://driftline.danareyes.dev",
        source_code: "https://github.com/danareyes/driftline",
    },
    Project {
        title: "Summit Log",
        description: "A hiking and fitness tracker with workout logging, elevation profiles, and progress sharing. React frontend backed by a Node.js API.",
        image: "/images/project2.svg",
        technologies: &["React", "TypeScript", "Node.js", "MongoDB"],
        live_demo: "https://summit-log.vercel.app",
        source_code: "https://github.com/danareyes/summit-log",
    },
    Project {
        title: "SaaS Landing Page",
        description: "A high-performance SaaS landing page with dark/light mode, interactive pricing, and full responsiveness. Ships almost no client JavaScript.",
        image: "/images/project3.svg",
        technologies: &["Next.js", "TypeScript", "Tailwind CSS"],
        live_demo: "https://saas-landing.danareyes.dev",
        source_code: "https://github.com/danareyes/saas-landing-page",
    },
    Project {
        title: "Campus Landing Page",
        description: "A modern college landing page with program listings and an application funnel, deployed on Vercel with automatically synced deployments.",
        image: "/images/project4.svg",
        technologies: &["Next.js", "TypeScript", "MongoDB"],
        live_demo: "https://campus-landing.vercel.app",
        source_code: "https://github.com/danareyes/campus-landing-page",
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "Rust", percentage: 90 },
    Skill { name: "TypeScript", percentage: 92 },
    Skill { name: "React", percentage: 88 },
    Skill { name: "Next.js", percentage: 85 },
    Skill { name: "Node.js", percentage: 82 },
    Skill { name: "PostgreSQL", percentage: 80 },
    Skill { name: "MongoDB", percentage: 76 },
    Skill { name: "Tailwind CSS", percentage: 86 },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        url: "https://github.com/danareyes",
        icon: "devicon-github-plain",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com/in/danareyes",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        name: "Twitter",
        url: "https://twitter.com/danareyesdev",
        icon: "devicon-twitter-original",
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        level: "University",
        degree: "BSc Computer Science",
        year: "2018 - 2022",
        school: "Portland State University",
    },
    Education {
        level: "College",
        degree: "AS Computer Programming",
        year: "2016 - 2018",
        school: "Portland Community College",
    },
    Education {
        level: "Secondary",
        degree: "High School Diploma",
        year: "2012 - 2016",
        school: "Lincoln High School",
    },
];

/// Filter choices for the project grid: "All" plus each technology in
/// first-appearance order.
pub fn technology_filters() -> Vec<&'static str> {
    let mut filters = vec!["All"];
    for project in PROJECTS {
        for &tech in project.technologies {
            if !filters.contains(&tech) {
                filters.push(tech);
            }
        }
    }
    filters
}
