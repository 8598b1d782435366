mod about;
mod contact;
mod footer;
mod hero;
mod navigation;
mod projects;
mod skills;
mod theme;

use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutSection;
use contact::ContactSection;
use footer::Footer;
use hero::HeroSection;
use navigation::Navigation;
use projects::ProjectsSection;
use skills::SkillsSection;
use theme::{provide_theme, ThemeSignal};

use crate::content::{OWNER, SITE_URL, TAGLINE};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/svg+xml" href="/favicon.svg" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@v2.16.0/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=format!("{OWNER}'s Portfolio - {TAGLINE}") />
        <Meta
            name="description"
            content=format!(
                "Professional portfolio of {OWNER}, a full-stack developer specializing in Rust and TypeScript. View projects, skills, and get in touch.",
            )
        />
        <Meta
            name="keywords"
            content="Portfolio, Full-Stack Developer, Rust, Leptos, TypeScript, React, Next.js, Web Development"
        />
        <Meta name="author" content=OWNER />

        <Meta property="og:title" content=format!("{OWNER}'s Portfolio - {TAGLINE}") />
        <Meta
            property="og:description"
            content="Professional portfolio showcasing Rust and TypeScript expertise, full-stack projects, and web development skills."
        />
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=SITE_URL />
        <Meta property="og:image" content="/images/avatar.svg" />

        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=format!("{OWNER}'s Portfolio - {TAGLINE}") />
        <Meta
            name="twitter:description"
            content="Professional portfolio showcasing Rust and TypeScript expertise, full-stack projects, and web development skills."
        />
        <Meta name="twitter:image" content="/images/avatar.svg" />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let ThemeSignal(theme) = provide_theme();

    let hero_ref = NodeRef::<html::Section>::new();
    let about_ref = NodeRef::<html::Section>::new();
    let skills_ref = NodeRef::<html::Section>::new();
    let projects_ref = NodeRef::<html::Section>::new();
    let contact_ref = NodeRef::<html::Section>::new();

    view! {
        <div
            class="min-h-screen bg-background text-foreground"
            data-theme=move || theme.get().attribute()
        >
            <Navigation section_refs=[hero_ref, about_ref, skills_ref, projects_ref, contact_ref] />
            <main>
                <HeroSection section_ref=hero_ref />
                <AboutSection section_ref=about_ref />
                <SkillsSection section_ref=skills_ref />
                <ProjectsSection section_ref=projects_ref />
                <ContactSection section_ref=contact_ref />
            </main>
            <Footer />
        </div>
    }
}
