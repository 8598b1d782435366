use leptos::{html, prelude::*};

use crate::content::{OWNER, TAGLINE};

#[component]
pub fn HeroSection(section_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section
            node_ref=section_ref
            id="hero"
            class="min-h-screen flex items-center justify-center section-content"
        >
            <div class="text-center px-4">
                <img
                    src="/images/avatar.svg"
                    alt=format!("{OWNER}'s Avatar")
                    width="200"
                    height="200"
                    class="w-48 h-48 mx-auto mb-8 rounded-full border-4 border-cyan/40"
                />
                <h1 class="text-4xl md:text-5xl font-bold mb-4">{OWNER}</h1>
                <p class="text-lg md:text-xl text-muted mb-8">{TAGLINE}</p>
                <div class="flex flex-wrap justify-center gap-4">
                    <a
                        href="#projects"
                        class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                    >
                        "View Projects"
                    </a>
                    <a
                        href="/DanaReyesResume.pdf"
                        target="_blank"
                        rel="noreferrer"
                        class="px-6 py-3 rounded-md font-medium border border-muted/40 hover:border-cyan/40 transition-all duration-200"
                    >
                        "Download CV"
                    </a>
                </div>
            </div>
        </section>
    }
}
