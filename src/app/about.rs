use leptos::{html, prelude::*};

use crate::content::{EDUCATION, SOCIAL_LINKS};

#[component]
pub fn AboutSection(section_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section node_ref=section_ref id="about" class="py-20 section-content">
            <div class="max-w-6xl mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">
                    "My " <span class="text-cyan">"Background"</span>
                </h2>
                <div class="flex flex-col lg:flex-row gap-12">
                    <div class="flex-1">
                        <h3 class="text-xl font-bold mb-4">"About Me"</h3>
                        <p class="text-base mb-4 leading-relaxed">
                            "I'm a full-stack developer focused on Rust and TypeScript, dedicated to building performant, reliable web applications. My strength lies in systematic problem-solving. I like tracing issues to their root and delivering clean, maintainable fixes."
                        </p>
                        <p class="text-base mb-4 leading-relaxed">
                            "I believe great software balances speed with structure. Whether shipping server-rendered interfaces or building careful APIs, I write intentional, type-safe code designed to last."
                        </p>
                        <p class="text-base mb-4 leading-relaxed">
                            "Beyond my core stack I enjoy poking at new technologies and developer tools. When I'm not coding, you might find me contributing to open source, working through a hard puzzle, or out on a long trail run."
                        </p>
                        <h3 class="text-xl font-bold mb-4 mt-8">"What's Next?"</h3>
                        <p class="text-base mb-4 leading-relaxed">
                            "I'm currently looking for opportunities to bring high-impact projects to life. If you're building a new product, scaling an existing platform, or just want to talk through a gnarly tech problem, I'd love to connect."
                        </p>
                    </div>
                    <div class="flex-1">
                        <h3 class="text-xl font-bold mb-4">"Education Background"</h3>
                        <div class="space-y-4">
                            {EDUCATION
                                .iter()
                                .map(|edu| {
                                    view! {
                                        <div class="bg-brightBlack/30 p-4 rounded-md border border-muted/20 hover:border-cyan/40 transition-colors">
                                            <span class="text-sm text-cyan font-medium">{edu.year}</span>
                                            <h4 class="font-bold mt-1">{edu.degree}</h4>
                                            <p class="text-muted">{edu.school}</p>
                                            <span class="inline-block mt-2 text-xs px-2 py-0.5 rounded bg-cyan/20 text-cyan">
                                                {edu.level}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div class="text-center mt-12">
                    <h3 class="text-xl font-bold mb-6">"Connect With Me"</h3>
                    <div class="flex justify-center gap-6">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-2xl text-muted hover:text-cyan transition-colors"
                                        aria-label=format!("Visit {} profile", link.name)
                                    >
                                        <i class=link.icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
