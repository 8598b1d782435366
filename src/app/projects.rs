use leptos::{html, prelude::*};

use crate::content::{technology_filters, Project, PROJECTS};

#[component]
pub fn ProjectsSection(section_ref: NodeRef<html::Section>) -> impl IntoView {
    let (selected, set_selected) = signal("All");

    view! {
        <section node_ref=section_ref id="projects" class="py-20 section-content">
            <div class="max-w-6xl mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">"Featured Projects"</h2>
                <div class="flex flex-wrap justify-center gap-2 mb-12">
                    {technology_filters()
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <button
                                    class=move || {
                                        if selected.get() == tech {
                                            "px-4 py-1.5 rounded-full text-sm bg-cyan/30 text-cyan border border-cyan/40"
                                        } else {
                                            "px-4 py-1.5 rounded-full text-sm bg-brightBlack/30 text-muted border border-muted/20 hover:text-foreground"
                                        }
                                    }
                                    on:click=move |_| set_selected.set(tech)
                                >
                                    {if tech == "All" { "All Projects" } else { tech }}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {move || {
                        let selected = selected.get();
                        PROJECTS
                            .iter()
                            .filter(|p| selected == "All" || p.technologies.contains(&selected))
                            .map(|project| view! { <ProjectCard project /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="rounded-lg overflow-hidden bg-brightBlack/30 border border-muted/20 hover:border-cyan/40 transition-colors">
            <img
                src=project.image
                alt=project.title
                width="400"
                height="250"
                class="w-full h-48 object-cover"
            />
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                <p class="text-sm text-muted mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .technologies
                        .iter()
                        .map(|&tech| {
                            view! {
                                <span class="text-xs px-2 py-0.5 rounded bg-cyan/20 text-cyan">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-3">
                    <a
                        href=project.live_demo
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex-1 text-center py-2 rounded-md bg-cyan/20 hover:bg-cyan/30 text-cyan font-medium transition-colors"
                    >
                        "Live Demo"
                    </a>
                    <a
                        href=project.source_code
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex-1 text-center py-2 rounded-md border border-muted/40 hover:border-cyan/40 font-medium transition-colors"
                    >
                        "Source Code"
                    </a>
                </div>
            </div>
        </div>
    }
}
