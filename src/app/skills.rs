use leptos::{html, prelude::*};

use crate::content::SKILLS;

#[component]
pub fn SkillsSection(section_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section node_ref=section_ref id="skills" class="py-20 section-content">
            <div class="max-w-4xl mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">
                    "My " <span class="text-cyan">"Skills"</span>
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-x-12 gap-y-6">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <div>
                                    <div class="flex justify-between mb-1">
                                        <span class="font-medium">{skill.name}</span>
                                        <span class="text-sm text-muted">
                                            {format!("{}%", skill.percentage)}
                                        </span>
                                    </div>
                                    <div class="h-2 rounded-full bg-brightBlack/50">
                                        <div
                                            class="h-2 rounded-full bg-cyan skill-bar"
                                            style=format!("width: {}%", skill.percentage)
                                        ></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
