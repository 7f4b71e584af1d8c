use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::data::{self, ProjectRecord};
use crate::state::{Action, PortfolioState, Theme};

const LOADING_DELAY_MS: u32 = 1_000;
const RESUME_PATH: &str = "/resume.pdf";
const CONTACT_EMAIL: &str = "mailto:smruti@example.com";
const LINKEDIN_URL: &str = "https://www.linkedin.com/";
const GITHUB_URL: &str = "https://github.com/";

impl Reducible for PortfolioState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::<dyn FnMut()>::new(move || {
        apply_theme(theme);
    });

    if start_view_transition
        .call1(&document_js, callback.as_ref().unchecked_ref())
        .is_err()
    {
        apply_theme(theme);
    }
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    label: AttrValue,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class="link"
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static ProjectRecord,
    on_select: Callback<&'static ProjectRecord>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let onclick = {
        let project = props.project;
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(project))
    };

    html! {
        <button type="button" class="project-card" onclick={onclick}>
            <h3>{props.project.title}</h3>
            <p>{props.project.short_description}</p>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    project: &'static ProjectRecord,
    on_close: Callback<()>,
}

#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop" role="dialog" aria-modal="true">
            <div class="modal">
                <h2>{props.project.title}</h2>
                <p>{props.project.details}</p>
                <p class="tech-stack">
                    <span class="muted">{"Tech Stack: "}</span>
                    {props.project.tech_stack}
                </p>
                <button type="button" class="modal-close" onclick={onclick}>
                    {"Close"}
                </button>
            </div>
        </div>
    }
}

fn projects_section(on_select: Callback<&'static ProjectRecord>) -> Html {
    let cards = if data::PROJECTS.is_empty() {
        html! { <p class="muted">{"No projects published yet."}</p> }
    } else {
        data::PROJECTS
            .iter()
            .map(|project| {
                html! {
                    <ProjectCard
                        key={project.title}
                        project={project}
                        on_select={on_select.clone()}
                    />
                }
            })
            .collect::<Html>()
    };

    html! {
        <section id="projects" class="section-block">
            <h2>{"Projects"}</h2>
            <div class="card-grid">{cards}</div>
        </section>
    }
}

#[function_component(App)]
fn app() -> Html {
    let state = use_reducer(PortfolioState::new);

    {
        let current = state.theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    // The timer handle lives inside the effect; dropping it on teardown
    // cancels the callback, so a stale fire can never reach the reducer.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let timer = Timeout::new(LOADING_DELAY_MS, move || {
                state.dispatch(Action::FinishLoading);
            });
            move || drop(timer)
        });
    }

    let on_toggle_theme = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let next = state.theme.toggled();
            apply_theme_with_transition(next);
            state.dispatch(Action::ToggleTheme);
        })
    };

    let on_select_project = {
        let state = state.clone();
        Callback::from(move |project: &'static ProjectRecord| {
            state.dispatch(Action::SelectProject(project));
        })
    };

    let on_close_detail = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            state.dispatch(Action::CloseProjectDetail);
        })
    };

    if state.is_loading() {
        return html! {
            <div class="loading-screen">{"Loading Portfolio..."}</div>
        };
    }

    let theme = state.theme;

    html! {
        <div class="page-shell">
            <nav class="site-header">
                <h1>{"Smruti Portfolio"}</h1>
                <div class="nav-links">
                    <a href="#projects">{"Projects"}</a>
                    <a href="#internships">{"Experience"}</a>
                    <a href="#contact">{"Contact"}</a>
                    <button
                        class="theme-toggle"
                        type="button"
                        aria-label={theme.toggle_label()}
                        aria-pressed={theme.pressed().to_string()}
                        onclick={on_toggle_theme}
                    >
                        <span aria-hidden="true">{theme.icon()}</span>
                    </button>
                </div>
            </nav>

            <header class="hero">
                <h1>{"Smruti Dadasaheb Parkale"}</h1>
                <p class="tagline">{"Web Developer • Computer Engineer"}</p>

                <div class="social-row">
                    <ExternalLink href={LINKEDIN_URL} label="LinkedIn" />
                    <ExternalLink href={GITHUB_URL} label="GitHub" />
                    <a class="link" href={CONTACT_EMAIL}>{"Email"}</a>
                </div>

                <a class="resume-button" href={RESUME_PATH} download="">
                    {"Download Resume"}
                </a>
            </header>

            <main>
                <section class="section-block">
                    <h2>{"About Me"}</h2>
                    <p>
                        {"Passionate Computer Engineering student with full-stack \
                          development, ML, APIs, and system design skills."}
                    </p>

                    <div class="card">
                        <h3>{"Social Contribution"}</h3>
                        <ul>
                            <li>{"Active NSS Volunteer contributing to social awareness campaigns."}</li>
                            <li>{"Worked as Discipline Coordinator in college events."}</li>
                        </ul>
                    </div>
                </section>

                <section id="internships" class="section-block">
                    <h2>{"Internship & Experience"}</h2>

                    <div class="card">
                        <h3>{"Web Developer Intern — Microcare Computer Systems"}</h3>
                        <ul>
                            <li>{"Developed Call Log Management System with filtering & CSV export."}</li>
                            <li>{"Improved backend functionality using PHP & MySQL."}</li>
                        </ul>
                    </div>

                    <div class="card">
                        <h3>{"Frontend Intern — SkillBit Technologies"}</h3>
                        <ul>
                            <li>{"Improved dashboards UI and responsiveness."}</li>
                        </ul>
                    </div>

                    <div class="card">
                        <h3>{"AI/ML Intern — Edunet Foundation"}</h3>
                        <ul>
                            <li>{"Built ML models with Python, NumPy, pandas, sklearn."}</li>
                        </ul>
                    </div>
                </section>

                {projects_section(on_select_project)}

                <section class="section-block">
                    <h2>{"Achievements"}</h2>
                    <div class="card-grid">
                        <div class="card accent-indigo">
                            <h3>{"🏆 State-Level Paper Presentation Winner"}</h3>
                        </div>
                        <div class="card accent-purple">
                            <h3>{"🎓 Lila Poonawalla Foundation Scholar"}</h3>
                        </div>
                        <div class="card accent-pink">
                            <h3>{"🥇 Project Competition Winner"}</h3>
                        </div>
                        <div class="card accent-green">
                            <h3>{"📜 Completed 6-week Industrial Training at Microcare"}</h3>
                        </div>
                    </div>
                </section>

                <section id="contact" class="section-block contact">
                    <h2>{"Contact"}</h2>
                    <p>{"Feel free to reach out to me:"}</p>
                    <div class="social-row">
                        <a class="link" href={CONTACT_EMAIL}>{"Email"}</a>
                        <ExternalLink href={LINKEDIN_URL} label="LinkedIn" />
                        <ExternalLink href={GITHUB_URL} label="GitHub" />
                    </div>
                </section>
            </main>

            if let Some(project) = state.selected_project {
                <ProjectModal project={project} on_close={on_close_detail} />
            }

            <footer class="site-footer">
                {"© 2025 Smruti Parkale. All Rights Reserved."}
            </footer>
        </div>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
