use super::{
    effects::{AnimatedCounter, Meter, OrbitScene, ParticleField, Reveal, RevealKind},
    hooks::{use_active_section, use_header_scrolled, use_page_progress, use_view_progress},
};
use devfolio::{
    content::{
        self, ContactLink, Experience, Section, ABOUT_PARAGRAPHS, CONTACT_LINKS, EDUCATION,
        EXPERIENCES, FLOATING_GLYPHS, FOOTER_NOTE, GITHUB_LINK, HERO_STATS, INTERESTS, LANGUAGES,
        LINKEDIN_LINK, NAV_ITEMS, PROFILE, PROJECTS_LIST, RESUME_LINK, SKILLS_LIST, STATUS_ITEMS,
        STRENGTHS,
    },
    motion::{translate_y_css, RevealStyle, PROJECTS_DRIFT, SKILLS_DRIFT},
    particles::ABOUT_CARD_FIELD,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct SectionHeadingProps {
    badge: AttrValue,
    title: AttrValue,
    subtitle: AttrValue,
}

#[function_component(SectionHeading)]
fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <Reveal class={classes!("section-heading")}>
            <span class="pill">{props.badge.clone()}</span>
            <h2 class="gradient-text">{props.title.clone()}</h2>
            <p class="section-subtitle">{props.subtitle.clone()}</p>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
struct LinkButtonProps {
    link: ContactLink,
    #[prop_or_default]
    class: Classes,
}

#[function_component(LinkButton)]
fn link_button(props: &LinkButtonProps) -> Html {
    let link = props.link;
    let target = link.opens_new_tab().then_some("_blank");
    let rel = link.opens_new_tab().then_some("noopener noreferrer");
    let download = link.is_download().then_some("");

    html! {
        <a
            class={classes!("button", props.class.clone())}
            href={link.href}
            target={target}
            rel={rel}
            download={download}
        >
            {link.label}
            <span class="button-arrow" aria-hidden="true">{"→"}</span>
        </a>
    }
}

fn nav_link(section: Section, active: bool, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <a
            class={classes!("nav-link", active.then_some("is-active"))}
            href={section.href()}
            aria-current={active.then_some("location")}
            onclick={onclick}
        >
            {section.label}
        </a>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let scrolled = use_header_scrolled();
    let active = use_active_section();
    let menu_open = use_state(|| false);

    let on_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_navigate = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let toggle_label = if *menu_open { "Close menu" } else { "Open menu" };

    html! {
        <header class={classes!("site-header", scrolled.then_some("is-scrolled"))}>
            <div class="container header-row">
                <a class="brand gradient-text" href={content::HOME.href()}>{PROFILE.brand}</a>

                <nav class="nav-desktop" aria-label="Primary">
                    { for NAV_ITEMS.iter().map(|section| nav_link(*section, active == Some(*section), Callback::noop())) }
                    <LinkButton link={RESUME_LINK} class={classes!("button--small")} />
                </nav>

                <button
                    class="menu-toggle"
                    type="button"
                    aria-label={toggle_label}
                    aria-expanded={(*menu_open).to_string()}
                    onclick={on_toggle}
                >
                    <span aria-hidden="true">{if *menu_open { "✕" } else { "☰" }}</span>
                </button>
            </div>

            if *menu_open {
                <nav class="nav-mobile" aria-label="Mobile">
                    { for NAV_ITEMS.iter().map(|section| nav_link(*section, active == Some(*section), on_navigate.clone())) }
                    <LinkButton link={RESUME_LINK} class={classes!("button--block")} />
                </nav>
            }
        </header>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id={content::HOME.id} class="hero">
            <div class="container hero-grid">
                <div class="hero-copy">
                    <Reveal kind={RevealKind::FromLeft}>
                        <span class="pill">{"Available for hire"}</span>
                    </Reveal>
                    <Reveal kind={RevealKind::Rise} delay_secs={0.1}>
                        <h1 class="hero-title">
                            {"Hi, I'm "}
                            <span class="gradient-text">{PROFILE.name}</span>
                        </h1>
                        <p class="hero-role">
                            {PROFILE.role}{" & "}
                            <span class="gradient-text gradient-text--cool">{PROFILE.specialty}</span>
                        </p>
                        <p class="hero-summary">{PROFILE.summary}</p>
                    </Reveal>

                    <Reveal kind={RevealKind::Rise} delay_secs={0.2} class={classes!("hero-stats")}>
                        { for HERO_STATS.iter().map(|stat| html! {
                            <div class="stat">
                                <div class="stat-value gradient-text">
                                    <AnimatedCounter target={stat.target} suffix={stat.suffix} />
                                </div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        })}
                    </Reveal>

                    <Reveal kind={RevealKind::Rise} delay_secs={0.3} class={classes!("hero-actions")}>
                        <a class="button" href={content::CONTACT.href()}>
                            {"Hire Me Now"}
                            <span class="button-arrow" aria-hidden="true">{"→"}</span>
                        </a>
                        <LinkButton link={RESUME_LINK} class={classes!("button--outline")} />
                    </Reveal>

                    <Reveal kind={RevealKind::Fade} delay_secs={0.4} class={classes!("hero-contact")}>
                        <span>{PROFILE.email}</span>
                        <span>{PROFILE.phone}</span>
                        <span>{PROFILE.location}</span>
                    </Reveal>
                </div>

                <Reveal kind={RevealKind::Pop} delay_secs={0.2} class={classes!("hero-scene")}>
                    <OrbitScene />
                </Reveal>
            </div>

            <a class="scroll-cue" href={content::SKILLS.href()}>
                <span>{"Scroll to explore"}</span>
                <span class="scroll-cue-arrow" aria-hidden="true">{"⌄"}</span>
            </a>
        </section>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    let progress = use_page_progress();

    html! {
        <section id={content::SKILLS.id} class="section">
            <div class="container" style={translate_y_css(SKILLS_DRIFT.sample(progress))}>
                <SectionHeading
                    badge="Technical Skills"
                    title="Technical Expertise"
                    subtitle="Mastering modern web technologies to build exceptional digital experiences"
                />
                <div class="skills-grid">
                    { for SKILLS_LIST.iter().enumerate().map(|(index, skill)| {
                        let delay = index as f64 * 0.1;
                        html! {
                            <Reveal kind={RevealKind::Rise} delay_secs={delay} class={classes!("card", "skill-card")}>
                                <div class="skill-logo">
                                    <img src={skill.logo} alt={format!("{} logo", skill.name)} loading="lazy" />
                                </div>
                                <h3>{skill.name}</h3>
                                <Meter level={skill.level} gradient={skill.gradient} delay_secs={delay + 0.3} />
                                <span class="muted">{format!("{}%", skill.level)}</span>
                            </Reveal>
                        }
                    })}
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TimelineCardProps {
    experience: Experience,
    index: usize,
}

#[function_component(TimelineCard)]
fn timeline_card(props: &TimelineCardProps) -> Html {
    let node = use_node_ref();
    let progress = use_view_progress(node.clone());
    let experience = props.experience;
    let stagger = props.index as f64 * 0.2;

    html! {
        <div ref={node} class="timeline-item" style={RevealStyle::at(progress).css()}>
            <span class="timeline-dot" aria-hidden="true" />
            <Reveal kind={RevealKind::FromRight} delay_secs={stagger + 0.3} class={classes!("card", "timeline-card")}>
                <h3>{experience.title}</h3>
                <p class="timeline-employer gradient-text">{experience.employer}</p>
                <p class="timeline-meta">
                    <span>{experience.period}</span>
                    <span>{experience.location}</span>
                </p>
                <p class="timeline-description">{experience.description}</p>
                <h4>{"Key Achievements"}</h4>
                <ul class="achievements">
                    { for experience.achievements.iter().map(|achievement| html! {
                        <li>{*achievement}</li>
                    })}
                </ul>
                <div class="tags">
                    { for experience.technologies.iter().map(|tech| html! {
                        <span class="tag">{*tech}</span>
                    })}
                </div>
            </Reveal>
        </div>
    }
}

#[function_component(ExperienceTimeline)]
pub fn experience_timeline() -> Html {
    html! {
        <section id={content::EXPERIENCE.id} class="section">
            <div class="container">
                <SectionHeading
                    badge="Professional Journey"
                    title="Experience Timeline"
                    subtitle="Building impactful solutions across diverse industries and technologies"
                />
                <div class="timeline">
                    <span class="timeline-line" aria-hidden="true" />
                    { for EXPERIENCES.iter().enumerate().map(|(index, experience)| html! {
                        <TimelineCard experience={*experience} index={index} />
                    })}
                </div>
                <Reveal kind={RevealKind::Rise} delay_secs={0.5} class={classes!("timeline-cta")}>
                    <p class="muted">{"Ready to add your company to this timeline?"}</p>
                    <a class="button" href={content::CONTACT.href()}>{"Let's Talk"}</a>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let progress = use_page_progress();

    html! {
        <section id={content::PROJECTS.id} class="section">
            <div class="container" style={translate_y_css(PROJECTS_DRIFT.sample(progress))}>
                <SectionHeading
                    badge="Featured Work"
                    title="Featured Projects"
                    subtitle="Showcasing innovative solutions that drive real business impact"
                />
                <div class="projects-grid">
                    { for PROJECTS_LIST.iter().enumerate().map(|(index, project)| html! {
                        <Reveal kind={RevealKind::Rise} delay_secs={index as f64 * 0.2} class={classes!("card", "project-card")}>
                            <div class="project-media">
                                <img src={project.image} alt={project.title} loading="lazy" />
                            </div>
                            <div class="project-body">
                                <h3>{project.title}</h3>
                                <p>{project.description}</p>
                                <div class="tags">
                                    { for project.tech.iter().map(|tech| html! {
                                        <span class="tag">{*tech}</span>
                                    })}
                                </div>
                                <ul class="highlights">
                                    { for project.highlights.iter().map(|highlight| html! {
                                        <li>{*highlight}</li>
                                    })}
                                </ul>
                                <dl class="metrics">
                                    { for project.metrics.iter().map(|(name, value)| html! {
                                        <div class="metric">
                                            <dd class="gradient-text">{*value}</dd>
                                            <dt>{*name}</dt>
                                        </div>
                                    })}
                                </dl>
                            </div>
                        </Reveal>
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={content::ABOUT.id} class="section about">
            <div class="floating-glyphs" aria-hidden="true">
                { for FLOATING_GLYPHS.iter().enumerate().map(|(index, glyph)| html! {
                    <span class="floating-glyph gradient-text" style={glyph.style(index)}>{glyph.text}</span>
                })}
            </div>
            <div class="container">
                <SectionHeading
                    badge="About Me"
                    title="About Me"
                    subtitle="The person behind the code - passionate, dedicated, and ready to make an impact"
                />
                <div class="about-grid">
                    <Reveal kind={RevealKind::FromLeft} class={classes!("about-story")}>
                        <h3 class="gradient-text">{"Why Choose Me?"}</h3>
                        { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                        <div class="about-facts">
                            <div>
                                <h4>{"Education"}</h4>
                                { for EDUCATION.iter().map(|education| html! {
                                    <div class="education">
                                        <p class="strong">{education.degree}</p>
                                        <p class="muted">{format!("{} • {}", education.school, education.years)}</p>
                                    </div>
                                })}
                            </div>
                            <div>
                                <h4>{"Languages"}</h4>
                                <ul class="languages">
                                    { for LANGUAGES.iter().map(|language| html! {
                                        <li class={classes!(language.native.then_some("is-native"))}>
                                            {format!("{} ({})", language.name, language.fluency)}
                                        </li>
                                    })}
                                </ul>
                            </div>
                        </div>
                    </Reveal>

                    <Reveal kind={RevealKind::FromRight} class={classes!("card", "about-card")}>
                        <ParticleField profile={ABOUT_CARD_FIELD} />
                        <div class="about-profile">
                            <div class="avatar" aria-hidden="true">
                                <span class="avatar-ring" />
                                <span class="avatar-ring avatar-ring--inner" />
                                <span class="avatar-core">{"👤"}</span>
                                <span class="avatar-status" />
                            </div>
                            <h3 class="gradient-text">{"Ready to Contribute"}</h3>
                            <p class="muted">{"Looking for opportunities to grow and make an impact"}</p>
                        </div>

                        <div class="status-list">
                            { for STATUS_ITEMS.iter().enumerate().map(|(index, item)| html! {
                                <Reveal kind={RevealKind::FromRight} delay_secs={0.4 + index as f64 * 0.1} class={classes!("status-item")}>
                                    <span class="muted">{format!("{} {}", item.icon, item.label)}</span>
                                    <span class="gradient-text strong">{item.value}</span>
                                </Reveal>
                            })}
                        </div>

                        <div class="strengths">
                            <h4>{"Core Strengths"}</h4>
                            { for STRENGTHS.iter().enumerate().map(|(index, strength)| html! {
                                <div class="strength">
                                    <div class="strength-row">
                                        <span>{strength.name}</span>
                                        <span class="gradient-text strong">{format!("{}%", strength.level)}</span>
                                    </div>
                                    <Meter level={strength.level} gradient={strength.gradient} delay_secs={0.8 + index as f64 * 0.1} />
                                </div>
                            })}
                        </div>

                        <div class="interests">
                            <h4>{"Interests & Hobbies"}</h4>
                            <div class="tags">
                                { for INTERESTS.iter().enumerate().map(|(index, interest)| html! {
                                    <Reveal kind={RevealKind::Pop} delay_secs={0.8 + index as f64 * 0.1} class={classes!("tag")}>
                                        {*interest}
                                    </Reveal>
                                })}
                            </div>
                        </div>

                        <div class="about-cta">
                            <p class="strong">{"🚀 Ready to start immediately!"}</p>
                            <p class="muted">{"Let's build something amazing together"}</p>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={content::CONTACT.id} class="section">
            <div class="container">
                <SectionHeading
                    badge="Get In Touch"
                    title="Let's Work Together"
                    subtitle="Ready to bring your ideas to life? I'm available for full-time opportunities and exciting projects."
                />
                <Reveal kind={RevealKind::Rise} class={classes!("card", "contact-card")}>
                    <div class="contact-details">
                        <h3>{"Get In Touch"}</h3>
                        <p>
                            {"I'm always interested in hearing about new opportunities and exciting projects. \
                              Let's discuss how I can contribute to your team's success."}
                        </p>
                        <div class="contact-item">
                            <h4>{"Email"}</h4>
                            <p>{PROFILE.email}</p>
                        </div>
                        <div class="contact-item">
                            <h4>{"Phone"}</h4>
                            <p>{PROFILE.phone}</p>
                        </div>
                        <div class="contact-item">
                            <h4>{"Location"}</h4>
                            <p>{PROFILE.location}</p>
                        </div>
                    </div>
                    <div class="contact-actions">
                        { for CONTACT_LINKS.iter().map(|link| html! {
                            <LinkButton link={*link} class={classes!("button--block")} />
                        })}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let social = [GITHUB_LINK, LINKEDIN_LINK, content::EMAIL_LINK];

    html! {
        <footer class="site-footer">
            <Reveal kind={RevealKind::Fade} class={classes!("container", "footer-row")}>
                <div>
                    <p>{format!("© 2024 {}. {FOOTER_NOTE}", PROFILE.name)}</p>
                    <p class="muted">{"Crafted with passion and attention to detail"}</p>
                </div>
                <div class="footer-links">
                    { for social.iter().map(|link| html! {
                        <a
                            class="footer-link"
                            href={link.href}
                            target={link.opens_new_tab().then_some("_blank")}
                            rel={link.opens_new_tab().then_some("noopener noreferrer")}
                        >
                            {footer_label(link)}
                        </a>
                    })}
                </div>
            </Reveal>
        </footer>
    }
}

fn footer_label(link: &ContactLink) -> &'static str {
    match link.kind {
        content::LinkKind::GitHub => "GitHub",
        content::LinkKind::LinkedIn => "LinkedIn",
        content::LinkKind::Email => "Email",
        content::LinkKind::Resume => "Resume",
    }
}
