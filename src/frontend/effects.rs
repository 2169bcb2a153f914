use super::hooks::{
    prefers_reduced_motion, use_in_view_once, use_scroll_y, AnimationLoop,
};
use devfolio::{
    motion::{format_counter, translate_y_css, CounterAnimation, DEFAULT_COUNTER_DURATION_SECS, PARALLAX_FAR, PARALLAX_NEAR},
    particles::{scatter, DriftProfile, HERO_FIELD},
    scene::{ScenePose, SATELLITE_COLORS},
};
use yew::prelude::*;

const SCENE_UNIT_PX: f64 = 42.0;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub target: f64,
    #[prop_or(DEFAULT_COUNTER_DURATION_SECS)]
    pub duration_secs: f64,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view_once(node.clone());
    let count = use_state_eq(|| 0_u64);

    {
        let count = count.clone();
        use_effect_with(
            (in_view, props.target, props.duration_secs),
            move |(in_view, target, duration_secs)| {
                let mut animation = CounterAnimation::new(*target, *duration_secs);
                let frames = if !*in_view {
                    None
                } else if prefers_reduced_motion() {
                    count.set(animation.final_value());
                    None
                } else {
                    Some(AnimationLoop::start(move |now| {
                        let frame = animation.frame(now);
                        count.set(frame.value);
                        !frame.done
                    }))
                };

                move || drop(frames)
            },
        );
    }

    html! {
        <span ref={node} class="counter">{format_counter(*count, &props.suffix)}</span>
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealKind {
    #[default]
    Rise,
    FromLeft,
    FromRight,
    Pop,
    Fade,
}

impl RevealKind {
    fn class(self) -> &'static str {
        match self {
            Self::Rise => "reveal--rise",
            Self::FromLeft => "reveal--from-left",
            Self::FromRight => "reveal--from-right",
            Self::Pop => "reveal--pop",
            Self::Fade => "reveal--fade",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub kind: RevealKind,
    #[prop_or_default]
    pub delay_secs: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Plays a CSS entrance transition the first time its content scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_in_view_once(node.clone());
    let style = format!("--reveal-delay: {:.2}s;", props.delay_secs);

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.kind.class(), revealed.then_some("is-revealed"), props.class.clone())}
            style={style}
        >
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MeterProps {
    pub level: u8,
    pub gradient: AttrValue,
    #[prop_or_default]
    pub delay_secs: f64,
}

/// Percentage bar that fills once it becomes visible.
#[function_component(Meter)]
pub fn meter(props: &MeterProps) -> Html {
    let node = use_node_ref();
    let filled = use_in_view_once(node.clone());
    let width = if filled { props.level.min(100) } else { 0 };
    let style = format!(
        "width: {width}%; transition-delay: {:.2}s;",
        props.delay_secs
    );

    html! {
        <div ref={node} class="meter" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow={props.level.to_string()}>
            <div class={classes!("meter-fill", format!("gradient--{}", props.gradient))} style={style} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ParticleFieldProps {
    pub profile: DriftProfile,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ParticleField)]
pub fn particle_field(props: &ParticleFieldProps) -> Html {
    let profile = props.profile;
    let particles = use_state(move || scatter(&profile, &mut fastrand::Rng::new()));

    html! {
        <div class={classes!("particle-field", props.class.clone())} aria-hidden="true">
            { for particles.iter().map(|particle| html! {
                <span
                    class={classes!("particle", particle.tint.class())}
                    style={particle.style(&profile)}
                />
            })}
        </div>
    }
}

/// Fixed page backdrop: gradient wash, two parallax glows, grid and particles.
#[function_component(ParallaxBackdrop)]
pub fn parallax_backdrop() -> Html {
    let scroll_y = use_scroll_y();

    html! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop-base" />
            <div class="backdrop-glow backdrop-glow--near" style={translate_y_css(PARALLAX_NEAR.sample(scroll_y))} />
            <div class="backdrop-glow backdrop-glow--far" style={translate_y_css(PARALLAX_FAR.sample(scroll_y))} />
            <div class="backdrop-grid" />
            <ParticleField profile={HERO_FIELD} />
        </div>
    }
}

#[function_component(OrbitScene)]
pub fn orbit_scene() -> Html {
    let pose = use_state(|| ScenePose::at(0.0));

    {
        let pose = pose.clone();
        use_effect_with((), move |_| {
            let frames = if prefers_reduced_motion() {
                None
            } else {
                let mut started_at: Option<f64> = None;
                Some(AnimationLoop::start(move |now| {
                    let start = *started_at.get_or_insert(now);
                    pose.set(ScenePose::at((now - start) / 1000.0));
                    true
                }))
            };

            move || drop(frames)
        });
    }

    html! {
        <div class="orbit-stage" aria-hidden="true">
            <div class="orbit-group" style={pose.group_transform()}>
                <div class="orbit-core" />
                { for pose.satellites.iter().zip(SATELLITE_COLORS).map(|(satellite, color)| html! {
                    <div
                        class="orbit-satellite"
                        style={format!("{} --satellite-color: {color};", satellite.transform(SCENE_UNIT_PX))}
                    />
                })}
                <div class="orbit-ring orbit-ring--equator" />
                <div class="orbit-ring orbit-ring--meridian" />
            </div>
        </div>
    }
}
