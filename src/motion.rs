//! Scroll-linked interpolation and the one-shot counter clock.
//!
//! Everything here is a pure function of its inputs so the browser layer only
//! has to feed in timestamps and geometry.

pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;
pub const DEFAULT_COUNTER_DURATION_SECS: f64 = 2.0;

/// Breakpoint table mapping an input (scroll pixels or a progress fraction)
/// to an output value. Stops must be ascending and match `values` in length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    stops: &'static [f64],
    values: &'static [f64],
}

impl Track {
    pub const fn new(stops: &'static [f64], values: &'static [f64]) -> Self {
        Self { stops, values }
    }

    pub fn sample(&self, input: f64) -> f64 {
        interpolate(input, self.stops, self.values)
    }

}

/// Background layer offsets, keyed on absolute scroll pixels.
pub const PARALLAX_NEAR: Track = Track::new(&[0.0, 2000.0], &[0.0, -200.0]);
pub const PARALLAX_FAR: Track = Track::new(&[0.0, 2000.0], &[0.0, -400.0]);

/// Section container drift, keyed on page progress.
pub const SKILLS_DRIFT: Track = Track::new(&[0.1, 0.3], &[50.0, -50.0]);
pub const PROJECTS_DRIFT: Track = Track::new(&[0.6, 0.9], &[50.0, -50.0]);

/// Timeline card reveal, keyed on the card's own view progress.
pub const REVEAL_OFFSET: Track = Track::new(&[0.0, 0.5, 1.0], &[50.0, 0.0, -50.0]);
pub const REVEAL_OPACITY: Track = Track::new(&[0.0, 0.2, 0.8, 1.0], &[0.0, 1.0, 1.0, 0.0]);
pub const REVEAL_SCALE: Track = Track::new(&[0.0, 0.2, 0.8, 1.0], &[0.9, 1.0, 1.0, 0.9]);

/// Piecewise-linear clamp-and-lerp. Inputs outside the first/last stop hold
/// the boundary value; where two stops coincide the later value wins.
pub fn interpolate(input: f64, stops: &[f64], values: &[f64]) -> f64 {
    let len = stops.len().min(values.len());
    if len == 0 {
        return 0.0;
    }

    let stops = &stops[..len];
    let values = &values[..len];

    if input.is_nan() || input <= stops[0] {
        return values[0];
    }
    if input >= stops[len - 1] {
        return values[len - 1];
    }

    let lower = stops
        .iter()
        .rposition(|stop| *stop <= input)
        .unwrap_or(0)
        .min(len - 2);
    let upper = lower + 1;
    let span = stops[upper] - stops[lower];

    if span <= 0.0 {
        return values[lower];
    }

    let t = (input - stops[lower]) / span;
    values[lower] + (values[upper] - values[lower]) * t
}

pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

/// Fraction of the document scrolled, 0 when the page is shorter than the viewport.
pub fn page_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }

    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Progress of an element through the viewport: 0 when its top touches the
/// viewport bottom, 1 when its bottom leaves through the viewport top.
pub fn view_progress(element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + element_height;
    if !travel.is_finite() || travel <= 0.0 {
        return 0.0;
    }

    ((viewport_height - element_top) / travel).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub offset_px: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl RevealStyle {
    pub fn at(progress: f64) -> Self {
        Self {
            offset_px: REVEAL_OFFSET.sample(progress),
            opacity: REVEAL_OPACITY.sample(progress),
            scale: REVEAL_SCALE.sample(progress),
        }
    }

    pub fn css(&self) -> String {
        format!(
            "transform: translate3d(0, {:.2}px, 0) scale({:.3}); opacity: {:.3};",
            self.offset_px, self.scale, self.opacity
        )
    }
}

pub fn translate_y_css(offset_px: f64) -> String {
    format!("transform: translate3d(0, {offset_px:.2}px, 0);")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u64,
    pub done: bool,
}

/// Counts from 0 to `floor(target)` over `duration_secs`, anchored to the
/// timestamp of the first frame it sees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    duration_secs: f64,
    started_at: Option<f64>,
}

impl CounterAnimation {
    pub fn new(target: f64, duration_secs: f64) -> Self {
        Self {
            target,
            duration_secs,
            started_at: None,
        }
    }

    pub fn final_value(&self) -> u64 {
        value_at(1.0, self.target)
    }

    pub fn frame(&mut self, now_ms: f64) -> CounterFrame {
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return CounterFrame {
                value: self.final_value(),
                done: true,
            };
        }

        let started_at = *self.started_at.get_or_insert(now_ms);
        let progress = ((now_ms - started_at) / (self.duration_secs * 1000.0)).clamp(0.0, 1.0);

        CounterFrame {
            value: value_at(progress, self.target),
            done: progress >= 1.0,
        }
    }
}

fn value_at(progress: f64, target: f64) -> u64 {
    let raw = (progress * target).floor();
    if raw.is_finite() && raw > 0.0 {
        raw as u64
    } else {
        0
    }
}

pub fn format_counter(value: u64, suffix: &str) -> String {
    format!("{value}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TRACKS: [Track; 7] = [
        PARALLAX_NEAR,
        PARALLAX_FAR,
        SKILLS_DRIFT,
        PROJECTS_DRIFT,
        REVEAL_OFFSET,
        REVEAL_OPACITY,
        REVEAL_SCALE,
    ];

    #[test]
    fn named_tracks_are_well_formed() {
        for track in ALL_TRACKS {
            assert_eq!(track.stops.len(), track.values.len());
            assert!(track.stops.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn reveal_opacity_peaks_mid_view_and_fades_at_edges() {
        assert_eq!(REVEAL_OPACITY.sample(0.5), 1.0);
        assert_eq!(REVEAL_OPACITY.sample(0.0), 0.0);
        assert_eq!(REVEAL_OPACITY.sample(1.0), 0.0);
        assert!((REVEAL_OPACITY.sample(0.1) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn interpolation_clamps_outside_the_breakpoints() {
        assert_eq!(SKILLS_DRIFT.sample(0.0), 50.0);
        assert_eq!(SKILLS_DRIFT.sample(-3.0), 50.0);
        assert_eq!(SKILLS_DRIFT.sample(0.95), -50.0);
        assert_eq!(PARALLAX_FAR.sample(10_000.0), -400.0);
        assert_eq!(PARALLAX_NEAR.sample(1000.0), -100.0);
    }

    #[test]
    fn interpolation_handles_degenerate_tables() {
        assert_eq!(interpolate(0.5, &[], &[]), 0.0);
        assert_eq!(interpolate(0.5, &[0.3], &[7.0]), 7.0);
        assert_eq!(interpolate(0.5, &[0.0, 1.0, 2.0], &[0.0, 10.0]), 5.0);
        assert_eq!(interpolate(f64::NAN, &[0.0, 1.0], &[4.0, 8.0]), 4.0);
    }

    #[test]
    fn coincident_stops_take_the_later_value() {
        let stops = [0.0, 0.5, 0.5, 1.0];
        let values = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(interpolate(0.5, &stops, &values), 2.0);
        assert_eq!(interpolate(0.25, &stops, &values), 0.5);
        assert_eq!(interpolate(0.75, &stops, &values), 2.5);
    }

    #[test]
    fn header_turns_scrolled_strictly_above_fifty_pixels() {
        assert!(!header_is_scrolled(0.0));
        assert!(!header_is_scrolled(50.0));
        assert!(header_is_scrolled(51.0));
    }

    #[test]
    fn page_progress_is_zero_when_page_cannot_scroll() {
        assert_eq!(page_progress(120.0, 600.0, 800.0), 0.0);
        assert_eq!(page_progress(500.0, 1800.0, 800.0), 0.5);
        assert_eq!(page_progress(5_000.0, 1800.0, 800.0), 1.0);
    }

    #[test]
    fn view_progress_spans_entry_to_exit() {
        assert_eq!(view_progress(800.0, 200.0, 800.0), 0.0);
        assert_eq!(view_progress(-200.0, 200.0, 800.0), 1.0);
        assert_eq!(view_progress(300.0, 200.0, 800.0), 0.5);
        assert_eq!(view_progress(2_000.0, 200.0, 800.0), 0.0);
        assert_eq!(view_progress(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn reveal_style_is_settled_at_mid_view() {
        let style = RevealStyle::at(0.5);
        assert_eq!(style.offset_px, 0.0);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.scale, 1.0);
        assert!(style.css().contains("opacity: 1.000"));
    }

    #[test]
    fn counter_ends_on_floor_of_target_and_never_decreases() {
        for (target, duration) in [(2.5, 2.0), (10.0, 2.0), (9.0, 0.5), (123.9, 3.0)] {
            let mut counter = CounterAnimation::new(target, duration);
            let mut last = 0;
            let mut now = 1_000.0;
            let mut frame = counter.frame(now);
            assert_eq!(frame.value, 0);

            while !frame.done {
                now += 16.7;
                frame = counter.frame(now);
                assert!(frame.value >= last);
                last = frame.value;
            }

            assert_eq!(frame.value, target.floor() as u64);
            assert_eq!(counter.frame(now + 5_000.0).value, target.floor() as u64);
        }
    }

    #[test]
    fn counter_is_anchored_to_its_first_frame() {
        let mut counter = CounterAnimation::new(10.0, 2.0);
        counter.frame(50_000.0);

        let halfway = counter.frame(51_000.0);
        assert_eq!(halfway, CounterFrame { value: 5, done: false });

        let finished = counter.frame(52_000.0);
        assert_eq!(finished, CounterFrame { value: 10, done: true });
    }

    #[test]
    fn non_positive_duration_completes_immediately() {
        let mut zero = CounterAnimation::new(9.0, 0.0);
        assert_eq!(zero.frame(0.0), CounterFrame { value: 9, done: true });

        let mut negative = CounterAnimation::new(2.5, -1.0);
        assert_eq!(negative.frame(10.0), CounterFrame { value: 2, done: true });
    }

    #[test]
    fn negative_targets_display_zero() {
        let mut counter = CounterAnimation::new(-4.0, 1.0);
        counter.frame(0.0);
        assert_eq!(counter.frame(2_000.0).value, 0);
    }

    #[test]
    fn counter_display_appends_suffix() {
        assert_eq!(format_counter(10, "+"), "10+");
        assert_eq!(format_counter(0, ""), "0");
    }
}
