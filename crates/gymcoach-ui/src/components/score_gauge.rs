//! Circular error-score gauge shown on each analysed frame.
//!
//! Scores run 0 to 100 where lower is better.

use dioxus::prelude::*;

const MAX_SCORE: f64 = 100.0;
const STROKE_WIDTH: f64 = 4.0;

/// Form quality bucket for an error score
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScoreTier {
    Good,
    Fair,
    Poor,
}

impl ScoreTier {
    /// Below 30 is good form, below 60 needs work, the rest is poor.
    pub fn for_score(score: f64) -> Self {
        let score = clamp_score(score);
        if score < 30.0 {
            ScoreTier::Good
        } else if score < 60.0 {
            ScoreTier::Fair
        } else {
            ScoreTier::Poor
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ScoreTier::Good => "score-good",
            ScoreTier::Fair => "score-fair",
            ScoreTier::Poor => "score-poor",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ScoreTier::Good => "#39ff88",
            ScoreTier::Fair => "#ff9f40",
            ScoreTier::Poor => "#ff4d6d",
        }
    }
}

fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, MAX_SCORE)
    }
}

/// Ring geometry for a gauge of `size` pixels.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GaugeRing {
    pub radius: f64,
    pub circumference: f64,
    /// Stroke offset that leaves `score` percent of the ring drawn
    pub dash_offset: f64,
}

impl GaugeRing {
    pub fn new(size: u32, score: f64) -> Self {
        let radius = (size as f64 - STROKE_WIDTH) / 2.0;
        let circumference = 2.0 * std::f64::consts::PI * radius.max(0.0);
        let filled = clamp_score(score) / MAX_SCORE;
        Self {
            radius: radius.max(0.0),
            circumference,
            dash_offset: circumference * (1.0 - filled),
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ScoreGaugeProps {
    pub score: f64,
    #[props(default = 72)]
    pub size: u32,
}

#[component]
pub fn ScoreGauge(props: ScoreGaugeProps) -> Element {
    let tier = ScoreTier::for_score(props.score);
    let ring = GaugeRing::new(props.size, props.score);
    let center = props.size as f64 / 2.0;
    let label = format!("{:.0}", clamp_score(props.score));
    let tier_class = tier.class();
    let GaugeRing {
        radius,
        circumference,
        dash_offset,
    } = ring;
    let size = props.size;

    rsx! {
        div {
            class: "score-gauge {tier_class}",
            style: "width: {size}px; height: {size}px;",
            role: "img",
            "aria-label": "Error score {label} out of 100",
            svg {
                width: "{size}",
                height: "{size}",
                view_box: "0 0 {size} {size}",
                circle {
                    class: "score-gauge-track",
                    cx: "{center}",
                    cy: "{center}",
                    r: "{radius}",
                    fill: "none",
                    stroke_width: "{STROKE_WIDTH}",
                }
                circle {
                    class: "score-gauge-value",
                    cx: "{center}",
                    cy: "{center}",
                    r: "{radius}",
                    fill: "none",
                    stroke: tier.color(),
                    stroke_width: "{STROKE_WIDTH}",
                    stroke_linecap: "round",
                    stroke_dasharray: "{circumference}",
                    stroke_dashoffset: "{dash_offset}",
                    transform: "rotate(-90 {center} {center})",
                }
            }
            span { class: "score-gauge-label", "{label}" }
        }
    }
}
