//! The causal-loop diagram.
//!
//! Nodes, links, and loop badges are laid out on a fixed 800×500 canvas
//! (SVG coordinates, y grows downward). `render_svg` emits a standalone SVG
//! document; the TUI draws the same model on a ratatui canvas.

use serde::Serialize;

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 500.0;
pub const NODE_RADIUS: f64 = 60.0;

/// The loop a link belongs to. `External` marks a driver outside the loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LoopTag {
    R1,
    R2,
    B1,
    External,
}

impl LoopTag {
    pub fn colour(self) -> &'static str {
        match self {
            LoopTag::R1 => "#d32f2f",
            LoopTag::R2 => "#e65100",
            LoopTag::B1 => "#2e7d32",
            LoopTag::External => "#5e35b1",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Node {
    pub label: &'static str,
    pub x: f64,
    pub y: f64,
}

/// A signed causal arrow between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Link {
    pub from: &'static str,
    pub to: &'static str,
    pub start: (f64, f64),
    pub end: (f64, f64),
    pub polarity: char,
    pub loop_tag: LoopTag,
    /// Dashed links mark delayed effects.
    pub dashed: bool,
    /// Where the polarity sign is drawn.
    pub sign_at: (f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoopBadge {
    pub tag: LoopTag,
    pub x: f64,
    pub y: f64,
}

const WORKFORCE: &str = "Rural Healthcare Workforce";
const CONDITIONS: &str = "Working Conditions";
const WORKLOAD: &str = "Workload per HCW";
const MIGRATION: &str = "Urban Migration";
const QUALITY: &str = "Quality of Healthcare";
const ISOLATION: &str = "Professional Isolation";
const INCENTIVES: &str = "Government Incentives";

pub static NODES: [Node; 7] = [
    Node { label: WORKFORCE, x: 400.0, y: 100.0 },
    Node { label: CONDITIONS, x: 200.0, y: 250.0 },
    Node { label: WORKLOAD, x: 400.0, y: 400.0 },
    Node { label: MIGRATION, x: 600.0, y: 250.0 },
    Node { label: QUALITY, x: 150.0, y: 400.0 },
    Node { label: ISOLATION, x: 650.0, y: 400.0 },
    Node { label: INCENTIVES, x: 650.0, y: 100.0 },
];

pub static LINKS: [Link; 9] = [
    // R1: workforce decline
    Link {
        from: WORKFORCE,
        to: WORKLOAD,
        start: (400.0, 160.0),
        end: (400.0, 340.0),
        polarity: '-',
        loop_tag: LoopTag::R1,
        dashed: true,
        sign_at: (380.0, 250.0),
    },
    Link {
        from: WORKLOAD,
        to: CONDITIONS,
        start: (340.0, 400.0),
        end: (260.0, 250.0),
        polarity: '-',
        loop_tag: LoopTag::R1,
        dashed: false,
        sign_at: (290.0, 340.0),
    },
    Link {
        from: CONDITIONS,
        to: MIGRATION,
        start: (260.0, 210.0),
        end: (540.0, 210.0),
        polarity: '+',
        loop_tag: LoopTag::R1,
        dashed: false,
        sign_at: (400.0, 200.0),
    },
    Link {
        from: MIGRATION,
        to: WORKFORCE,
        start: (600.0, 190.0),
        end: (460.0, 140.0),
        polarity: '-',
        loop_tag: LoopTag::R1,
        dashed: false,
        sign_at: (530.0, 150.0),
    },
    // R2: healthcare quality
    Link {
        from: WORKFORCE,
        to: QUALITY,
        start: (350.0, 150.0),
        end: (200.0, 350.0),
        polarity: '+',
        loop_tag: LoopTag::R2,
        dashed: false,
        sign_at: (270.0, 260.0),
    },
    Link {
        from: QUALITY,
        to: MIGRATION,
        start: (150.0, 340.0),
        end: (500.0, 230.0),
        polarity: '-',
        loop_tag: LoopTag::R2,
        dashed: true,
        sign_at: (330.0, 270.0),
    },
    // B1: government intervention
    Link {
        from: WORKFORCE,
        to: INCENTIVES,
        start: (340.0, 100.0),
        end: (590.0, 100.0),
        polarity: '-',
        loop_tag: LoopTag::B1,
        dashed: false,
        sign_at: (470.0, 90.0),
    },
    Link {
        from: INCENTIVES,
        to: MIGRATION,
        start: (650.0, 160.0),
        end: (550.0, 200.0),
        polarity: '-',
        loop_tag: LoopTag::B1,
        dashed: false,
        sign_at: (620.0, 190.0),
    },
    Link {
        from: ISOLATION,
        to: MIGRATION,
        start: (650.0, 340.0),
        end: (600.0, 310.0),
        polarity: '+',
        loop_tag: LoopTag::External,
        dashed: false,
        sign_at: (635.0, 330.0),
    },
];

pub static BADGES: [LoopBadge; 3] = [
    LoopBadge { tag: LoopTag::R1, x: 440.0, y: 250.0 },
    LoopBadge { tag: LoopTag::R2, x: 290.0, y: 170.0 },
    LoopBadge { tag: LoopTag::B1, x: 530.0, y: 70.0 },
];

const BADGE_WIDTH: f64 = 30.0;
const BADGE_HEIGHT: f64 = 20.0;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render the diagram as a standalone SVG document.
pub fn render_svg() -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg viewBox=\"0 0 {} {}\" xmlns=\"http://www.w3.org/2000/svg\" font-family=\"sans-serif\" font-size=\"12\">\n",
        CANVAS_WIDTH, CANVAS_HEIGHT
    ));
    svg.push_str(
        "  <defs>\n    <marker id=\"arrowhead\" markerWidth=\"10\" markerHeight=\"7\" refX=\"9\" refY=\"3.5\" orient=\"auto\">\n      <polygon points=\"0 0, 10 3.5, 0 7\" />\n    </marker>\n  </defs>\n",
    );

    for node in &NODES {
        svg.push_str(&format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"#e3f2fd\" stroke=\"#1e88e5\" stroke-width=\"2\" />\n",
            node.x, node.y, NODE_RADIUS
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-weight=\"bold\">{}</text>\n",
            node.x,
            node.y,
            escape(node.label)
        ));
    }

    for link in &LINKS {
        let colour = link.loop_tag.colour();
        let dash = if link.dashed { " stroke-dasharray=\"5,3\"" } else { "" };
        svg.push_str(&format!(
            "  <path d=\"M{} {} L{} {}\" stroke=\"{}\" stroke-width=\"2\" fill=\"none\" marker-end=\"url(#arrowhead)\"{} />\n",
            link.start.0, link.start.1, link.end.0, link.end.1, colour, dash
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"{}\" font-weight=\"bold\">{}</text>\n",
            link.sign_at.0, link.sign_at.1, colour, link.polarity
        ));
    }

    for badge in &BADGES {
        let colour = badge.tag.colour();
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"10\" ry=\"10\" fill=\"{}\" />\n",
            badge.x, badge.y, BADGE_WIDTH, BADGE_HEIGHT, colour
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\" fill=\"white\" font-weight=\"bold\">{:?}</text>\n",
            badge.x + BADGE_WIDTH / 2.0,
            badge.y + BADGE_HEIGHT / 2.0,
            badge.tag
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Look up a node by its label.
pub fn node(label: &str) -> Option<&'static Node> {
    NODES.iter().find(|n| n.label == label)
}
