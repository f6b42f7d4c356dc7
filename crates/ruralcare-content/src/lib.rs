//! # ruralcare-content
//!
//! Narrative content for the rural healthcare workforce presentation.
//!
//! - `narrative`: the page list and all static text (findings, loops,
//!   interventions, priorities, data sources)
//! - `section`: collapsible Event-Pattern-Structure sections
//! - `diagram`: the causal-loop diagram model and its SVG rendering
//!
//! All content is hardcoded. No external systems are contacted.

pub mod diagram;
pub mod narrative;
pub mod section;

pub use narrative::Page;
pub use section::{analysis_sections, ExpandableSection};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use diagram::{node, render_svg, LoopTag, BADGES, CANVAS_HEIGHT, CANVAS_WIDTH, LINKS, NODES};
    use narrative::{LoopKind, CORE_VARIABLES, EXISTING_INTERVENTIONS, FEEDBACK_LOOPS, LEVERAGE_POINTS};

    // ── Page navigation ──────────────────────────────────────────────────────

    #[test]
    fn pages_cycle_forward_and_back() {
        assert_eq!(Page::Home.next(), Page::Analysis);
        assert_eq!(Page::Data.next(), Page::Home);
        assert_eq!(Page::Home.prev(), Page::Data);
        for page in Page::ALL {
            assert_eq!(page.next().prev(), page);
            assert_eq!(Page::ALL[page.index()], page);
        }
    }

    #[test]
    fn page_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Page::Solutions).unwrap(), "\"solutions\"");
    }

    // ── Expandable sections ──────────────────────────────────────────────────

    #[test]
    fn sections_start_collapsed_and_toggle() {
        let mut sections = analysis_sections();
        assert_eq!(sections.len(), 3);
        assert!(sections.iter().all(|s| !s.is_expanded()));

        sections[2].toggle();
        assert!(sections[2].is_expanded());
        assert!(!sections[0].is_expanded());

        sections[2].toggle();
        assert!(!sections[2].is_expanded());
    }

    #[test]
    fn structures_section_counts_headings_and_items() {
        let sections = analysis_sections();
        assert_eq!(sections[0].title, "Events (Visible Symptoms)");
        assert_eq!(sections[0].body_len(), 4);
        // Four headed groups of three items each.
        assert_eq!(sections[2].body_len(), 16);
    }

    // ── Narrative ────────────────────────────────────────────────────────────

    #[test]
    fn feedback_loops_are_two_reinforcing_one_balancing() {
        let reinforcing = FEEDBACK_LOOPS
            .iter()
            .filter(|l| l.kind == LoopKind::Reinforcing)
            .count();
        assert_eq!(reinforcing, 2);
        assert_eq!(FEEDBACK_LOOPS[2].id, "B1");
    }

    #[test]
    fn interventions_table_is_complete() {
        assert_eq!(EXISTING_INTERVENTIONS.len(), 5);
        assert!(EXISTING_INTERVENTIONS
            .iter()
            .all(|i| !i.effectiveness.is_empty() && !i.limitations.is_empty()));
        assert_eq!(LEVERAGE_POINTS[0].groups.len(), 3);
        assert_eq!(LEVERAGE_POINTS[1].groups.len(), 2);
    }

    // ── Diagram model ────────────────────────────────────────────────────────

    #[test]
    fn every_core_variable_has_a_node() {
        assert_eq!(NODES.len(), CORE_VARIABLES.len());
        for variable in CORE_VARIABLES {
            assert!(node(variable).is_some(), "no node for {variable}");
        }
        assert!(node("Hospital Beds").is_none());
    }

    #[test]
    fn links_connect_known_nodes_inside_the_canvas() {
        for link in &LINKS {
            assert!(node(link.from).is_some(), "unknown source {}", link.from);
            assert!(node(link.to).is_some(), "unknown target {}", link.to);
            assert_ne!(link.from, link.to);
            for (x, y) in [link.start, link.end, link.sign_at] {
                assert!((0.0..=CANVAS_WIDTH).contains(&x));
                assert!((0.0..=CANVAS_HEIGHT).contains(&y));
            }
            assert!(link.polarity == '+' || link.polarity == '-');
        }
    }

    #[test]
    fn r1_links_form_a_closed_loop() {
        let r1: Vec<_> = LINKS.iter().filter(|l| l.loop_tag == LoopTag::R1).collect();
        assert_eq!(r1.len(), 4);
        let sources: HashSet<&str> = r1.iter().map(|l| l.from).collect();
        let targets: HashSet<&str> = r1.iter().map(|l| l.to).collect();
        assert_eq!(sources, targets);
    }

    #[test]
    fn badges_cover_each_named_loop() {
        let tags: Vec<LoopTag> = BADGES.iter().map(|b| b.tag).collect();
        assert_eq!(tags, vec![LoopTag::R1, LoopTag::R2, LoopTag::B1]);
    }

    // ── SVG rendering ────────────────────────────────────────────────────────

    #[test]
    fn svg_contains_every_element() {
        let svg = render_svg();

        assert!(svg.starts_with("<svg viewBox=\"0 0 800 500\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), 7);
        assert_eq!(svg.matches("<path").count(), 9);
        assert_eq!(svg.matches("<rect").count(), 3);
        assert_eq!(svg.matches("stroke-dasharray").count(), 2);
        assert!(svg.contains(">Rural Healthcare Workforce</text>"));
        assert!(svg.contains("d=\"M400 160 L400 340\""));
        assert!(svg.contains(">B1</text>"));
    }
}
