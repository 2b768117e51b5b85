// Copyright 2025 Cowboy AI, LLC.

//! Presheaf demo session state
//!
//! The checker itself is stateless. A session is the state a presentation
//! layer keeps between clicks: which scenario is open and the current
//! colorings of G and H. Results from the checker are written back only when
//! an operation succeeds.

use tracing::{info, warn};

use crate::coloring::{self, Coloring, Palette};
use crate::config::DemoConfig;
use crate::errors::{DemoResult, PushForwardError};
use crate::fixtures::{ExampleKind, Scenario};

/// Current scenario plus the live colorings of both graphs
#[derive(Debug, Clone)]
pub struct PresheafSession {
    scenario: Scenario,
    palette: Palette,
    coloring_g: Coloring,
    coloring_h: Coloring,
}

impl PresheafSession {
    /// Open a built-in scenario with the default palette.
    pub fn new(kind: ExampleKind) -> DemoResult<Self> {
        Self::with_config(kind, &DemoConfig::default())
    }

    /// Open a built-in scenario using the configured palette.
    pub fn with_config(kind: ExampleKind, config: &DemoConfig) -> DemoResult<Self> {
        config.validate()?;
        Ok(Self::from_scenario(Scenario::for_kind(kind)?, config.palette.clone()))
    }

    /// Open an arbitrary validated scenario.
    pub fn from_scenario(scenario: Scenario, palette: Palette) -> Self {
        Self {
            coloring_g: scenario.initial_g.clone(),
            coloring_h: scenario.initial_h.clone(),
            scenario,
            palette,
        }
    }

    /// Scenario currently shown.
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Kind of the scenario currently shown.
    pub fn kind(&self) -> ExampleKind {
        self.scenario.kind
    }

    /// Live coloring of G.
    pub fn coloring_g(&self) -> &Coloring {
        &self.coloring_g
    }

    /// Live coloring of H.
    pub fn coloring_h(&self) -> &Coloring {
        &self.coloring_h
    }

    /// Switch to the other built-in scenario, resetting both colorings.
    pub fn toggle_example(&mut self) -> DemoResult<()> {
        let next = Scenario::for_kind(self.kind().toggled())?;
        info!(from = %self.kind(), to = %next.kind, "switched example");
        self.coloring_g = next.initial_g.clone();
        self.coloring_h = next.initial_h.clone();
        self.scenario = next;
        Ok(())
    }

    /// Restore the scenario's initial colorings.
    pub fn reset(&mut self) {
        self.coloring_g = self.scenario.initial_g.clone();
        self.coloring_h = self.scenario.initial_h.clone();
    }

    /// A click on a vertex of G.
    pub fn click_source(&mut self, vertex_id: &str) -> DemoResult<&Coloring> {
        self.coloring_g = coloring::cycle_color_with(&self.palette, &self.coloring_g, vertex_id)?;
        Ok(&self.coloring_g)
    }

    /// A click on a vertex of H.
    pub fn click_target(&mut self, vertex_id: &str) -> DemoResult<&Coloring> {
        self.coloring_h = coloring::cycle_color_with(&self.palette, &self.coloring_h, vertex_id)?;
        Ok(&self.coloring_h)
    }

    /// Push the G-coloring forward. H changes only on success.
    pub fn push_forward(&mut self) -> Result<&Coloring, PushForwardError> {
        match coloring::push_forward(
            &self.coloring_g,
            &self.scenario.mapping,
            &self.scenario.graph_h,
            &self.coloring_h,
        ) {
            Ok(next) => {
                info!(example = %self.kind(), "pushed coloring forward");
                self.coloring_h = next;
                Ok(&self.coloring_h)
            }
            Err(err) => {
                warn!(example = %self.kind(), error = %err, "push-forward rejected");
                Err(err)
            }
        }
    }

    /// Pull the H-coloring back onto G.
    pub fn pull_back(&mut self) -> DemoResult<&Coloring> {
        self.coloring_g = coloring::pull_back(
            &self.coloring_h,
            &self.scenario.mapping,
            &self.scenario.graph_g,
        )?;
        info!(example = %self.kind(), "pulled coloring back");
        Ok(&self.coloring_g)
    }

    /// `(source, image)` lines describing f, for the mapping legend.
    pub fn mapping_legend(&self) -> Vec<String> {
        self.scenario
            .mapping
            .iter()
            .map(|(g, h)| format!("{g} → {h}"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coloring::Color;

    #[test]
    fn test_new_session_uses_initial_colorings() {
        let session = PresheafSession::new(ExampleKind::Simple).unwrap();
        assert_eq!(session.coloring_g(), &session.scenario().initial_g);
        assert_eq!(session.coloring_h().get("w2"), Some(Color::Blue));
    }

    #[test]
    fn test_toggle_resets_colorings() {
        let mut session = PresheafSession::new(ExampleKind::Simple).unwrap();
        session.click_source("v1").unwrap();
        session.toggle_example().unwrap();
        assert_eq!(session.kind(), ExampleKind::Advanced);
        assert_eq!(session.coloring_g().get("v1"), Some(Color::Green));
        assert_eq!(session.coloring_h().get("w1"), Some(Color::Blue));
        assert_eq!(session.coloring_g().get("v3"), None);
    }

    #[test]
    fn test_failed_push_forward_leaves_target_untouched() {
        let mut session = PresheafSession::new(ExampleKind::Simple).unwrap();
        // v3: red -> blue breaks the fiber over w1
        session.click_source("v3").unwrap();
        let before = session.coloring_h().clone();
        let err = session.push_forward().unwrap_err();
        assert!(matches!(err, PushForwardError::InconsistentFiber { .. }));
        assert_eq!(session.coloring_h(), &before);
    }

    #[test]
    fn test_advanced_push_forward_then_pull_back() {
        let mut session = PresheafSession::new(ExampleKind::Advanced).unwrap();
        let pushed = session.push_forward().unwrap().clone();
        assert_eq!(pushed.get("w1"), Some(Color::Green));

        session.click_target("w1").unwrap();
        let pulled = session.pull_back().unwrap();
        assert_eq!(pulled.get("v1"), Some(Color::Yellow));
        assert_eq!(pulled.get("v2"), Some(Color::Yellow));
    }

    #[test]
    fn test_click_unknown_vertex_is_contract_violation() {
        let mut session = PresheafSession::new(ExampleKind::Simple).unwrap();
        let err = session.click_target("v1").unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_mapping_legend() {
        let session = PresheafSession::new(ExampleKind::Simple).unwrap();
        assert_eq!(session.mapping_legend(), vec!["v1 → w1", "v2 → w2", "v3 → w1"]);
    }

    #[test]
    fn test_reset_after_clicks() {
        let mut session = PresheafSession::new(ExampleKind::Simple).unwrap();
        session.click_source("v2").unwrap();
        session.click_target("w1").unwrap();
        session.reset();
        assert_eq!(session.coloring_g(), &session.scenario().initial_g);
        assert_eq!(session.coloring_h(), &session.scenario().initial_h);
    }
}
