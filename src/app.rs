//! Front-end state and its event loop.
//!
//! All state lives in [`AppState`] and only changes inside [`AppState::update`].
//! The loop runs on one thread; analyses are spawned onto the same runtime and
//! report back through the event channel. `analyzing` gates `Submit`, so at most
//! one analysis is in flight.

use std::ops::ControlFlow;

use tokio::sync::mpsc;

use crate::analyzer::Analyzer;
use crate::types::AnalysisResult;

pub const SAMPLE_CLAIM: &str =
    "According to NASA, global temperatures have increased by 1.1 degrees Celsius since pre-industrial times.";

#[derive(Debug)]
pub enum Event {
    Input(String),
    LoadSample,
    Submit,
    Completed(AnalysisResult),
    Quit,
}

/// What an event did to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Edited,
    /// An analysis of this text must be started.
    Started(String),
    Finished,
    Ignored,
    Exit,
}

#[derive(Debug, Default)]
pub struct AppState {
    pub input: String,
    pub analyzing: bool,
    pub result: Option<AnalysisResult>,
    quit_requested: bool,
}

impl AppState {
    pub fn can_submit(&self) -> bool {
        !self.analyzing && !self.input.trim().is_empty()
    }

    pub fn update(&mut self, event: Event) -> Effect {
        match event {
            Event::Input(text) => {
                self.input = text;
                Effect::Edited
            }
            Event::LoadSample => {
                self.input = SAMPLE_CLAIM.to_string();
                Effect::Edited
            }
            Event::Submit if !self.can_submit() => {
                tracing::debug!(analyzing = self.analyzing, "submit ignored");
                Effect::Ignored
            }
            Event::Submit => {
                self.analyzing = true;
                self.result = None;
                Effect::Started(self.input.clone())
            }
            Event::Completed(result) => {
                self.result = Some(result);
                self.analyzing = false;
                Effect::Finished
            }
            Event::Quit if self.analyzing => {
                // leave once the pending analysis lands
                self.quit_requested = true;
                Effect::Ignored
            }
            Event::Quit => Effect::Exit,
        }
    }

    fn should_exit(&self) -> bool {
        self.quit_requested && !self.analyzing
    }
}

pub struct App {
    state: AppState,
    analyzer: Analyzer,
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
}

impl App {
    pub fn new(analyzer: Analyzer) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { state: AppState::default(), analyzer, tx, rx }
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<Event> { self.tx.clone() }

    /// Processes events until `Quit` (or the callback breaks) and hands back
    /// the final state. `on_effect` sees the state after every change.
    pub async fn run<F>(mut self, mut on_effect: F) -> AppState
    where
        F: FnMut(&AppState, &Effect) -> ControlFlow<()>,
    {
        while let Some(event) = self.rx.recv().await {
            let effect = self.state.update(event);
            if effect == Effect::Exit {
                break;
            }
            if let Effect::Started(text) = &effect {
                self.spawn_analysis(text.clone());
            }
            if on_effect(&self.state, &effect).is_break() || self.state.should_exit() {
                break;
            }
        }
        self.state
    }

    fn spawn_analysis(&self, text: String) {
        let analyzer = self.analyzer.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = analyzer.analyze(&text).await;
            let _ = tx.send(Event::Completed(result));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::evaluate;
    use crate::types::Classification;
    use std::time::Duration;

    #[test]
    fn blank_input_cannot_be_submitted() {
        let mut s = AppState::default();
        assert_eq!(s.update(Event::Submit), Effect::Ignored);
        s.update(Event::Input("   ".into()));
        assert_eq!(s.update(Event::Submit), Effect::Ignored);
        assert!(!s.analyzing);
    }

    #[test]
    fn submit_while_analyzing_is_ignored() {
        let mut s = AppState::default();
        s.update(Event::Input("nasa".into()));
        assert_eq!(s.update(Event::Submit), Effect::Started("nasa".into()));
        assert!(s.analyzing);
        assert_eq!(s.update(Event::Submit), Effect::Ignored);
    }

    #[test]
    fn new_submission_clears_previous_result() {
        let mut s = AppState::default();
        s.update(Event::Input("bleach".into()));
        s.update(Event::Submit);
        s.update(Event::Completed(evaluate("bleach")));
        assert!(s.result.is_some());
        s.update(Event::Submit);
        assert!(s.result.is_none());
    }

    #[test]
    fn sample_loads_nasa_claim() {
        let mut s = AppState::default();
        assert_eq!(s.update(Event::LoadSample), Effect::Edited);
        assert_eq!(s.input, SAMPLE_CLAIM);
    }

    #[tokio::test]
    async fn loop_runs_exactly_one_analysis_per_flight() {
        let app = App::new(Analyzer::new(Duration::ZERO));
        let tx = app.sender();
        tx.send(Event::Input("According to NASA".into())).unwrap();
        tx.send(Event::Submit).unwrap();
        tx.send(Event::Submit).unwrap();

        let mut effects = Vec::new();
        let state = app
            .run(|_, effect| {
                effects.push(effect.clone());
                if *effect == Effect::Finished { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
            })
            .await;

        assert_eq!(effects.iter().filter(|e| matches!(e, Effect::Started(_))).count(), 1);
        assert_eq!(effects.iter().filter(|e| **e == Effect::Ignored).count(), 1);
        assert!(!state.analyzing);
        let result = state.result.expect("result stored");
        assert_eq!(result.verdict.classification, Classification::LikelyTrue);
    }

    #[tokio::test(start_paused = true)]
    async fn quit_waits_for_pending_analysis() {
        let app = App::new(Analyzer::default());
        let tx = app.sender();
        tx.send(Event::LoadSample).unwrap();
        tx.send(Event::Submit).unwrap();
        tx.send(Event::Quit).unwrap();

        let state = app.run(|_, _| ControlFlow::Continue(())).await;
        assert!(state.result.is_some());
        assert_eq!(state.input, SAMPLE_CLAIM);
    }

    #[tokio::test]
    async fn quit_when_idle_exits_immediately() {
        let app = App::new(Analyzer::new(Duration::ZERO));
        app.sender().send(Event::Quit).unwrap();
        let state = app.run(|_, _| ControlFlow::Continue(())).await;
        assert!(state.result.is_none());
    }
}
