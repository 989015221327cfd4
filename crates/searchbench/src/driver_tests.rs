use std::io;

use searchbench_benchmark::BenchmarkConfig;
use searchbench_core::{RunModes, RunPhase, Strategy, Verbosity};
use searchbench_test::{unit_space, RecordingEngine};

use crate::{Driver, DriverState, InterruptController, InterruptState, OperatorPrompt};

/// Records every pause and can cancel or fail inside it.
#[derive(Default)]
struct ScriptedPrompt {
    titles: Vec<String>,
    cancel: Option<InterruptController>,
    fail: bool,
    interrupted: bool,
}

impl ScriptedPrompt {
    fn cancelling(interrupt: InterruptController) -> Self {
        Self {
            cancel: Some(interrupt),
            ..Self::default()
        }
    }
}

impl OperatorPrompt for ScriptedPrompt {
    fn wait_for_continue(&mut self, title: &str) -> io::Result<()> {
        self.titles.push(title.to_string());
        if let Some(interrupt) = &self.cancel {
            interrupt.request_cancel();
        }
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"));
        }
        if self.interrupted {
            return Err(io::Error::new(io::ErrorKind::Interrupted, "read interrupted"));
        }
        Ok(())
    }
}

fn quick_benchmark() -> BenchmarkConfig {
    BenchmarkConfig::new("driver-test")
        .with_warmup_count(0)
        .with_run_count(2)
}

fn modes(verbosity: u8, draw: bool, timing: bool) -> RunModes {
    RunModes::new(Verbosity::new(verbosity).unwrap(), draw, timing)
}

#[test]
fn test_runs_every_combination_in_order() {
    let space = unit_space(
        &["p1", "p2"],
        &["h1"],
        &[Strategy::BreadthFirst, Strategy::AStar],
        modes(0, false, false),
    );
    let mut prompt = ScriptedPrompt::default();
    let mut driver = Driver::new(RecordingEngine::new(), quick_benchmark(), &mut prompt)
        .with_interrupt(InterruptController::manual());

    let report = driver.run(&space).unwrap();

    assert_eq!(
        driver.engine().titles(RunPhase::Demo),
        vec!["bf, h1, p1", "a*, h1, p1", "bf, h1, p2", "a*, h1, p2"]
    );
    assert_eq!(report.outcomes()[1].demo.as_deref().ok(), Some("solved a*, h1, p1"));
    assert!(driver.engine().calls_in(RunPhase::Timed).is_empty());
    assert_eq!(report.len(), 4);
    assert_eq!(report.succeeded(), 4);
    assert_eq!(driver.state(), DriverState::Terminated);
    drop(driver);
    assert!(prompt.titles.is_empty());
}

#[test]
fn test_engine_failure_does_not_stop_iteration() {
    let space = unit_space(
        &["p1", "p2", "p3"],
        &["h1"],
        &[Strategy::GreedyBestFirst, Strategy::UniformCost],
        modes(1, false, false),
    );
    let mut driver = Driver::new(
        RecordingEngine::new().failing_on("p2"),
        quick_benchmark(),
        ScriptedPrompt::default(),
    )
    .with_interrupt(InterruptController::manual());

    let report = driver.run(&space).unwrap();

    assert_eq!(report.len(), space.combination_count());
    assert_eq!(report.failed(), 2);
    assert_eq!(report.succeeded(), 4);
    let failed: Vec<String> = report.failures().map(|e| e.combination.title()).collect();
    assert_eq!(failed, vec!["gbf, h1, p2", "uc, h1, p2"]);
    assert_eq!(driver.engine().calls_in(RunPhase::Demo).len(), 6);
    assert_eq!(report.outcomes()[5].id.title(), "uc, h1, p3");
}

#[test]
fn test_timed_runs_are_silent_regardless_of_modes() {
    let space = unit_space(
        &["p1", "p2"],
        &["h1"],
        &[Strategy::GreedyBestFirst],
        modes(2, true, true),
    );
    let mut driver = Driver::new(RecordingEngine::new(), quick_benchmark(), ScriptedPrompt::default())
        .with_interrupt(InterruptController::manual());

    driver.run(&space).unwrap();

    let demos = driver.engine().calls_in(RunPhase::Demo);
    assert_eq!(demos.len(), 2);
    assert!(demos.iter().all(|c| c.verbosity.level() == 2 && c.draw));

    let timed = driver.engine().calls_in(RunPhase::Timed);
    assert_eq!(timed.len(), 4);
    assert!(timed.iter().all(|c| c.verbosity == Verbosity::SILENT && !c.draw));
}

#[test]
fn test_each_combination_runs_demo_then_timed_then_pauses() {
    let space = unit_space(&["p1", "p2"], &["h1"], &[Strategy::AStar], modes(0, false, true));
    let mut prompt = ScriptedPrompt::default();
    let mut driver = Driver::new(RecordingEngine::new(), quick_benchmark(), &mut prompt)
        .with_interrupt(InterruptController::manual());

    let report = driver.run(&space).unwrap();

    let phases: Vec<(RunPhase, String)> = driver
        .engine()
        .calls()
        .into_iter()
        .map(|c| (c.phase, c.problem))
        .collect();
    assert_eq!(
        phases,
        vec![
            (RunPhase::Demo, "p1".to_string()),
            (RunPhase::Timed, "p1".to_string()),
            (RunPhase::Timed, "p1".to_string()),
            (RunPhase::Demo, "p2".to_string()),
            (RunPhase::Timed, "p2".to_string()),
            (RunPhase::Timed, "p2".to_string()),
        ]
    );
    let timing = report.outcomes()[0].timing.as_ref().unwrap().as_ref().unwrap();
    assert_eq!(timing.name, "a*, h1, p1");
    assert_eq!(timing.run_count(), 2);

    drop(driver);
    assert_eq!(prompt.titles, vec!["a*, h1, p1", "a*, h1, p2"]);
}

#[test]
fn test_demo_failure_skips_timed_run() {
    let space = unit_space(&["bad", "good"], &["h1"], &[Strategy::AStar], modes(0, false, true));
    let mut prompt = ScriptedPrompt::default();
    let mut driver = Driver::new(
        RecordingEngine::new().failing_on_phase("bad", RunPhase::Demo),
        quick_benchmark(),
        &mut prompt,
    )
    .with_interrupt(InterruptController::manual());

    let report = driver.run(&space).unwrap();

    assert!(report.outcomes()[0].timing.is_none());
    assert!(report.outcomes()[1].is_success());
    assert_eq!(driver.engine().calls_in(RunPhase::Timed).len(), 2);
    drop(driver);
    assert_eq!(prompt.titles, vec!["a*, h1, good"]);
}

#[test]
fn test_timed_failure_is_reported_and_paused() {
    let space = unit_space(&["slow", "ok"], &["h1"], &[Strategy::DepthFirst], modes(0, false, true));
    let mut prompt = ScriptedPrompt::default();
    let mut driver = Driver::new(
        RecordingEngine::new().failing_on_phase("slow", RunPhase::Timed),
        quick_benchmark(),
        &mut prompt,
    )
    .with_interrupt(InterruptController::manual());

    let report = driver.run(&space).unwrap();

    let first = &report.outcomes()[0];
    assert!(first.demo.is_ok());
    assert_eq!(first.error().map(|e| e.phase), Some(RunPhase::Timed));
    assert_eq!(report.failed(), 1);
    drop(driver);
    assert_eq!(prompt.titles.len(), 2);
}

#[test]
fn test_cancel_during_pause_runs_nothing_further() {
    let interrupt = InterruptController::manual();
    let space = unit_space(
        &["p1", "p2"],
        &["h1", "h2"],
        &[Strategy::AStar],
        modes(0, false, true),
    );
    let mut driver = Driver::new(
        RecordingEngine::new(),
        quick_benchmark(),
        ScriptedPrompt::cancelling(interrupt.clone()),
    )
    .with_interrupt(interrupt.clone());

    let err = driver.run(&space).unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(driver.engine().titles(RunPhase::Demo), vec!["a*, h1, p1"]);
    assert_eq!(driver.engine().calls_in(RunPhase::Timed).len(), 2);
    assert_eq!(driver.state(), DriverState::Terminated);
    assert_eq!(interrupt.state(), InterruptState::Terminated);
}

#[test]
fn test_cancel_after_first_demo_stops_second_combination() {
    let interrupt = InterruptController::manual();
    let handle = interrupt.clone();
    let engine = RecordingEngine::new().with_hook(move |run| {
        if run.phase == RunPhase::Demo {
            handle.request_cancel();
        }
    });
    let space = unit_space(
        &["p1"],
        &["h1"],
        &[Strategy::BreadthFirst, Strategy::DepthFirst],
        modes(0, false, true),
    );
    let mut prompt = ScriptedPrompt::default();
    let mut driver =
        Driver::new(engine, quick_benchmark(), &mut prompt).with_interrupt(interrupt.clone());

    let err = driver.run(&space).unwrap_err();

    assert!(err.is_cancelled());
    let calls = driver.engine().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].title, "bf, h1, p1");
    assert_eq!(driver.state(), DriverState::Terminated);
    drop(driver);
    assert!(prompt.titles.is_empty());
}

#[test]
fn test_cancel_before_run_starts_nothing() {
    let interrupt = InterruptController::manual();
    interrupt.request_cancel();
    let space = unit_space(&["p1"], &["h1"], &[Strategy::AStar], modes(0, false, false));
    let mut driver = Driver::new(RecordingEngine::new(), quick_benchmark(), ScriptedPrompt::default())
        .with_interrupt(interrupt);

    assert!(driver.run(&space).unwrap_err().is_cancelled());
    assert!(driver.engine().calls().is_empty());
}

#[test]
fn test_prompt_error_is_fatal() {
    let space = unit_space(&["p1", "p2"], &["h1"], &[Strategy::AStar], modes(0, false, true));
    let prompt = ScriptedPrompt {
        fail: true,
        ..ScriptedPrompt::default()
    };
    let mut driver = Driver::new(RecordingEngine::new(), quick_benchmark(), prompt)
        .with_interrupt(InterruptController::manual());

    let err = driver.run(&space).unwrap_err();

    assert!(matches!(err, crate::DriverError::Prompt(_)));
    assert_eq!(driver.engine().titles(RunPhase::Demo), vec!["a*, h1, p1"]);
    assert_eq!(driver.state(), DriverState::Terminated);
}

#[test]
fn test_state_moves_forward_only() {
    let space = unit_space(&["p1"], &["h1"], &[Strategy::AStar], modes(0, false, false));
    let mut driver = Driver::new(RecordingEngine::new(), quick_benchmark(), ScriptedPrompt::default())
        .with_interrupt(InterruptController::manual());
    assert_eq!(driver.state(), DriverState::Initializing);

    driver.run(&space).unwrap();
    assert_eq!(driver.state(), DriverState::Terminated);
    assert_eq!(driver.interrupt().state(), InterruptState::Armed);

    assert!(driver.run(&space).is_err());
    assert_eq!(driver.engine().calls().len(), 1);
}

#[test]
fn test_interrupted_prompt_cancels() {
    let space = unit_space(&["p1", "p2"], &["h1"], &[Strategy::AStar], modes(0, false, true));
    let mut prompt = ScriptedPrompt {
        interrupted: true,
        ..ScriptedPrompt::default()
    };
    let interrupt = InterruptController::manual();
    let mut driver = Driver::new(RecordingEngine::new(), quick_benchmark(), &mut prompt)
        .with_interrupt(interrupt.clone());

    let err = driver.run(&space).unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(driver.engine().titles(RunPhase::Demo), vec!["a*, h1, p1"]);
    assert_eq!(interrupt.state(), InterruptState::Terminated);
    drop(driver);
    assert_eq!(prompt.titles, vec!["a*, h1, p1"]);
}

#[test]
fn test_interrupted_engine_pause_cancels() {
    let space = unit_space(&["p1", "p2"], &["h1"], &[Strategy::BreadthFirst], modes(4, true, true));
    let mut prompt = ScriptedPrompt::default();
    let mut driver = Driver::new(
        RecordingEngine::new().interrupted_on("p1"),
        quick_benchmark(),
        &mut prompt,
    )
    .with_interrupt(InterruptController::manual());

    let err = driver.run(&space).unwrap_err();

    assert!(err.is_cancelled());
    let calls = driver.engine().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].title, "bf, h1, p1");
    assert_eq!(driver.state(), DriverState::Terminated);
    drop(driver);
    assert!(prompt.titles.is_empty());
}
