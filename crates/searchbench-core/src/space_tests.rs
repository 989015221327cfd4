//! Tests for configuration space validation

use super::error::ConfigurationError;
use super::registry::{Named, Registry};
use super::space::*;
use super::strategy::{RunModes, Strategy, Verbosity};

fn registries() -> (Registry<u32>, Registry<&'static str>) {
    let problems = [("rect20a", 1u32), ("rect20e", 5u32), ("wall8a", 8u32)]
        .into_iter()
        .collect();
    let heuristics = [("h_edist", "e"), ("h_walldist", "w")].into_iter().collect();
    (problems, heuristics)
}

fn selection() -> AxisSelection {
    AxisSelection {
        problems: vec!["rect20a".into(), "wall8a".into()],
        heuristics: vec!["h_walldist".into()],
        strategies: vec!["gbf".into(), "a*".into()],
        verbosity: 2,
        draw: true,
        timing: false,
    }
}

#[test]
fn test_resolve_preserves_selection_order() {
    let (problems, heuristics) = registries();
    let mut sel = selection();
    sel.problems = vec!["wall8a".into(), "rect20a".into()];

    let space = ConfigSpace::resolve(&sel, &problems, &heuristics).unwrap();

    let names: Vec<_> = space.problems().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["wall8a", "rect20a"]);
    assert_eq!(*space.problems()[0].value(), 8);
    assert_eq!(
        space.strategies(),
        &[Strategy::GreedyBestFirst, Strategy::AStar]
    );
}

#[test]
fn test_resolve_carries_modes() {
    let (problems, heuristics) = registries();
    let space = ConfigSpace::resolve(&selection(), &problems, &heuristics).unwrap();

    assert_eq!(space.modes().verbosity, Verbosity::new(2).unwrap());
    assert!(space.modes().draw);
    assert!(!space.modes().timing);
}

#[test]
fn test_empty_axis_rejected() {
    let (problems, heuristics) = registries();

    let mut sel = selection();
    sel.heuristics.clear();
    let err = ConfigSpace::resolve(&sel, &problems, &heuristics).unwrap_err();
    assert!(matches!(err, ConfigurationError::EmptyAxis(Axis::Heuristics)));

    let mut sel = selection();
    sel.strategies.clear();
    let err = ConfigSpace::resolve(&sel, &problems, &heuristics).unwrap_err();
    assert!(matches!(err, ConfigurationError::EmptyAxis(Axis::Strategies)));
}

#[test]
fn test_empty_axis_reported_before_unknown_identifier() {
    let (problems, heuristics) = registries();
    let mut sel = selection();
    sel.problems = vec!["nope".into()];
    sel.strategies.clear();

    let err = ConfigSpace::resolve(&sel, &problems, &heuristics).unwrap_err();
    assert!(matches!(err, ConfigurationError::EmptyAxis(Axis::Strategies)));
}

#[test]
fn test_unknown_identifiers_rejected() {
    let (problems, heuristics) = registries();

    let mut sel = selection();
    sel.problems.push("track99".into());
    let err = ConfigSpace::resolve(&sel, &problems, &heuristics).unwrap_err();
    assert!(matches!(err, ConfigurationError::UnknownProblem(ref n) if n == "track99"));

    let mut sel = selection();
    sel.heuristics = vec!["h_magic".into()];
    let err = ConfigSpace::resolve(&sel, &problems, &heuristics).unwrap_err();
    assert!(matches!(err, ConfigurationError::UnknownHeuristic(ref n) if n == "h_magic"));

    let mut sel = selection();
    sel.strategies = vec!["ida".into()];
    let err = ConfigSpace::resolve(&sel, &problems, &heuristics).unwrap_err();
    assert!(matches!(err, ConfigurationError::UnknownStrategy(ref n) if n == "ida"));
}

#[test]
fn test_verbosity_out_of_range_rejected() {
    let (problems, heuristics) = registries();
    let mut sel = selection();
    sel.verbosity = 7;

    let err = ConfigSpace::resolve(&sel, &problems, &heuristics).unwrap_err();
    assert!(matches!(err, ConfigurationError::InvalidVerbosity(7)));
}

#[test]
fn test_new_rejects_empty_problems() {
    let result = ConfigSpace::<(), ()>::new(
        Vec::new(),
        vec![Named::new("h", ())],
        vec![Strategy::BreadthFirst],
        RunModes::default(),
    );
    assert!(matches!(
        result,
        Err(ConfigurationError::EmptyAxis(Axis::Problems))
    ));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ConfigurationError::EmptyAxis(Axis::Problems).to_string(),
        "the problems axis is empty"
    );
    assert_eq!(
        ConfigurationError::UnknownProblem("x".into()).to_string(),
        "unknown problem 'x'"
    );
}
