use super::*;

#[test]
fn menu_ids_resolve_to_kinds() {
    for kind in ChartKind::ALL {
        assert_eq!(ChartKind::from_menu_id(kind.label()), kind);
    }
    assert_eq!(ChartKind::from_menu_id("Pie Chart"), ChartKind::AnnotatedLine);
    assert_eq!(ChartKind::from_menu_id(""), ChartKind::AnnotatedLine);
}

#[test]
fn default_is_the_transition_scatterplot() {
    assert_eq!(ChartKind::default(), ChartKind::TransitionScatter);
}

#[test]
fn exactly_one_entry_is_selected() {
    let m = MenuState::new(true, ChartKind::AnimatedScatter);
    assert!(m.open);
    let labels: Vec<_> = m.entries.iter().map(|e| e.label).collect();
    assert_eq!(
        labels,
        ["Annotated Line Chart", "Animated Scatterplot", "Transition Scatterplot"]
    );
    let selected: Vec<_> = m.entries.iter().filter(|e| e.selected).map(|e| e.kind).collect();
    assert_eq!(selected, [ChartKind::AnimatedScatter]);
}
