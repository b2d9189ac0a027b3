use aoc_kit::{
    AocParser, AocSolver, AutoRegisterSolver, NavigationReport, ParseError, PartSolver,
    PuzzleKind, RegistryBuilder, SolveError, SolverError, SolverResult, Summarize,
};

/// Counts "forward" lines only
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(kind = Navigation, tags = ["test", "combined"])]
struct ForwardCounter;

impl AocParser for ForwardCounter {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().collect())
    }
}

impl PartSolver<1> for ForwardCounter {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .filter(|line| line.starts_with("forward"))
            .count()
            .to_string())
    }
}

impl Summarize for ForwardCounter {
    fn summarize(shared: &mut Self::SharedData<'_>) -> Result<SolverResult, SolveError> {
        Ok(NavigationReport {
            commands: shared.len(),
            ..NavigationReport::default()
        }
        .into())
    }
}

#[test]
fn test_plugin_is_registered() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    let info = registry
        .get_info(PuzzleKind::Navigation)
        .expect("plugin should be registered");
    assert_eq!(info.parts, 1);
    assert_eq!(info.tags, &["test", "combined"]);

    let mut solver = registry
        .create_solver(PuzzleKind::Navigation, "forward 1\ndown 2\nforward 3")
        .unwrap();
    assert_eq!(solver.solve(1).unwrap().value, "2");
    assert_eq!(
        solver.summarize().unwrap().value,
        SolverResult::Navigation(NavigationReport {
            commands: 3,
            ..NavigationReport::default()
        })
    );
}

#[test]
fn test_tag_filter_excludes_plugin() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"other"))
        .unwrap()
        .build();

    assert!(registry.is_empty());
    assert!(matches!(
        registry.create_solver(PuzzleKind::Navigation, ""),
        Err(SolverError::NotRegistered(PuzzleKind::Navigation))
    ));
}
