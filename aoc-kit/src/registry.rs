//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::puzzle::PuzzleKind;
use crate::solver::{Solver, Summarize};

/// Thread-safe factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub kind: PuzzleKind,
    /// Number of parts this solver supports
    pub parts: u8,
    pub tags: &'static [&'static str],
}

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
    tags: &'static [&'static str],
}

/// Builder for constructing a [`SolverRegistry`]
///
/// Storage is a flat array indexed by [`PuzzleKind::index`], so each puzzle
/// has at most one solver. Registering a second one is an error.
///
/// # Example
///
/// ```no_run
/// # use aoc_kit::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: [Option<SolverFactoryEntry>; PuzzleKind::COUNT],
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            entries: std::array::from_fn(|_| None),
        }
    }

    /// Register a solver factory for a puzzle
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - A solver is already registered for `kind`
    pub fn register<F>(
        mut self,
        kind: PuzzleKind,
        parts: u8,
        tags: &'static [&'static str],
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let slot = &mut self.entries[kind.index()];
        if slot.is_some() {
            return Err(RegistrationError::DuplicateSolver(kind));
        }
        *slot = Some(SolverFactoryEntry {
            factory: Box::new(factory),
            parts,
            tags,
        });
        tracing::debug!(puzzle = %kind, parts, "registered solver");
        Ok(self)
    }

    /// Register a concrete solver type for a puzzle
    pub fn register_solver<S>(
        self,
        kind: PuzzleKind,
        tags: &'static [&'static str],
    ) -> Result<Self, RegistrationError>
    where
        S: Solver + Summarize + 'static,
    {
        self.register(kind, S::PARTS, tags, move |input: &str| {
            let instance = SolverInstance::<S>::new(kind, input)?;
            Ok(Box::new(instance) as Box<dyn DynSolver + '_>)
        })
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!`.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc_kit::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"search"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.kind, plugin.tags)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
pub struct SolverRegistry {
    entries: [Option<SolverFactoryEntry>; PuzzleKind::COUNT],
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for `kind`
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError)` - Solver not registered or parsing failed
    pub fn create_solver<'a>(
        &self,
        kind: PuzzleKind,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self.entries[kind.index()]
            .as_ref()
            .ok_or(SolverError::NotRegistered(kind))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Get metadata for a specific puzzle
    pub fn get_info(&self, kind: PuzzleKind) -> Option<FactoryInfo> {
        self.entries[kind.index()].as_ref().map(|e| FactoryInfo {
            kind,
            parts: e.parts,
            tags: e.tags,
        })
    }

    /// Iterate over metadata for all registered solvers in kind order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        PuzzleKind::ALL
            .into_iter()
            .filter_map(|kind| self.get_info(kind))
    }

    pub fn contains(&self, kind: PuzzleKind) -> bool {
        self.entries[kind.index()].is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Type-erased handle that lets a solver register itself
///
/// Implemented for every `Solver + Summarize` type by a blanket impl, so
/// different solver types can sit in one plugin collection.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: RegistryBuilder,
        kind: PuzzleKind,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Summarize + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        kind: PuzzleKind,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(kind, tags)
    }
}

/// Plugin information for automatic solver registration
///
/// Usually submitted by `#[derive(AutoRegisterSolver)]`.
pub struct SolverPlugin {
    pub kind: PuzzleKind,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering (e.g., "grid", "search")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);
