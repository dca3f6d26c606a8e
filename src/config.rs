use crate::frontier::Policy;

/// Settings for one solver invocation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Frontier ordering used for every maze.
    pub policy: Policy,
    /// Print the maze after every step and wait for Enter.
    pub interactive: bool,
    /// Print the explored maze once the traversal ends.
    pub show_final: bool,
}

impl SolverConfig {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn show_final(mut self, show_final: bool) -> Self {
        self.show_final = show_final;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_quiet_stack_search() {
        let config = SolverConfig::default();
        assert_eq!(config.policy, Policy::Stack);
        assert!(!config.interactive);
        assert!(!config.show_final);
    }

    #[test]
    fn builder_sets_flags() {
        let config = SolverConfig::new(Policy::Queue)
            .interactive(true)
            .show_final(true);
        assert_eq!(config.policy, Policy::Queue);
        assert!(config.interactive);
        assert!(config.show_final);
    }
}
