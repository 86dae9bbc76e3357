//! Exhaustive search configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the decision tree is made tractable.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchMethod {
    /// Depth-first include/exclude search that cuts subtrees whose
    /// fractional-relaxation bound cannot beat the incumbent.
    ///
    /// Exact for any real-valued costs. Exponential in the worst case.
    BranchAndBound,

    /// Dynamic program over `(position, remaining budget)` with the budget
    /// quantized to `resolution` units per unit of fuel.
    ///
    /// Runs in `O(n * budget * resolution)`. Exact when every cost and
    /// the budget are multiples of `1 / resolution`; otherwise costs are
    /// rounded up, which keeps the selection feasible but may miss the
    /// optimum.
    DynamicProgramming {
        /// Quantization steps per unit of fuel. Must be positive.
        resolution: f64,
    },
}

impl Default for SearchMethod {
    fn default() -> Self {
        SearchMethod::BranchAndBound
    }
}

/// Configuration for the exhaustive search.
///
/// # Examples
///
/// ```
/// use u_servicing::exhaustive::{ExhaustiveConfig, SearchMethod};
///
/// let config = ExhaustiveConfig::default()
///     .with_method(SearchMethod::DynamicProgramming { resolution: 10.0 })
///     .with_max_nodes(1_000_000)
///     .with_time_limit_ms(500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExhaustiveConfig {
    /// Search method.
    pub method: SearchMethod,

    /// Maximum number of visited nodes (DP: table cells). 0 = no limit.
    pub max_nodes: u64,

    /// Wall-clock limit in milliseconds. 0 = no limit.
    pub time_limit_ms: u64,

    /// Seed the incumbent with the ranked fill selection.
    pub warm_start: bool,

    /// Largest dynamic programming table allowed, in cells.
    pub max_table_cells: usize,

    /// Explore disjoint subtrees on the rayon thread pool.
    ///
    /// Only honored when the `parallel` feature is enabled. Ignored by
    /// the dynamic program.
    pub parallel: bool,

    /// Tree depth at which the parallel search splits into subtrees.
    /// Produces up to `2^split_depth` subtrees.
    pub split_depth: usize,
}

impl Default for ExhaustiveConfig {
    fn default() -> Self {
        Self {
            method: SearchMethod::default(),
            max_nodes: 0,
            time_limit_ms: 0,
            warm_start: true,
            max_table_cells: 1 << 27,
            parallel: false,
            split_depth: 8,
        }
    }
}

impl ExhaustiveConfig {
    pub fn with_method(mut self, method: SearchMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_max_nodes(mut self, n: u64) -> Self {
        self.max_nodes = n;
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    pub fn with_warm_start(mut self, enabled: bool) -> Self {
        self.warm_start = enabled;
        self
    }

    pub fn with_max_table_cells(mut self, cells: usize) -> Self {
        self.max_table_cells = cells;
        self
    }

    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    pub fn with_split_depth(mut self, depth: usize) -> Self {
        self.split_depth = depth;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if let SearchMethod::DynamicProgramming { resolution } = self.method {
            if !resolution.is_finite() || resolution <= 0.0 {
                return Err(format!(
                    "dynamic programming resolution must be positive and finite, got {resolution}"
                ));
            }
        }
        if self.max_table_cells == 0 {
            return Err("max_table_cells must be positive".into());
        }
        if self.split_depth > 20 {
            return Err(format!(
                "split_depth must be at most 20, got {}",
                self.split_depth
            ));
        }
        Ok(())
    }
}
