//! Configuration types for controlling generation budgets.

use std::time::Duration;

/// Default number of samples a filtered strategy draws before giving up
pub const DEFAULT_MAX_FILTER_ATTEMPTS: usize = 1000;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Invalid filter attempt budget (must be > 0)
    InvalidFilterAttempts(usize),
    /// Invalid number of shrink iterations (must be > 0)
    InvalidShrinkIterations(usize),
    /// Invalid timeout (must be > 0)
    InvalidTimeout,
    /// Invalid thread count (must be > 0)
    InvalidThreadCount(usize),
    /// A choice strategy was built from an empty collection
    EmptyChoices,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidFilterAttempts(n) => {
                write!(f, "Invalid filter attempts: {} (must be > 0)", n)
            }
            ConfigError::InvalidShrinkIterations(n) => {
                write!(f, "Invalid shrink iterations count: {} (must be > 0)", n)
            }
            ConfigError::InvalidTimeout => {
                write!(f, "Invalid timeout (must be > 0)")
            }
            ConfigError::InvalidThreadCount(n) => {
                write!(f, "Invalid thread count: {} (must be > 0)", n)
            }
            ConfigError::EmptyChoices => {
                write!(f, "Cannot choose from an empty collection")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration for generators
///
/// The filter budget applies to each individual `generate` call; nothing is
/// carried over between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Maximum samples drawn by a filtered strategy per generated value
    pub max_filter_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_filter_attempts: DEFAULT_MAX_FILTER_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    /// Create a new generator configuration with validation
    pub fn new(max_filter_attempts: usize) -> Result<Self, ConfigError> {
        let config = Self {
            max_filter_attempts,
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the filter budget
    pub fn with_max_filter_attempts(mut self, max_filter_attempts: usize) -> Self {
        self.max_filter_attempts = max_filter_attempts;
        self
    }

    /// Validate the generator configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_filter_attempts == 0 {
            return Err(ConfigError::InvalidFilterAttempts(self.max_filter_attempts));
        }
        Ok(())
    }
}

/// Configuration for shrinking behavior
#[derive(Debug, Clone, PartialEq)]
pub struct ShrinkConfig {
    /// Maximum number of successful shrink steps
    pub max_iterations: usize,
    /// Timeout for the whole shrinking process
    pub timeout: Duration,
}

impl Default for ShrinkConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            timeout: Duration::from_secs(10),
        }
    }
}

impl ShrinkConfig {
    /// Create a new shrink configuration with validation
    pub fn new(max_iterations: usize, timeout: Duration) -> Result<Self, ConfigError> {
        let config = Self {
            max_iterations,
            timeout,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create a shrink configuration with custom timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }

    /// Create a shrink configuration with custom max iterations
    pub fn with_max_iterations(max_iterations: usize) -> Self {
        Self {
            max_iterations,
            ..Default::default()
        }
    }

    /// Validate the shrink configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidShrinkIterations(self.max_iterations));
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }
}

/// Configuration for parallel sampling
#[derive(Debug, Clone, PartialEq)]
pub struct ParallelConfig {
    /// Number of threads to spread samples over
    pub num_threads: usize,
    /// Whether to use more than one thread at all
    pub enabled: bool,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_threads: num_cpus::get(),
            enabled: true,
        }
    }
}

impl ParallelConfig {
    /// Configuration that samples on the calling thread only
    pub fn sequential() -> Self {
        Self {
            num_threads: 1,
            enabled: false,
        }
    }

    /// Validate the parallel configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_threads == 0 {
            return Err(ConfigError::InvalidThreadCount(self.num_threads));
        }
        Ok(())
    }
}
