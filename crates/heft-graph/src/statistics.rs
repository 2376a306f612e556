use serde::{Deserialize, Serialize};

/// Summary counts over one report and threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub module_count: usize,
    /// Modules with an entry reason or no reasons at all
    pub entry_count: usize,
    /// Distinct causer -> caused edges in the requirement index
    pub edge_count: usize,
    /// Modules whose total size is above the threshold
    pub included_count: usize,
    /// Modules that sit on at least one reason cycle
    pub cyclic_module_count: usize,
    pub total_own_size: u64,
}

impl GraphStatistics {
    /// Share of modules that pass the threshold, in `0.0..=1.0`.
    pub fn included_ratio(&self) -> f64 {
        if self.module_count == 0 {
            0.0
        } else {
            self.included_count as f64 / self.module_count as f64
        }
    }

    pub fn has_cycles(&self) -> bool {
        self.cyclic_module_count > 0
    }
}
