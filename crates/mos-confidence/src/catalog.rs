//! The ordered catalog of estimation methods
//!
//! Result matrices are indexed `[condition][method]`; this module fixes
//! the method ordering and carries the presentation strings. The catalog
//! is not used for computation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of estimation methods in the catalog
pub const NUM_METHODS: usize = 8;

/// One of the eight interval estimation methods, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Percentile bootstrap over resample means
    Bootstrap,
    /// Normal approximation on the mean
    Normal,
    /// Student-t approximation on the mean
    StudentT,
    /// Wald binomial-proportion interval
    Wald,
    /// Continuity-corrected Wilson score interval
    Wilson,
    /// Exact Clopper-Pearson interval
    ClopperPearson,
    /// Jeffreys-prior credible interval
    Jeffreys,
    /// Simultaneous multinomial-proportion interval
    Simultaneous,
}

impl Method {
    /// All methods in the fixed catalog order
    pub const ALL: [Method; NUM_METHODS] = [
        Method::Bootstrap,
        Method::Normal,
        Method::StudentT,
        Method::Wald,
        Method::Wilson,
        Method::ClopperPearson,
        Method::Jeffreys,
        Method::Simultaneous,
    ];

    /// Full method name for presentation
    pub fn name(&self) -> &'static str {
        match self {
            Method::Bootstrap => "Bootstrap",
            Method::Normal => "Normal approximation",
            Method::StudentT => "Student-t approximation",
            Method::Wald => "Wald",
            Method::Wilson => "Wilson with continuity correction",
            Method::ClopperPearson => "Clopper-Pearson",
            Method::Jeffreys => "Jeffreys",
            Method::Simultaneous => "Simultaneous CI for multinomial proportions",
        }
    }

    /// Short label for compact table headers
    pub fn short_label(&self) -> &'static str {
        match self {
            Method::Bootstrap => "boot",
            Method::Normal => "norm",
            Method::StudentT => "t",
            Method::Wald => "wald",
            Method::Wilson => "wilson",
            Method::ClopperPearson => "cp",
            Method::Jeffreys => "jeff",
            Method::Simultaneous => "simult",
        }
    }

    /// Column index of this method in the result matrices
    pub fn index(&self) -> usize {
        // Declaration order is the catalog order
        *self as usize
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asymptotic::{NormalCI, StudentTCI};
    use crate::binomial::{ClopperPearsonCI, JeffreysCI, WaldCI, WilsonCI};
    use crate::bootstrap::BootstrapCI;
    use crate::multinomial::SimultaneousCI;
    use crate::traits::MosIntervalEstimator;
    use crate::types::SignificanceLevel;

    #[test]
    fn test_catalog_order_and_indices() {
        assert_eq!(Method::ALL.len(), NUM_METHODS);
        for (i, method) in Method::ALL.iter().enumerate() {
            assert_eq!(method.index(), i);
        }
        assert_eq!(Method::Bootstrap.index(), 0);
        assert_eq!(Method::Simultaneous.index(), 7);
    }

    #[test]
    fn test_catalog_matches_strategy_names() {
        // The catalog strings must agree with what each strategy reports
        let level = SignificanceLevel::default();
        let bootstrap = BootstrapCI::new(level);
        let normal = NormalCI::new(level);
        let student_t = StudentTCI::new(level);
        let wald = WaldCI::new(level);
        let wilson = WilsonCI::new(level);
        let clopper_pearson = ClopperPearsonCI::new(level);
        let jeffreys = JeffreysCI::new(level);
        let simultaneous = SimultaneousCI::new(level);
        let strategies: [(&dyn MosIntervalEstimator, Method); NUM_METHODS] = [
            (&bootstrap, Method::Bootstrap),
            (&normal, Method::Normal),
            (&student_t, Method::StudentT),
            (&wald, Method::Wald),
            (&wilson, Method::Wilson),
            (&clopper_pearson, Method::ClopperPearson),
            (&jeffreys, Method::Jeffreys),
            (&simultaneous, Method::Simultaneous),
        ];

        for (strategy, method) in strategies {
            assert_eq!(strategy.name(), method.name());
            assert_eq!(strategy.short_label(), method.short_label());
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Method::ClopperPearson).unwrap();
        let back: Method = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Method::ClopperPearson);
    }
}
