use strum_macros::{Display, EnumIter, EnumString};

/// The collector's top-level operating mode. Exactly one mode is active per process.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum GCMode {
    /// Concurrent marking with snapshot-at-the-beginning enqueueing.
    #[default]
    #[strum(to_string = "satb", serialize = "concurrent")]
    Concurrent,
    /// Concurrent marking with incremental-update enqueueing.
    #[strum(to_string = "iu", serialize = "incremental-update")]
    IncrementalUpdate,
    /// Stop-the-world only. No concurrent phase runs.
    #[strum(to_string = "passive")]
    Passive,
}

impl GCMode {
    /// Whether this mode runs concurrent phases, and so consults the heuristics at all.
    pub fn is_concurrent(self) -> bool {
        match self {
            GCMode::Concurrent | GCMode::IncrementalUpdate => true,
            GCMode::Passive => false,
        }
    }
}

/// Decides when a concurrent cycle is triggered. Heuristics never change which
/// barriers a mode needs, only how often collection happens.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Heuristic {
    #[default]
    Adaptive,
    Static,
    Compact,
    Aggressive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_modes() {
        assert_eq!("satb".parse::<GCMode>(), Ok(GCMode::Concurrent));
        assert_eq!("concurrent".parse::<GCMode>(), Ok(GCMode::Concurrent));
        assert_eq!("iu".parse::<GCMode>(), Ok(GCMode::IncrementalUpdate));
        assert_eq!("IU".parse::<GCMode>(), Ok(GCMode::IncrementalUpdate));
        assert_eq!("passive".parse::<GCMode>(), Ok(GCMode::Passive));
        assert!("generational".parse::<GCMode>().is_err());
        assert!("".parse::<GCMode>().is_err());
    }

    #[test]
    fn display_modes() {
        assert_eq!(GCMode::Concurrent.to_string(), "satb");
        assert_eq!(GCMode::IncrementalUpdate.to_string(), "iu");
        assert_eq!(GCMode::Passive.to_string(), "passive");
    }

    #[test]
    fn parse_heuristics() {
        assert_eq!("adaptive".parse::<Heuristic>(), Ok(Heuristic::Adaptive));
        assert_eq!("static".parse::<Heuristic>(), Ok(Heuristic::Static));
        assert_eq!("compact".parse::<Heuristic>(), Ok(Heuristic::Compact));
        assert_eq!("Aggressive".parse::<Heuristic>(), Ok(Heuristic::Aggressive));
        assert!("passive".parse::<Heuristic>().is_err());
        assert_eq!(Heuristic::Static.to_string(), "static");
    }

    #[test]
    fn defaults() {
        assert_eq!(GCMode::default(), GCMode::Concurrent);
        assert_eq!(Heuristic::default(), Heuristic::Adaptive);
        assert!(!GCMode::Passive.is_concurrent());
    }
}
