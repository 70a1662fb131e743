use crate::demo::Variant;

/// Runtime options for the demo runner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Restrict output to one variant. `None` runs violation then fix.
    pub only: Option<Variant>,
}

impl Config {
    pub fn variants(&self) -> Vec<Variant> {
        match self.only {
            Some(variant) => vec![variant],
            None => Variant::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs_both_in_order() {
        assert_eq!(
            Config::default().variants(),
            vec![Variant::Violation, Variant::Fix]
        );
    }

    #[test]
    fn test_only_restricts() {
        let config = Config {
            only: Some(Variant::Fix),
        };
        assert_eq!(config.variants(), vec![Variant::Fix]);
    }
}
