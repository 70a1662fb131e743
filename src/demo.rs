// 🎓 Demo runner
// Picks principles and variants and writes their output with banners.

use anyhow::Result;
use std::io::Write;
use tracing::info;

use crate::config::Config;
use crate::{console, dip, isp, lsp, ocp, srp};

// ============================================================================
// PRINCIPLE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principle {
    /// Single Responsibility
    Srp,

    /// Open-Closed
    Ocp,

    /// Liskov Substitution
    Lsp,

    /// Interface Segregation
    Isp,

    /// Dependency Inversion
    Dip,
}

impl Principle {
    /// S-O-L-I-D order
    pub const ALL: [Principle; 5] = [
        Principle::Srp,
        Principle::Ocp,
        Principle::Lsp,
        Principle::Isp,
        Principle::Dip,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Principle::Srp => "srp",
            Principle::Ocp => "ocp",
            Principle::Lsp => "lsp",
            Principle::Isp => "isp",
            Principle::Dip => "dip",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Principle::Srp => "S - Single Responsibility Principle",
            Principle::Ocp => "O - Open-Closed Principle",
            Principle::Lsp => "L - Liskov Substitution Principle",
            Principle::Isp => "I - Interface Segregation Principle",
            Principle::Dip => "D - Dependency Inversion Principle",
        }
    }

    pub fn run_variant(&self, variant: Variant, out: &mut dyn Write) -> Result<()> {
        match (self, variant) {
            (Principle::Srp, Variant::Violation) => srp::run_violation(out),
            (Principle::Srp, Variant::Fix) => srp::run_fix(out),
            (Principle::Ocp, Variant::Violation) => ocp::run_violation(out),
            (Principle::Ocp, Variant::Fix) => ocp::run_fix(out),
            (Principle::Lsp, Variant::Violation) => lsp::run_violation(out),
            (Principle::Lsp, Variant::Fix) => lsp::run_fix(out),
            (Principle::Isp, Variant::Violation) => isp::run_violation(out),
            (Principle::Isp, Variant::Fix) => isp::run_fix(out),
            (Principle::Dip, Variant::Violation) => dip::run_violation(out),
            (Principle::Dip, Variant::Fix) => dip::run_fix(out),
        }
    }
}

// ============================================================================
// VARIANT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Violation,
    Fix,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Violation, Variant::Fix];

    pub fn heading(&self) -> &'static str {
        match self {
            Variant::Violation => "❌ Violation",
            Variant::Fix => "✅ Fix",
        }
    }
}

// ============================================================================
// RUNNER
// ============================================================================

pub fn run_principle(principle: Principle, config: &Config, out: &mut dyn Write) -> Result<()> {
    info!(principle = principle.as_str(), "running demo");

    console::banner(out, principle.title())?;
    for variant in config.variants() {
        console::section(out, variant.heading())?;
        principle.run_variant(variant, out)?;
    }

    Ok(())
}

pub fn run_all(config: &Config, out: &mut dyn Write) -> Result<()> {
    for (idx, principle) in Principle::ALL.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        run_principle(*principle, config, out)?;
    }

    console::footer(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{captured_lines, SEPARATOR};

    #[test]
    fn test_run_principle_lsp_fix_only() {
        let config = Config {
            only: Some(Variant::Fix),
        };

        let mut buf = Vec::new();
        run_principle(Principle::Lsp, &config, &mut buf).unwrap();

        assert_eq!(
            captured_lines(&buf),
            vec![
                "L - Liskov Substitution Principle",
                SEPARATOR,
                "",
                "✅ Fix",
                "CheckingAccount",
                "transferPix...",
                "transferTed...",
                "transferBroker...",
                "SavingAccount",
                "transferPix...",
                "transferTed...",
            ]
        );
    }

    #[test]
    fn test_run_principle_dip_both_variants() {
        let mut buf = Vec::new();
        run_principle(Principle::Dip, &Config::default(), &mut buf).unwrap();

        assert_eq!(
            captured_lines(&buf),
            vec![
                "D - Dependency Inversion Principle",
                SEPARATOR,
                "",
                "❌ Violation",
                "CheckingAccount",
                "transferBroker...",
                "",
                "✅ Fix",
                r#"request... {"value":1200.0}"#,
            ]
        );
    }

    #[test]
    fn test_run_all_is_deterministic() {
        let config = Config::default();

        let mut first = Vec::new();
        run_all(&config, &mut first).unwrap();
        let mut second = Vec::new();
        run_all(&config, &mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_run_all_covers_every_principle_in_order() {
        let mut buf = Vec::new();
        run_all(&Config::default(), &mut buf).unwrap();
        let lines = captured_lines(&buf);

        let titles: Vec<&str> = Principle::ALL.iter().map(|p| p.title()).collect();
        let seen: Vec<&str> = lines
            .iter()
            .map(|l| l.as_str())
            .filter(|l| titles.contains(l))
            .collect();

        assert_eq!(seen, titles);
        assert_eq!(lines.last().map(|l| l.as_str()), Some(SEPARATOR));
    }
}
