use clap::{Parser, Subcommand, ValueEnum};
use solid_payments::{Config, Principle, Variant};

#[derive(Parser)]
#[command(name = "solid-payments")]
#[command(about = "SOLID principles demonstrated on a payment domain.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Only show one side of each demo
    #[arg(long, value_enum, global = true)]
    pub only: Option<VariantArg>,
}

#[derive(Subcommand, Clone, Copy)]
pub enum Commands {
    /// Single Responsibility: account, viewer and repository
    #[command(alias = "s")]
    Srp,
    /// Open-Closed: payment methods as extensions
    #[command(alias = "o")]
    Ocp,
    /// Liskov Substitution: payments with and without broker access
    #[command(alias = "l")]
    Lsp,
    /// Interface Segregation: devices with narrow contracts
    #[command(alias = "i")]
    Isp,
    /// Dependency Inversion: layered broker transaction
    #[command(alias = "d")]
    Dip,
    /// Every principle in S-O-L-I-D order
    #[command(alias = "a")]
    All,
}

#[derive(ValueEnum, Clone, Copy)]
pub enum VariantArg {
    Violation,
    Fix,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Violation => Variant::Violation,
            VariantArg::Fix => Variant::Fix,
        }
    }
}

impl Commands {
    /// `None` means every principle
    pub fn principle(&self) -> Option<Principle> {
        match self {
            Commands::Srp => Some(Principle::Srp),
            Commands::Ocp => Some(Principle::Ocp),
            Commands::Lsp => Some(Principle::Lsp),
            Commands::Isp => Some(Principle::Isp),
            Commands::Dip => Some(Principle::Dip),
            Commands::All => None,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            only: self.only.map(Variant::from),
        }
    }

    pub fn principle(&self) -> Option<Principle> {
        self.command.unwrap_or(Commands::All).principle()
    }
}
