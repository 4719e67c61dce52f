//! Command-line arguments.

use std::path::PathBuf;

use bytesize::{BinaryUnit, DecimalUnit, Unit};
use clap::{ArgGroup, Parser};

/// Units the result can be shown in.
pub const OUTPUT_UNITS: [Unit; 13] = [
    Unit::Binary(BinaryUnit::B),
    Unit::Binary(BinaryUnit::KiB),
    Unit::Binary(BinaryUnit::MiB),
    Unit::Binary(BinaryUnit::GiB),
    Unit::Binary(BinaryUnit::TiB),
    Unit::Binary(BinaryUnit::PiB),
    Unit::Binary(BinaryUnit::EiB),
    Unit::Decimal(DecimalUnit::KB),
    Unit::Decimal(DecimalUnit::MB),
    Unit::Decimal(DecimalUnit::GB),
    Unit::Decimal(DecimalUnit::TB),
    Unit::Decimal(DecimalUnit::PB),
    Unit::Decimal(DecimalUnit::EB),
];

/// Evaluate an arithmetic expression over sizes and numbers.
#[derive(Debug, Parser)]
#[allow(clippy::struct_excessive_bools)]
#[command(name = "bs-calc")]
#[command(version)]
#[command(about = "Calculator for storage sizes")]
#[command(long_about = r#"
Evaluates an arithmetic expression whose operands are integers, decimal
numbers or size specifications such as "1.5 GiB". Operators: + - * / // % **
and parentheses.

Examples:
  bs-calc 1 GiB + 512 MiB
  bs-calc --MiB "(2 TB - 1 TiB) / 3"
  bs-calc 10 GiB / 4 KiB
"#)]
#[command(allow_negative_numbers = true)]
#[command(group(ArgGroup::new("unit_choice").multiple(false)))]
pub struct Args {
    /// Unit to show the result in
    #[arg(short, long, value_name = "UNIT", value_parser = parse_output_unit, group = "unit_choice")]
    pub unit: Option<Unit>,

    /// Show result in bytes
    #[arg(short = 'b', visible_short_alias = 'B', group = "unit_choice")]
    pub bytes: bool,

    /// Show result in KiB
    #[arg(short = 'k', visible_short_alias = 'K', long = "KiB", group = "unit_choice")]
    pub kib: bool,

    /// Show result in MiB
    #[arg(short = 'm', visible_short_alias = 'M', long = "MiB", group = "unit_choice")]
    pub mib: bool,

    /// Show result in GiB
    #[arg(short = 'g', visible_short_alias = 'G', long = "GiB", group = "unit_choice")]
    pub gib: bool,

    /// Show result in TiB
    #[arg(short = 't', visible_short_alias = 'T', long = "TiB", group = "unit_choice")]
    pub tib: bool,

    /// Show result in PiB
    #[arg(short = 'p', visible_short_alias = 'P', long = "PiB", group = "unit_choice")]
    pub pib: bool,

    /// Show result in EiB
    #[arg(short = 'e', visible_short_alias = 'E', long = "EiB", group = "unit_choice")]
    pub eib: bool,

    /// Show result in KB
    #[arg(long = "KB", group = "unit_choice")]
    pub kb: bool,

    /// Show result in MB
    #[arg(long = "MB", group = "unit_choice")]
    pub mb: bool,

    /// Show result in GB
    #[arg(long = "GB", group = "unit_choice")]
    pub gb: bool,

    /// Show result in TB
    #[arg(long = "TB", group = "unit_choice")]
    pub tb: bool,

    /// Show result in PB
    #[arg(long = "PB", group = "unit_choice")]
    pub pb: bool,

    /// Show result in EB
    #[arg(long = "EB", group = "unit_choice")]
    pub eb: bool,

    /// Decimal places in the output [default: 2]
    #[arg(long, value_name = "N")]
    pub places: Option<u32>,

    /// Configuration file path
    #[arg(short, long, value_name = "PATH", env = "BS_CALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Expression to evaluate; parts are joined with spaces
    #[arg(
        value_name = "EXPRESSION_PART",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub expression: Vec<String>,
}

impl Args {
    /// The unit chosen with `--unit` or one of the shortcut flags.
    pub fn selected_unit(&self) -> Option<Unit> {
        if self.unit.is_some() {
            return self.unit;
        }
        let shortcuts = [
            (self.bytes, Unit::Binary(BinaryUnit::B)),
            (self.kib, Unit::Binary(BinaryUnit::KiB)),
            (self.mib, Unit::Binary(BinaryUnit::MiB)),
            (self.gib, Unit::Binary(BinaryUnit::GiB)),
            (self.tib, Unit::Binary(BinaryUnit::TiB)),
            (self.pib, Unit::Binary(BinaryUnit::PiB)),
            (self.eib, Unit::Binary(BinaryUnit::EiB)),
            (self.kb, Unit::Decimal(DecimalUnit::KB)),
            (self.mb, Unit::Decimal(DecimalUnit::MB)),
            (self.gb, Unit::Decimal(DecimalUnit::GB)),
            (self.tb, Unit::Decimal(DecimalUnit::TB)),
            (self.pb, Unit::Decimal(DecimalUnit::PB)),
            (self.eb, Unit::Decimal(DecimalUnit::EB)),
        ];
        shortcuts.into_iter().find_map(|(set, unit)| set.then_some(unit))
    }

    /// The expression parts joined into one string.
    pub fn expression(&self) -> String {
        self.expression.join(" ")
    }
}

/// Parse one of [`OUTPUT_UNITS`] by its exact name.
pub fn parse_output_unit(name: &str) -> Result<Unit, String> {
    OUTPUT_UNITS
        .into_iter()
        .find(|unit| unit.name() == name)
        .ok_or_else(|| {
            let names: Vec<_> = OUTPUT_UNITS.iter().map(|unit| unit.name()).collect();
            format!("invalid unit '{name}' (choose from {})", names.join(", "))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("bs-calc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[rstest]
    #[case(&["-k", "1"], Some(Unit::Binary(BinaryUnit::KiB)))]
    #[case(&["-K", "1"], Some(Unit::Binary(BinaryUnit::KiB)))]
    #[case(&["--KiB", "1"], Some(Unit::Binary(BinaryUnit::KiB)))]
    #[case(&["-B", "1"], Some(Unit::Binary(BinaryUnit::B)))]
    #[case(&["--GB", "1"], Some(Unit::Decimal(DecimalUnit::GB)))]
    #[case(&["-u", "MiB", "1"], Some(Unit::Binary(BinaryUnit::MiB)))]
    #[case(&["--unit", "EB", "1"], Some(Unit::Decimal(DecimalUnit::EB)))]
    #[case(&["1"], None)]
    fn unit_selection(#[case] args: &[&str], #[case] expected: Option<Unit>) {
        assert_eq!(parse(args).selected_unit(), expected);
    }

    #[test]
    fn unit_flags_are_mutually_exclusive() {
        let err = Args::try_parse_from(["bs-calc", "-k", "-m", "1"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn unit_option_rejects_unknown_names() {
        assert!(Args::try_parse_from(["bs-calc", "-u", "YiB", "1"]).is_err());
        assert!(Args::try_parse_from(["bs-calc", "-u", "kib", "1"]).is_err());
    }

    #[test]
    fn expression_parts_are_joined() {
        let args = parse(&["1", "GiB", "+", "3", "MiB"]);
        assert_eq!(args.expression(), "1 GiB + 3 MiB");
    }

    #[test]
    fn leading_negative_number_is_an_operand() {
        let args = parse(&["-1", "KiB", "-", "2"]);
        assert_eq!(args.expression(), "-1 KiB - 2");
        assert_eq!(args.selected_unit(), None);
    }

    #[test]
    fn flags_after_expression_are_operands() {
        let args = parse(&["--places", "3", "1", "KiB", "-k"]);
        assert_eq!(args.places, Some(3));
        assert_eq!(args.expression(), "1 KiB -k");
    }

    #[test]
    fn expression_is_required() {
        assert!(Args::try_parse_from(["bs-calc"]).is_err());
    }
}
