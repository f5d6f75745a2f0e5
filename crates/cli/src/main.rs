use std::{error::Error, fmt::Write};

use clap::{Args, Parser, Subcommand};
use engine::{
    CalculationInput, CalculationResult, DivisionMethod, MoneyCents, PersonResult, ShareData,
    ShareParams, build_share_url, calculate_all,
};

#[derive(Parser, Debug)]
#[command(name = "rateio_cli")]
#[command(about = "Split shared household expenses between two people")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the division methods on the given amounts.
    Calc(CalcArgs),
    /// Print a share link for the given amounts.
    Share(ShareArgs),
    /// Decode a share link and run every division method on it.
    Decode(DecodeArgs),
}

#[derive(Args, Debug)]
struct Amounts {
    /// Monthly income of the first person, in reais (e.g. `5000` or `5000,50`).
    #[arg(long, value_parser = parse_money)]
    income_a: i64,
    /// Monthly income of the second person, in reais.
    #[arg(long, value_parser = parse_money)]
    income_b: i64,
    /// Total shared monthly expenses, in reais.
    #[arg(long, value_parser = parse_money)]
    expenses: i64,
    /// Weekly housework hours of the first person.
    #[arg(long, default_value_t = 0)]
    housework_a: u32,
    /// Weekly housework hours of the second person.
    #[arg(long, default_value_t = 0)]
    housework_b: u32,
}

#[derive(Args, Debug)]
struct CalcArgs {
    #[command(flatten)]
    amounts: Amounts,
    /// Only run this method (proportional, adjusted, hybrid, equal).
    #[arg(long)]
    method: Option<DivisionMethod>,
    /// Monthly minimum wage, in reais.
    #[arg(long, env = "RATEIO_MINIMUM_WAGE", default_value = "1518", value_parser = parse_money)]
    minimum_wage: i64,
}

#[derive(Args, Debug)]
struct ShareArgs {
    #[arg(long)]
    name_a: String,
    #[arg(long)]
    name_b: String,
    #[command(flatten)]
    amounts: Amounts,
    /// Origin of the share link.
    #[arg(long, env = "RATEIO_PUBLIC_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Share link, or just its query string.
    link: String,
    /// Monthly minimum wage, in reais.
    #[arg(long, env = "RATEIO_MINIMUM_WAGE", default_value = "1518", value_parser = parse_money)]
    minimum_wage: i64,
}

fn parse_money(raw: &str) -> Result<i64, String> {
    let amount = raw.parse::<MoneyCents>().map_err(|err| err.to_string())?;
    if amount.is_negative() {
        return Err("amount must not be negative".to_string());
    }
    Ok(amount.cents())
}

impl Amounts {
    fn input(&self, minimum_wage: i64) -> CalculationInput {
        CalculationInput {
            income_a: self.income_a,
            income_b: self.income_b,
            expenses: self.expenses,
            housework_a: self.housework_a,
            housework_b: self.housework_b,
            minimum_wage,
        }
    }
}

fn render_person(out: &mut String, name: &str, person: &PersonResult) {
    let _ = write!(
        out,
        "  {name:<12} pays {:>16} ({:>6.2}% of expenses, {:>6.2}% of income), left {}",
        MoneyCents::new(person.contribution).to_string(),
        person.expense_percentage,
        person.income_percentage,
        MoneyCents::new(person.remaining),
    );
    if person.housework_value > 0 {
        let _ = write!(
            out,
            ", housework worth {}",
            MoneyCents::new(person.housework_value)
        );
    }
    out.push('\n');
}

fn render(method: DivisionMethod, result: &CalculationResult, names: (&str, &str)) -> String {
    let mut out = format!("{} [{method}]\n", method.title());
    render_person(&mut out, names.0, &result.person_a);
    render_person(&mut out, names.1, &result.person_b);
    out
}

fn print_all(input: &CalculationInput, names: (&str, &str)) {
    for (method, result) in calculate_all(input) {
        println!("{}", render(method, &result, names));
    }
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Calc(args) => {
            let input = args.amounts.input(args.minimum_wage);
            match args.method {
                Some(method) => print!("{}", render(method, &method.calculate(&input), ("A", "B"))),
                None => print_all(&input, ("A", "B")),
            }
        }
        Command::Share(args) => {
            let data = ShareData {
                name_a: args.name_a,
                income_a: args.amounts.income_a,
                name_b: args.name_b,
                income_b: args.amounts.income_b,
                expenses: args.amounts.expenses,
                housework_a: args.amounts.housework_a,
                housework_b: args.amounts.housework_b,
            }
            .validated()?;
            println!("{}", build_share_url(&data, &args.base_url));
        }
        Command::Decode(args) => {
            let data = ShareParams::parse_url(&args.link)?;
            print_all(
                &data.to_input(args.minimum_wage),
                (&data.name_a, &data.name_b),
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_money_rejects_negative() {
        assert_eq!(parse_money("1518"), Ok(151_800));
        assert_eq!(parse_money("10,5"), Ok(1050));
        assert!(parse_money("-1").is_err());
        assert!(parse_money("ten").is_err());
    }

    #[test]
    fn calc_args_parse_method_and_amounts() {
        let cli = Cli::try_parse_from([
            "rateio_cli",
            "calc",
            "--income-a",
            "5000",
            "--income-b",
            "3000",
            "--expenses",
            "2000",
            "--method",
            "hybrid",
        ])
        .unwrap();

        let Command::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        assert_eq!(args.method, Some(DivisionMethod::Hybrid));
        assert_eq!(args.amounts.income_a, 500_000);
        assert_eq!(args.amounts.housework_a, 0);
    }

    #[test]
    fn render_shows_both_people() {
        let input = CalculationInput {
            income_a: 500_000,
            income_b: 300_000,
            expenses: 200_000,
            ..Default::default()
        };
        let method = DivisionMethod::Proportional;
        let text = render(method, &method.calculate(&input), ("Ana", "Bia"));

        assert!(text.starts_with("Proporcional à renda [proportional]\n"));
        assert!(text.contains("Ana"));
        assert!(text.contains("R$ 1.250,00"));
        assert!(text.contains("R$ 750,00"));
        assert!(text.contains("62.50% of expenses"));
    }
}
