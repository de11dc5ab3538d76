use anyhow::{Context, Result};
use clap::Parser;
use mendel::cross::{compute_cross, Mode, Parent};
use mendel::extra::analysis::{chi_square, degrees_of_freedom, format_ratio, format_share};
use mendel::extra::instance_generators::read_crosses;
use mendel::extra::sampling::sample_offspring;
use mendel::error::CrossError;
use mendel::solution::{CrossResult, Frequencies, Tally};
use rand::prelude::*;
use std::fmt;
use std::io;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Mendelian crosses and Punnett squares", long_about = None)]
struct Args {
    /// First parent, e.g. Aa or AaBb
    #[arg(required_unless_present = "stdin")]
    parent1: Option<String>,

    /// Second parent
    #[arg(required_unless_present = "stdin")]
    parent2: Option<String>,

    /// segregation or independent-assortment; inferred from the loci when omitted
    #[arg(short, long)]
    mode: Option<Mode>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Print the Punnett square
    #[arg(short, long)]
    square: bool,

    /// Also breed this many random offspring and test them against the exact ratio
    #[arg(long)]
    sample: Option<usize>,

    /// Seed for --sample
    #[arg(long, requires = "sample")]
    seed: Option<u64>,

    /// Read one `P1 x P2` cross per line from stdin
    #[arg(long, conflicts_with_all = ["parent1", "parent2"])]
    stdin: bool,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mendel=warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

pub fn main() {
    init_tracing();
    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if args.stdin {
        let crosses = read_crosses(io::stdin().lock()).context("reading crosses from stdin")?;
        info!(n = crosses.len(), "read crosses");
        for (line, parents) in crosses {
            match parents.and_then(|(p1, p2)| run_cross(&args, &mut rng, &p1, &p2)) {
                Ok(out) => println!("{}", out),
                Err(e) => {
                    warn!(%line, error = %e, "skipping cross");
                    println!("{}", rejected(&line, &e, args.json));
                }
            }
        }
        return Ok(());
    }

    // clap guarantees both parents when --stdin is absent
    let (Some(p1), Some(p2)) = (&args.parent1, &args.parent2) else {
        anyhow::bail!("two parents are required");
    };
    let p1: Parent = p1.parse().with_context(|| format!("parent 1 {:?}", p1))?;
    let p2: Parent = p2.parse().with_context(|| format!("parent 2 {:?}", p2))?;
    let out = run_cross(&args, &mut rng, &p1, &p2)?;
    println!("{}", out);
    Ok(())
}

fn run_cross(
    args: &Args,
    rng: &mut StdRng,
    p1: &Parent,
    p2: &Parent,
) -> mendel::error::Result<String> {
    let mode = args.mode.unwrap_or_else(|| Mode::infer(p1, p2));
    let res = compute_cross(p1, p2, mode)?;
    let sample = args
        .sample
        .map(|n| sample_offspring(rng, p1, p2, mode, n))
        .transpose()?;
    if args.json {
        let v = serde_json::json!({ "cross": res, "sample": sample });
        return Ok(v.to_string());
    }
    let report = Report {
        parent1: p1,
        parent2: p2,
        result: &res,
        sample: sample.as_ref(),
        square: args.square,
    };
    Ok(report.to_string())
}

/// A rejected `--stdin` line, in the same format as the accepted ones.
fn rejected(line: &str, e: &CrossError, json: bool) -> String {
    if json {
        serde_json::json!({ "line": line, "error": e.to_string() }).to_string()
    } else {
        format!("{}: {}\n", line, e)
    }
}

struct Report<'a> {
    parent1: &'a Parent,
    parent2: &'a Parent,
    result: &'a CrossResult,
    sample: Option<&'a Tally>,
    square: bool,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let res = self.result;
        writeln!(f, "{} x {} ({})", self.parent1, self.parent2, res.mode)?;
        writeln!(f, "gametes P1: {}", res.gametes1.join(" "))?;
        writeln!(f, "gametes P2: {}", res.gametes2.join(" "))?;
        if self.square {
            writeln!(f, "\n{}", res.square())?;
        }
        write_frequencies(f, res)?;
        if let Some(t) = self.sample {
            writeln!(f, "sample of {}", t.total)?;
            write_frequencies(f, t)?;
            writeln!(
                f,
                "chi-square {:.3} on {} degrees of freedom",
                chi_square(&t.phenotype_counts, &res.phenotype_counts),
                degrees_of_freedom(&res.phenotype_counts)
            )?;
        }
        Ok(())
    }
}

fn write_frequencies<F: Frequencies>(f: &mut fmt::Formatter<'_>, freq: &F) -> fmt::Result {
    let total = freq.total();
    writeln!(f, "genotypes ({})", format_ratio(&freq.genotype_ratio()))?;
    for (g, &n) in freq.genotype_counts() {
        writeln!(f, "  {:<6} {}", g, format_share(n, total))?;
    }
    writeln!(f, "phenotypes ({})", format_ratio(&freq.phenotype_ratio()))?;
    for (p, &n) in freq.phenotype_counts() {
        let notation = freq.phenotype_notation().get(p).map_or("", |s| s.as_str());
        writeln!(
            f,
            "  {:<20} {:<5} {}",
            p.to_string(),
            notation,
            format_share(n, total)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("mendel").chain(argv.iter().copied())).unwrap()
    }

    fn run_one(argv: &[&str]) -> String {
        let args = parse(argv);
        let p1: Parent = args.parent1.as_deref().unwrap().parse().unwrap();
        let p2: Parent = args.parent2.as_deref().unwrap().parse().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        run_cross(&args, &mut rng, &p1, &p2).unwrap()
    }

    #[test]
    fn report_shows_textbook_notation() {
        let out = run_one(&["AaBb", "AaBb"]);
        assert!(out.starts_with("AaBb x AaBb (independent-assortment)\n"));
        assert!(out.contains("phenotypes (9:3:3:1)"));
        assert!(out.contains("A_B_"));
        assert!(out.contains("aabb "));
        let out = run_one(&["Aa", "aa", "--square"]);
        assert!(out.contains(" A | Aa | Aa\n"));
        assert!(out.contains("A_"));
    }

    #[test]
    fn json_output_carries_notation() {
        let out = run_one(&["AaBb", "aabb", "--json"]);
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["cross"]["phenotype_notation"]["dominant-recessive"], "A_bb");
        assert!(v["sample"].is_null());
    }

    #[test]
    fn rejected_lines_follow_the_output_format() {
        let e = "Ab".parse::<Parent>().unwrap_err();
        let v: serde_json::Value = serde_json::from_str(&rejected("Ab x aa", &e, true)).unwrap();
        assert_eq!(v["line"], "Ab x aa");
        assert_eq!(v["error"], e.to_string());
        assert_eq!(
            rejected("Ab x aa", &e, false),
            format!("Ab x aa: {}\n", e)
        );
    }
}
