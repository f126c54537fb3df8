use clap::{Parser, Subcommand};
#[cfg(not(test))]
use xtask::*;

#[derive(Parser)]
#[command(author, version, about = "Development tasks for mixfft")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Build,
    Test,
    Clippy,
    Fmt,
    /// Run the criterion benchmarks
    Bench,
    /// Compare a mixed-radix transform against the direct DFT
    Verify {
        /// Stride (freq): length of the first-stage transforms
        #[arg(short, default_value_t = 5)]
        p: usize,
        /// Stride (time): length of the second-stage transforms
        #[arg(short, default_value_t = 3)]
        q: usize,
        /// Run the inverse transform instead of the forward one
        #[arg(long)]
        inverse: bool,
        /// RMS error below which the run passes
        #[arg(long, default_value_t = 1e-3)]
        threshold: f32,
    },
}

#[cfg(not(test))]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = detect_config();

    let status = match cli.command {
        Commands::Build => build_command(&cfg).status()?,
        Commands::Test => test_command(&cfg).status()?,
        Commands::Clippy => clippy_command().status()?,
        Commands::Fmt => fmt_command().status()?,
        Commands::Bench => bench_command().status()?,
        Commands::Verify {
            p,
            q,
            inverse,
            threshold,
        } => {
            let direction = if inverse {
                mixfft::Direction::Inverse
            } else {
                mixfft::Direction::Forward
            };
            println!("computing {q} DFTs of size {p}, then {p} DFTs of size {q}...");
            let report = verify(p, q, direction, threshold)?;
            print!("{}", report.render());
            std::process::exit(if report.passed() { 0 } else { 1 });
        }
    };

    std::process::exit(status.code().unwrap_or(1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_verify_command() {
        let cli = Cli::parse_from(["xtask", "verify", "-p", "4", "-q", "2", "--inverse"]);
        match cli.command {
            Commands::Verify { p, q, inverse, .. } => {
                assert_eq!((p, q, inverse), (4, 2, true));
            }
            _ => panic!("parsed wrong command"),
        }
    }

    #[test]
    fn verify_defaults_to_five_by_three() {
        let cli = Cli::parse_from(["xtask", "verify"]);
        match cli.command {
            Commands::Verify {
                p, q, threshold, ..
            } => {
                assert_eq!((p, q), (5, 3));
                assert!((threshold - 1e-3).abs() < f32::EPSILON);
            }
            _ => panic!("parsed wrong command"),
        }
    }
}
