use clap::{ArgAction, Parser};
use console::{Style, Term};
use log::LevelFilter;
use pwgen::config::SCREEN_WIDTH;
use pwgen::{
    GenerationConfig, Layout, PasswordGenerator, PwgenError, SeedSource, SystemClock, parse_args,
    render,
};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "pwgen",
    version,
    about = "Generate pronounceable and fully random passwords"
)]
struct Cli {
    /// Password length and number of passwords [default: 8 160]
    #[arg(value_name = "LENGTH COUNT", allow_negative_numbers = true)]
    args: Vec<String>,

    /// Don't include numbers in the generated passwords
    #[arg(long)]
    no_numerals: bool,

    /// Include at least one number in the password
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    numerals: bool,

    /// Print the generated passwords on a single line
    #[arg(long)]
    one_line: bool,

    /// Don't bother to include any capital letters in the generated passwords
    #[arg(long)]
    no_capitalize: bool,

    /// Include at least one special character in the password
    #[arg(long)]
    symbols: bool,

    /// Don't use vowels or numbers that might be mistaken for vowels
    #[arg(long)]
    no_vowels: bool,

    /// Generate completely random, hard-to-memorize passwords from the OS
    /// entropy source; any seed is ignored
    #[arg(long)]
    secure: bool,

    /// Don't use characters that could be confused when printed, such as 'l'
    /// and '1', or '0' and 'O'
    #[arg(long)]
    ambiguous: bool,

    /// Don't use the specified characters in passwords
    #[arg(long, value_name = "CHARS", default_value = "")]
    remove_chars: String,

    /// Seed the generator from the SHA-1 hash of a file, so the same file
    /// reproduces the same passwords
    #[arg(long, value_name = "PATH", visible_alias = "sha1", conflicts_with = "seed")]
    seed_file: Option<PathBuf>,

    /// Seed the generator with a fixed number
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Log generator details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self, pw_length: usize, num_pw: usize) -> GenerationConfig {
        let seed = match (self.seed_file, self.seed) {
            (Some(path), _) => SeedSource::File(path),
            (None, Some(seed)) => SeedSource::Value(seed),
            (None, None) => SeedSource::None,
        };

        GenerationConfig {
            pw_length,
            num_pw,
            no_numerals: self.no_numerals,
            numerals: self.numerals,
            no_capitalize: self.no_capitalize,
            ambiguous: self.ambiguous,
            symbols: self.symbols,
            no_vowels: self.no_vowels,
            one_line: self.one_line,
            secure: self.secure,
            remove_chars: self.remove_chars,
            seed,
        }
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn report(err: &PwgenError) {
    let style = if supports_color::on(supports_color::Stream::Stderr).is_some() {
        Style::new().for_stderr().red().bold()
    } else {
        Style::new()
    };
    let line = format!("{} {}", style.apply_to("ERROR:"), err);
    if Term::stderr().write_line(&line).is_err() {
        eprintln!("{}", line);
    }
}

fn run(cli: Cli) -> pwgen::Result<()> {
    let (pw_length, num_pw) = parse_args(&cli.args)?;
    let config = cli.into_config(pw_length, num_pw);

    let mut generator = PasswordGenerator::from_config(&config, &SystemClock)?;
    let layout = Layout::new(config.one_line, config.pw_length, SCREEN_WIDTH);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render(generator.passwords(), layout, &mut out)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(err.exit_code())
        }
    }
}
