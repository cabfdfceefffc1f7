use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use reviewspell::checker::{CodeChecker, CodeSpellSettings, Dictionary, WordChecker};
use reviewspell::cli::output::{self, OutputFormat};
use reviewspell::report::{BufferedSink, StdioSink};
use reviewspell::source::local::changed_files_from_git;
use reviewspell::source::{GitHubRaw, LocalCheckout, RepoSlug};
use reviewspell::{run, Checkers, Config, ReviewContext, SpellcheckOptions};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "reviewspell")]
#[command(version, about = "Spellcheck the files changed in a code review", long_about = None)]
struct Cli {
    /// Changed files to check (defaults to the files changed since --base)
    #[arg(value_name = "FILES")]
    files: Vec<String>,

    /// Revision to diff against when no files are given
    #[arg(long, default_value = "origin/main", env = "REVIEWSPELL_BASE")]
    base: String,

    /// Root of the checked-out repository
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Repository under review, used for links and remote settings
    #[arg(long, value_name = "OWNER/REPO", env = "GITHUB_REPOSITORY")]
    repo: Option<RepoSlug>,

    /// Head ref of the review
    #[arg(long = "ref", value_name = "REF", env = "GITHUB_HEAD_REF")]
    git_ref: Option<String>,

    /// Raw content host for files of other repositories
    #[arg(long, value_name = "URL", env = "REVIEWSPELL_RAW_URL")]
    raw_url: Option<String>,

    /// Shared settings file (e.g. org/config@spellcheck.json)
    #[arg(long, value_name = "OWNER/REPO@PATH")]
    settings: Option<String>,

    /// Word to ignore; prefix with / for a regex
    #[arg(long, value_name = "WORD")]
    ignore: Vec<String>,

    /// File or glob to skip
    #[arg(long = "ignore-file", value_name = "PATH")]
    ignore_files: Vec<String>,

    /// Glob selecting files for the code checker
    #[arg(long = "code-glob", value_name = "GLOB")]
    code_globs: Vec<String>,

    /// Code checker settings as JSON (words, ignoreRegExpList, minWordLength)
    #[arg(long, value_name = "JSON")]
    code_settings: Option<String>,

    /// Configuration file (defaults to .reviewspell.toml in --root)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Language/dictionary to use (e.g., en_US, en_GB)
    #[arg(short, long)]
    language: Option<String>,

    /// Word list or FST dictionary to check against
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Output format (markdown, json)
    #[arg(short = 'o', long, default_value = "markdown")]
    format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if typos are found
    #[arg(long)]
    no_fail: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "reviewspell", &mut io::stdout());
        return Ok(());
    }

    let code_spell_settings = cli
        .code_settings
        .as_deref()
        .map(serde_json::from_str::<CodeSpellSettings>)
        .transpose()
        .context("Failed to parse --code-settings")?;

    let cli_options = SpellcheckOptions {
        settings: cli.settings.clone(),
        ignore: cli.ignore.clone(),
        ignore_files: cli.ignore_files.clone(),
        code_spell_check: cli.code_globs.clone(),
        code_spell_settings,
    };

    let config = Config::load(
        &cli.root,
        cli.config.as_deref(),
        cli.language.clone(),
        cli.dictionary.clone(),
        cli_options,
    )?;

    let changed_files = if cli.files.is_empty() {
        changed_files_from_git(&cli.root, &cli.base)?
    } else {
        cli.files.clone()
    };

    let mut remote = GitHubRaw::new(cli.repo.clone());
    if let Some(url) = &cli.raw_url {
        remote = remote.with_base_url(url);
    }
    let source = LocalCheckout::new(&cli.root).with_remote(remote);
    let context = ReviewContext {
        changed_files,
        repo: cli.repo.clone(),
        head_ref: cli.git_ref.clone().filter(|r| !r.is_empty()),
        source: Box::new(source),
    };

    let dictionary = Arc::new(match &config.dictionary {
        Some(path) => Dictionary::load_from_path(path)?,
        None => Dictionary::load(&config.language)?,
    });
    let checkers = Checkers {
        words: Box::new(WordChecker::new(dictionary.clone())),
        code: Box::new(CodeChecker::new(
            dictionary,
            config.options.code_spell_settings.clone().unwrap_or_default(),
        )),
    };

    let colored = !cli.no_color;
    let report = match (cli.format, &cli.output) {
        (OutputFormat::Markdown, None) => {
            let mut sink = StdioSink { colored };
            run(&context, &config.options, &checkers, &mut sink)
        }
        (format, target) => {
            let mut sink = BufferedSink::default();
            let report = run(&context, &config.options, &checkers, &mut sink);
            for warning in &sink.warnings {
                output::print_warning(warning, colored);
            }

            let rendered = match format {
                OutputFormat::Markdown => sink.markdown(),
                OutputFormat::Json => {
                    output::render_json(&report, context.changed_files.len(), &sink.warnings)?
                }
            };
            match target {
                Some(path) => fs::write(path, rendered)
                    .with_context(|| format!("Failed to write report: {}", path.display()))?,
                None => println!("{}", rendered),
            }
            report
        }
    };

    output::print_check_summary(&report, context.changed_files.len(), colored);

    // Exit with appropriate code
    if report.has_typos() && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}
