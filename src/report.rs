use crate::checker::CheckerKind;
use crate::cli::output::print_warning;
use crate::source::RepoSlug;
use crate::ContextualizedHit;
use serde::Serialize;

/// Where rendered markdown goes.
pub trait ReportSink {
    fn report(&mut self, markdown: &str);
    fn warn(&mut self, markdown: &str);
}

/// Prints reports to stdout and warnings to stderr.
pub struct StdioSink {
    pub colored: bool,
}

impl ReportSink for StdioSink {
    fn report(&mut self, markdown: &str) {
        println!("{}", markdown);
    }

    fn warn(&mut self, markdown: &str) {
        print_warning(markdown, self.colored);
    }
}

/// Keeps everything in memory, in emission order.
#[derive(Debug, Default, Clone)]
pub struct BufferedSink {
    pub reports: Vec<String>,
    pub warnings: Vec<String>,
}

impl BufferedSink {
    /// All reports joined into one markdown document.
    pub fn markdown(&self) -> String {
        self.reports.join("\n")
    }
}

impl ReportSink for BufferedSink {
    fn report(&mut self, markdown: &str) {
        self.reports.push(markdown.to_string());
    }

    fn warn(&mut self, markdown: &str) {
        self.warnings.push(markdown.to_string());
    }
}

/// Typos found in one file by one checker.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub checker: CheckerKind,
    pub hits: Vec<ContextualizedHit>,
}

/// Everything one run emitted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub files: Vec<FileReport>,
    pub settings_note: Option<String>,
}

impl Report {
    pub fn typo_count(&self) -> usize {
        self.files.iter().map(|f| f.hits.len()).sum()
    }

    pub fn has_typos(&self) -> bool {
        !self.files.is_empty()
    }
}

/// Builds links into the repository under review.
#[derive(Debug, Clone, Default)]
pub struct Links {
    pub repo: Option<RepoSlug>,
    pub head_ref: Option<String>,
}

impl Links {
    pub fn file_link(&self, path: &str) -> String {
        match &self.repo {
            Some(repo) => format!(
                "[{}]({})",
                path,
                blob_url(repo, self.head_ref.as_deref(), path)
            ),
            None => format!("`{}`", path),
        }
    }
}

pub fn blob_url(repo: &RepoSlug, git_ref: Option<&str>, path: &str) -> String {
    format!(
        "https://github.com/{}/{}/blob/{}/{}",
        repo.owner,
        repo.repo,
        git_ref.unwrap_or("HEAD"),
        path
    )
}

pub fn edit_url(repo: &RepoSlug, git_ref: &str, path: &str) -> String {
    format!(
        "https://github.com/{}/{}/edit/{}/{}",
        repo.owner, repo.repo, git_ref, path
    )
}

pub fn render_file_report(report: &FileReport, links: &Links) -> String {
    let title = match report.checker {
        CheckerKind::Words => "Typos for",
        CheckerKind::Code => "Code typos for",
    };

    let mut out = format!(
        "\n### {} {}\n\n| Line | Typo |\n| ---- | ---- |\n",
        title,
        links.file_link(&report.path)
    );
    for hit in &report.hits {
        out.push_str(&format!("| {} | {} |\n", hit.line_number, hit.excerpt_markup));
    }
    out
}

pub fn render_settings_note(body: &str) -> String {
    format!(
        "\n<details>\n<summary>Spell checking settings</summary>\n\n{}\n</details>\n",
        body
    )
}
