//! Runs every configured checker over the files changed in a review.

use crate::checker::{Checker, CheckerKind};
use crate::context::LineIndex;
use crate::filter::ErrorFilter;
use crate::paths::PathMatcher;
use crate::report::{
    blob_url, edit_url, render_file_report, render_settings_note, FileReport, Links, Report,
    ReportSink,
};
use crate::settings::{self, IgnorePolicy, LOCAL_SETTINGS_FILE};
use crate::source::{ContentSource, Location, RepoSlug};
use crate::{ContextualizedHit, SpellcheckOptions};
use rayon::prelude::*;
use std::collections::HashSet;

/// The review being checked, passed explicitly to everything that needs it.
pub struct ReviewContext {
    /// Added and modified paths, relative to the repository root.
    pub changed_files: Vec<String>,
    pub repo: Option<RepoSlug>,
    pub head_ref: Option<String>,
    pub source: Box<dyn ContentSource>,
}

impl ReviewContext {
    pub fn links(&self) -> Links {
        Links {
            repo: self.repo.clone(),
            head_ref: self.head_ref.clone(),
        }
    }
}

pub struct Checkers {
    pub words: Box<dyn Checker>,
    pub code: Box<dyn Checker>,
}

impl Checkers {
    fn get(&self, kind: CheckerKind) -> &dyn Checker {
        match kind {
            CheckerKind::Words => self.words.as_ref(),
            CheckerKind::Code => self.code.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Job<'a> {
    path: &'a str,
    kind: CheckerKind,
}

/// Spellcheck the changed files and emit one report block per flagged file.
///
/// The ignore policy is resolved once up front; files are then checked in
/// parallel and reported in candidate order. A failure on one file never
/// stops the others.
pub fn run(
    context: &ReviewContext,
    options: &SpellcheckOptions,
    checkers: &Checkers,
    sink: &mut dyn ReportSink,
) -> Report {
    let policy = settings::resolve(context, options, sink);
    let jobs = plan(&context.changed_files, options, &policy);
    let filter = policy.error_filter();

    log::debug!("Checking {} files ({} jobs)", context.changed_files.len(), jobs.len());

    let files: Vec<FileReport> = jobs
        .par_iter()
        .filter_map(|job| check_file(context, job, checkers, &filter))
        .collect();

    let links = context.links();
    for file in &files {
        sink.report(&render_file_report(file, &links));
    }

    let settings_note = if !files.is_empty() && (policy.has_local_settings || !options.is_empty()) {
        Some(render_settings_note(&settings_help(&policy, context)))
    } else {
        None
    };
    if let Some(note) = &settings_note {
        sink.report(note);
    }

    Report {
        files,
        settings_note,
    }
}

fn is_markdown(path: &str) -> bool {
    let lower = path.to_lowercase();
    lower.ends_with(".md") || lower.ends_with(".markdown")
}

/// Pair each candidate file with the checkers that should see it.
fn plan<'a>(
    changed_files: &'a [String],
    options: &SpellcheckOptions,
    policy: &IgnorePolicy,
) -> Vec<Job<'a>> {
    let ignored = PathMatcher::new(&policy.ignore_files);
    let code_files = PathMatcher::new(&options.code_spell_check);
    let mut seen = HashSet::new();
    let mut jobs = Vec::new();

    for path in changed_files {
        let path = path.as_str();
        if !seen.insert(path) {
            continue;
        }
        if ignored.is_match(path) {
            log::debug!("Skipping ignored file {}", path);
            continue;
        }
        if is_markdown(path) {
            jobs.push(Job {
                path,
                kind: CheckerKind::Words,
            });
        }
        if code_files.is_match(path) {
            jobs.push(Job {
                path,
                kind: CheckerKind::Code,
            });
        }
    }

    jobs
}

fn check_file(
    context: &ReviewContext,
    job: &Job<'_>,
    checkers: &Checkers,
    filter: &ErrorFilter,
) -> Option<FileReport> {
    let location = Location {
        repo: None,
        git_ref: context.head_ref.as_deref(),
    };

    let text = match context.source.fetch(job.path, &location) {
        Ok(Some(text)) if !text.is_empty() => text,
        Ok(_) => {
            log::debug!("Skipping {}: no content", job.path);
            return None;
        }
        Err(e) => {
            log::debug!("Skipping {}: {}", job.path, e);
            return None;
        }
    };

    let checker = checkers.get(job.kind);
    let hits = match checker.check(&text, job.path) {
        Ok(hits) => hits,
        Err(e) => {
            log::warn!("The {} checker failed on {}: {:#}", checker.kind(), job.path, e);
            return None;
        }
    };

    let lines = LineIndex::new(&text);
    let hits: Vec<ContextualizedHit> = filter
        .filter(&hits)
        .iter()
        .map(|hit| lines.contextualize(hit.offset, hit.char_len()))
        .collect();

    if hits.is_empty() {
        return None;
    }

    Some(FileReport {
        path: job.path.to_string(),
        checker: checker.kind(),
        hits,
    })
}

fn settings_help(policy: &IgnorePolicy, context: &ReviewContext) -> String {
    let mut lines = Vec::new();

    if policy.has_local_settings {
        let target = match (&context.repo, &context.head_ref) {
            (Some(repo), Some(head)) => format!(
                "[`{}`]({})",
                LOCAL_SETTINGS_FILE,
                edit_url(repo, head, LOCAL_SETTINGS_FILE)
            ),
            (Some(repo), None) => format!(
                "[`{}`]({})",
                LOCAL_SETTINGS_FILE,
                blob_url(repo, None, LOCAL_SETTINGS_FILE)
            ),
            (None, _) => format!("`{}`", LOCAL_SETTINGS_FILE),
        };
        lines.push(format!(
            "Words and files to ignore for this repository live in {}. Add to its `ignore` or `ignoreFiles` lists to silence false positives.",
            target
        ));
    }

    if let Some(global) = &policy.global_settings {
        lines.push(format!(
            "Shared ignore settings come from [`{}`]({}).",
            global,
            edit_url(&global.repo, "HEAD", &global.path)
        ));
    }

    if lines.is_empty() {
        lines.push(
            "Ignored words and files come from the options passed to the spellcheck run. Edit that call to change them."
                .to_string(),
        );
    }

    lines.join("\n\n")
}
