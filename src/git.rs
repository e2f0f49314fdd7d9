// src/git.rs

use crate::error::{Error, Result};
use crate::model::Revision;
use chrono::{TimeZone, Utc};
use git2::build::CheckoutBuilder;
use git2::Repository;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The version-control side of a run: enumerate tags, and move the single
/// shared working directory to one of them.
pub trait Vcs {
    fn workdir(&self) -> &Path;

    fn list_tags(&self) -> Result<Vec<String>>;

    /// Force-checks-out `tag`, discarding local modifications.
    fn checkout(&self, tag: &str) -> Result<Revision>;
}

impl<T: Vcs + ?Sized> Vcs for &T {
    fn workdir(&self) -> &Path {
        (**self).workdir()
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        (**self).list_tags()
    }

    fn checkout(&self, tag: &str) -> Result<Revision> {
        (**self).checkout(tag)
    }
}

pub struct GitRepo {
    repo: Repository,
    workdir: PathBuf,
}

impl GitRepo {
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::open(path)?;
        let workdir = repo.workdir().map_or_else(|| path.to_path_buf(), Path::to_path_buf);
        debug!(path = %path.display(), workdir = %workdir.display(), "opened repository");
        Ok(GitRepo { repo, workdir })
    }
}

impl Vcs for GitRepo {
    fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let names = self.repo.tag_names(None)?;
        (0..names.len())
            .filter_map(|i| names.get_bytes(i))
            .map(decode_tag)
            .collect()
    }

    fn checkout(&self, tag: &str) -> Result<Revision> {
        // Peeling handles both lightweight and annotated tags
        let object = self.repo.revparse_single(&format!("refs/tags/{tag}"))?;
        let commit = object.peel_to_commit()?;

        let mut opts = CheckoutBuilder::new();
        opts.force();
        self.repo.checkout_tree(commit.as_object(), Some(&mut opts))?;
        self.repo.set_head_detached(commit.id())?;

        let seconds = commit.time().seconds();
        let time = Utc
            .timestamp_opt(seconds, 0)
            .single()
            .unwrap_or_default();
        debug!(tag, commit = %commit.id(), "checked out");

        Ok(Revision { id: commit.id(), time })
    }
}

/// Every tag must become a record, so an undecodable name is an error rather
/// than something to skip.
fn decode_tag(raw: &[u8]) -> Result<String> {
    std::str::from_utf8(raw)
        .map(String::from)
        .map_err(|_| Error::TagName(String::from_utf8_lossy(raw).into_owned()))
}
