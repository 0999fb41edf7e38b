use super::{Project, ProjectId};
use eyre::{bail, Error};
use std::collections::HashMap;
use tracing::trace;

/// The ordered, immutable sequence of projects shown on the dashboard.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog, checking that every title is non-empty and unique
    /// so that it can serve both as a key and as display text. Titles are
    /// stored trimmed.
    pub fn new(projects: Vec<Project>) -> Result<Catalog, Error> {
        let projects = projects
            .into_iter()
            .map(|p| Project {
                title: p.title.trim().to_owned(),
                ..p
            })
            .collect::<Vec<_>>();
        let mut seen: HashMap<&str, ProjectId> = HashMap::new();
        for (idx, project) in projects.iter().enumerate() {
            if project.title.is_empty() {
                bail!("project at position {} has an empty title", idx + 1);
            }
            if let Some(previous) = seen.insert(&project.title, ProjectId(idx)) {
                bail!(
                    "project {} is listed twice (positions {} and {})",
                    project.title,
                    previous.0 + 1,
                    idx + 1
                );
            }
            trace!(key = idx, %project, "project registered");
        }
        Ok(Catalog { projects })
    }

    /// Projects shipped with the tool when no configuration is provided.
    pub fn builtin() -> Catalog {
        Catalog {
            projects: vec![Project::new("djangoproject")],
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProjectId, &Project)> {
        self.projects
            .iter()
            .enumerate()
            .map(|(idx, p)| (ProjectId(idx), p))
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
