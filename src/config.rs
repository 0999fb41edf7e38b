use crate::model::{Catalog, Project, DEFAULT_DESCRIPTION, DEFAULT_IMAGE};
use crate::render::PageOptions;
use eyre::{Error, WrapErr};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "projboard.toml";
pub const DEVTOOL_CONFIG_FILE: &str = "devtool.config";
pub const DEFAULT_STYLESHEET: &str = "https://cdn.tailwindcss.com";

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "builtin_projects")]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub page: PageSection,
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageSection {
    pub title: String,
    pub search_placeholder: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_image: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub description: String,
    pub image: String,
}

/// A project is either listed by title alone or with its own overrides.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged, deny_unknown_fields)]
pub enum ProjectEntry {
    Title(String),
    Detailed {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<String>,
    },
}

fn builtin_projects() -> Vec<ProjectEntry> {
    vec![ProjectEntry::Title("djangoproject".to_owned())]
}

impl Default for PageSection {
    fn default() -> PageSection {
        PageSection {
            title: "Dashboard".to_owned(),
            search_placeholder: "Search".to_owned(),
            stylesheet: Some(DEFAULT_STYLESHEET.to_owned()),
            fallback_image: None,
        }
    }
}

impl Default for Defaults {
    fn default() -> Defaults {
        Defaults {
            description: DEFAULT_DESCRIPTION.to_owned(),
            image: DEFAULT_IMAGE.to_owned(),
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            page: PageSection::default(),
            defaults: Defaults::default(),
            projects: builtin_projects(),
        }
    }
}

impl ProjectEntry {
    fn resolve(&self, defaults: &Defaults) -> Project {
        match self {
            ProjectEntry::Title(title) => Project::new(title.as_str())
                .with_description(defaults.description.as_str())
                .with_image(defaults.image.as_str()),
            ProjectEntry::Detailed {
                title,
                description,
                image,
            } => Project::new(title.as_str())
                .with_description(description.as_deref().unwrap_or(&defaults.description))
                .with_image(image.as_deref().unwrap_or(&defaults.image)),
        }
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config, Error> {
        let content = fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot load configuration file {}", file_name.display()))?;
        let config = Config::parse(&content)
            .wrap_err_with(|| format!("cannot parse configuration file {}", file_name.display()))?;
        debug!(
            file = %file_name.display(),
            projects = config.projects.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Load the named file, or look in `dir` for `projboard.toml`, then for
    /// a `devtool.config` naming the project, and finally use the built-in
    /// configuration.
    pub fn locate(file_name: Option<&Path>, dir: &Path) -> Result<Config, Error> {
        if let Some(file_name) = file_name {
            return Config::load(file_name);
        }
        let default = dir.join(DEFAULT_CONFIG_FILE);
        if default.exists() {
            return Config::load(&default);
        }
        let devtool = dir.join(DEVTOOL_CONFIG_FILE);
        if devtool.exists() {
            if let Some(name) = project_name(&devtool)? {
                debug!(file = %devtool.display(), project = %name, "using project name");
                return Ok(Config::starter(&[name]));
            }
        }
        debug!("no configuration file found, using built-in configuration");
        Ok(Config::default())
    }

    pub fn parse(content: &str) -> Result<Config, Error> {
        Ok(toml::from_str(content)?)
    }

    /// Starter configuration listing the given project titles.
    pub fn starter(titles: &[String]) -> Config {
        let projects = if titles.is_empty() {
            builtin_projects()
        } else {
            titles.iter().cloned().map(ProjectEntry::Title).collect()
        };
        Config {
            projects,
            ..Config::default()
        }
    }

    pub fn to_toml(&self) -> Result<String, Error> {
        toml::to_string_pretty(self).wrap_err("cannot serialize configuration")
    }

    pub fn catalog(&self) -> Result<Catalog, Error> {
        Catalog::new(
            self.projects
                .iter()
                .map(|entry| entry.resolve(&self.defaults))
                .collect(),
        )
        .wrap_err("invalid project list")
    }

    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            title: self.page.title.clone(),
            search_placeholder: self.page.search_placeholder.clone(),
            stylesheet: non_empty(&self.page.stylesheet),
            fallback_image: non_empty(&self.page.fallback_image),
        }
    }
}

/// Read `PROJECT_NAME` from a dotenv-style file without touching the
/// process environment.
fn project_name(file_name: &Path) -> Result<Option<String>, Error> {
    let entries = dotenvy::from_path_iter(file_name)
        .wrap_err_with(|| format!("cannot load {}", file_name.display()))?;
    for entry in entries {
        let (key, value) =
            entry.wrap_err_with(|| format!("cannot parse {}", file_name.display()))?;
        if key == "PROJECT_NAME" && !value.trim().is_empty() {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}
