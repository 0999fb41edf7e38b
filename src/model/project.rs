use std::fmt;

pub const DEFAULT_DESCRIPTION: &str = "A description";
pub const DEFAULT_IMAGE: &str = "https://via.placeholder.com/150";

/// Position of a project in its catalog, also used as its rendering key.
#[derive(Clone, Copy, Debug)]
pub struct ProjectId(pub usize);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
}

impl Project {
    pub fn new(title: impl Into<String>) -> Project {
        Project {
            title: title.into(),
            description: DEFAULT_DESCRIPTION.to_owned(),
            image: DEFAULT_IMAGE.to_owned(),
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Project {
        Project {
            description: description.into(),
            ..self
        }
    }

    pub fn with_image(self, image: impl Into<String>) -> Project {
        Project {
            image: image.into(),
            ..self
        }
    }

    pub fn has_image(&self) -> bool {
        !self.image.trim().is_empty()
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[test]
fn test_defaults() {
    let p = Project::new("djangoproject");
    assert_eq!(p.title, "djangoproject");
    assert_eq!(p.description, "A description");
    assert_eq!(p.image, "https://via.placeholder.com/150");
    assert!(p.has_image());
    let p = p.with_image("  ");
    assert!(!p.has_image());
    let p = p.with_description("Backend");
    assert_eq!(p.description, "Backend");
    assert_eq!(p.to_string(), "djangoproject");
}
