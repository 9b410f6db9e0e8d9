//! Jinja page templates loaded from disk.

use std::path::{Component, Path, PathBuf};

use minijinja::{AutoEscape, Environment, ErrorKind, context, path_loader};
use thiserror::Error;

/// Errors that can occur while rendering a template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The name is empty, absolute, or escapes the template directory.
    #[error("invalid template name: {0:?}")]
    InvalidName(String),

    /// No file with this name exists in the template directory.
    #[error("template not found: {name}")]
    NotFound { name: String },

    /// The template could not be read, parsed, or evaluated.
    #[error("failed to render template {name}: {source}")]
    Render {
        name: String,
        #[source]
        source: minijinja::Error,
    },
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Renders Jinja templates by name from a single directory.
///
/// Pages are rendered with an empty context. With `auto_reload` every
/// render parses the file again, otherwise the environment keeps each
/// template after its first successful load.
#[derive(Debug)]
pub struct Templates {
    dir: PathBuf,
    auto_reload: bool,
    env: Environment<'static>,
}

impl Templates {
    /// Creates a renderer rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>, auto_reload: bool) -> Self {
        let dir = dir.into();
        let env = environment(&dir);
        Self {
            dir,
            auto_reload,
            env,
        }
    }

    /// Renders the named template.
    #[tracing::instrument(skip(self), fields(dir = %self.dir.display()))]
    pub fn render(&self, name: &str) -> Result<String> {
        validate_name(name)?;

        let reloaded;
        let env = if self.auto_reload {
            reloaded = environment(&self.dir);
            &reloaded
        } else {
            &self.env
        };

        let page = env
            .get_template(name)
            .and_then(|template| template.render(context! {}))
            .map_err(|source| match source.kind() {
                ErrorKind::TemplateNotFound => TemplateError::NotFound {
                    name: name.to_string(),
                },
                _ => TemplateError::Render {
                    name: name.to_string(),
                    source,
                },
            })?;
        tracing::debug!(bytes = page.len(), "template rendered");

        Ok(page)
    }
}

fn environment(dir: &Path) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_loader(path_loader(dir.to_path_buf()));
    // Pages get no context, so there is nothing to escape.
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env
}

fn validate_name(name: &str) -> Result<()> {
    let is_plain = !name.is_empty()
        && Path::new(name)
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
    if is_plain {
        Ok(())
    } else {
        Err(TemplateError::InvalidName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        std::fs::write(dir.path().join(name), contents).unwrap();
    }

    #[test]
    fn renders_jinja_syntax() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "index.html",
            "<link href=\"{{ '/static/css/style.css' }}\">{# dev note #}<p>{% if false %}hidden{% endif %}hi</p>",
        );
        let templates = Templates::new(dir.path(), true);

        let html = templates.render("index.html").unwrap();
        assert_eq!(html, "<link href=\"/static/css/style.css\"><p>hi</p>");
    }

    #[test]
    fn undefined_variables_render_empty() {
        let dir = TempDir::new().unwrap();
        write(&dir, "index.html", "<h1>{{ title }}</h1>");
        let templates = Templates::new(dir.path(), true);

        assert_eq!(templates.render("index.html").unwrap(), "<h1></h1>");
    }

    #[test]
    fn missing_template_is_not_found() {
        let dir = TempDir::new().unwrap();
        let templates = Templates::new(dir.path(), true);

        let err = templates.render("index.html").unwrap_err();
        assert!(matches!(err, TemplateError::NotFound { ref name } if name == "index.html"));
    }

    #[test]
    fn syntax_error_is_render_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "index.html", "<p>{% if %}broken{% endif %}</p>");
        let templates = Templates::new(dir.path(), true);

        let err = templates.render("index.html").unwrap_err();
        assert!(matches!(err, TemplateError::Render { .. }));
    }

    #[test]
    fn rejects_names_outside_the_directory() {
        let templates = Templates::new("templates", true);

        for name in ["", "../secret.html", "/etc/passwd", "a/../../b.html"] {
            let err = templates.render(name).unwrap_err();
            assert!(
                matches!(err, TemplateError::InvalidName(_)),
                "{name:?} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn non_utf8_template_is_render_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.html"), [0xff, 0xfe, 0x00]).unwrap();
        let templates = Templates::new(dir.path(), true);

        let err = templates.render("index.html").unwrap_err();
        assert!(matches!(err, TemplateError::Render { .. }));
    }

    #[test]
    fn auto_reload_picks_up_edits() {
        let dir = TempDir::new().unwrap();
        write(&dir, "index.html", "first");
        let templates = Templates::new(dir.path(), true);
        assert_eq!(templates.render("index.html").unwrap(), "first");

        write(&dir, "index.html", "second");
        assert_eq!(templates.render("index.html").unwrap(), "second");
    }

    #[test]
    fn without_auto_reload_first_load_is_cached() {
        let dir = TempDir::new().unwrap();
        write(&dir, "index.html", "first");
        let templates = Templates::new(dir.path(), false);
        assert_eq!(templates.render("index.html").unwrap(), "first");

        write(&dir, "index.html", "second");
        assert_eq!(templates.render("index.html").unwrap(), "first");
    }

    #[test]
    fn failures_are_not_cached() {
        let dir = TempDir::new().unwrap();
        let templates = Templates::new(dir.path(), false);
        assert!(templates.render("index.html").is_err());

        write(&dir, "index.html", "now present");
        assert_eq!(templates.render("index.html").unwrap(), "now present");
    }
}
