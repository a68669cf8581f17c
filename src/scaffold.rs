//! Creation of new xtool projects.
//! Validates the package name, refuses to touch existing paths, then
//! creates the directory tree and writes the rendered templates into it.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result, EXIT_FAILURE, EXIT_SUCCESS};
use crate::name::{ModuleName, ProjectName};
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;
use crate::template::render_templates;

/// Generates projects below a root directory.
pub struct Scaffolder<'a> {
    root: PathBuf,
    engine: &'a dyn TemplateRenderer,
}

impl<'a> Scaffolder<'a> {
    /// # Arguments
    /// * `root` - Directory the project directory is created in
    /// * `engine` - Renderer for the file templates
    pub fn new<P: Into<PathBuf>>(root: P, engine: &'a dyn TemplateRenderer) -> Self {
        Self { root: root.into(), engine }
    }

    /// Runs `xtool new`.
    ///
    /// Asks `prompt` for a name when none is given. Progress and the
    /// closing instructions are written to `out`.
    ///
    /// # Returns
    /// * `Ok(EXIT_SUCCESS)` once the project is generated
    /// * `Ok(EXIT_FAILURE)` if the name is invalid or already taken, after
    ///   writing the reason to `out`
    ///
    /// # Errors
    /// * `Error::IoError` if the tree could not be created; whatever was
    ///   created before the failure is left in place
    /// * `Error::PromptError` if the name could not be read
    pub fn scaffold<W: Write>(
        &self,
        name: Option<String>,
        prompt: &dyn Prompter,
        out: &mut W,
    ) -> Result<u8> {
        let name = match name {
            Some(name) => name,
            None => prompt.package_name()?,
        };

        let project = match self.create(&name, out) {
            Ok(project) => project,
            Err(err) if err.is_user_error() => {
                writeln!(out, "{}", err)?;
                return Ok(EXIT_FAILURE);
            }
            Err(err) => return Err(err),
        };

        writeln!(out)?;
        writeln!(out, "Finished generating project {}.", project)?;
        writeln!(out, "Next steps:")?;
        writeln!(out, "- Enter the directory with `cd {}`", project)?;
        writeln!(out, "- Build and run with `xtool dev`")?;
        Ok(EXIT_SUCCESS)
    }

    /// Creates the project directory for `name` and writes every template.
    ///
    /// Writes `Creating package: <name>` and one `Creating <path>` line per
    /// file to `out`.
    ///
    /// # Errors
    /// * `Error::InvalidName` if `name` fails validation
    /// * `Error::PathCollision` if anything exists at the target path
    /// * `Error::IoError` / `Error::TemplateError` on later failures
    pub fn create<W: Write>(&self, name: &str, out: &mut W) -> Result<ProjectName> {
        let project = ProjectName::parse(name)?;
        let project_dir = self.root.join(project.as_str());

        if fs::symlink_metadata(&project_dir).is_ok() {
            return Err(Error::PathCollision {
                name: project.to_string(),
            });
        }

        writeln!(out, "Creating package: {}", project)?;

        let module = project.module_name();
        let files = render_templates(self.engine, &project, &module)?;

        for dir in project_dirs(&project_dir, &module) {
            debug!("Creating directory: {}", dir.display());
            fs::create_dir_all(&dir)?;
        }

        for file in files {
            writeln!(out, "Creating {}", file.path)?;
            write_file(&project_dir.join(&file.path), &file.content)?;
        }

        Ok(project)
    }
}

/// Directories created before any file is written.
fn project_dirs(project_dir: &Path, module: &ModuleName) -> [PathBuf; 3] {
    [
        project_dir.to_path_buf(),
        project_dir.join("Sources").join(module.as_str()),
        project_dir.join(".sourcekit-lsp"),
    ]
}

/// Creates or truncates `path` and writes `content` followed by one newline.
fn write_file(path: &Path, content: &str) -> Result<()> {
    debug!("Writing file: {}", path.display());
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}
