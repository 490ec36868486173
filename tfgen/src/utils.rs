//! Command execution and placeholder helpers.

use std::{ffi::OsStr, path::Path, process::Stdio};

use anyhow::Context;
use tokio::io::AsyncWriteExt;

/// External filter program, such as `rustfmt`, run with placeholder
/// expansion on its arguments.
pub struct Command {
    inner: tokio::process::Command,
    expand: Box<dyn Fn(&OsStr) -> String + Send + Sync>,
}

impl Command {
    /// Creates a command running in `workdir`.
    ///
    /// `expand` is applied to every argument added through [`Command::arg`]
    /// and [`Command::args`].
    pub fn new(
        program: impl AsRef<OsStr>,
        workdir: &Path,
        expand: impl Fn(&OsStr) -> String + Send + Sync + 'static,
    ) -> Command {
        let mut inner = tokio::process::Command::new(program);
        inner.current_dir(workdir).kill_on_drop(true);
        Self {
            inner,
            expand: Box::new(expand),
        }
    }

    pub fn arg(&mut self, arg: impl AsRef<OsStr>) -> &mut Command {
        let value = (self.expand)(arg.as_ref());
        self.inner.arg(value);
        self
    }

    pub fn args<I, S>(&mut self, args: I) -> &mut Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self.arg(arg);
        }
        self
    }

    fn program(&self) -> String {
        let program = self.inner.as_std().get_program();
        program.to_string_lossy().into_owned()
    }

    /// The command line as typed in a shell.
    pub fn command_line(&self) -> String {
        let cmd = self.inner.as_std();
        std::iter::once(cmd.get_program())
            .chain(cmd.get_args())
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Pipes `input` through the command and returns what it prints.
    ///
    /// # Errors
    ///
    /// Fails when the program cannot be started, exits with a non-zero
    /// status or prints something that is not UTF-8. The error carries the
    /// program's stderr.
    pub async fn filter(&mut self, input: &str) -> anyhow::Result<String> {
        debug!("{}", self.command_line());
        let program = self.program();
        let mut child = self
            .inner
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let mut stdin = child
            .stdin
            .take()
            .with_context(|| format!("no stdin for {program}"))?;
        let input = input.to_owned();
        let writer = tokio::spawn(async move { stdin.write_all(input.as_bytes()).await });

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            bail!(
                "{program} failed with status {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        writer
            .await?
            .with_context(|| format!("can not write to {program}"))?;
        String::from_utf8(output.stdout).with_context(|| format!("{program} output is not UTF-8"))
    }
}

/// Expands `${env:NAME}` placeholders with environment variables.
///
/// Other `${...}` sequences and unterminated placeholders are kept as is.
///
/// # Errors
///
/// Returns an error naming the variable when it is not set.
///
/// # Example
///
/// ```rust
/// use tfgen::utils::replace_env_placeholders;
///
/// unsafe { std::env::set_var("TFGEN_DOC_DIR", "/schemas"); }
/// let path = replace_env_placeholders("${env:TFGEN_DOC_DIR}/aws.json").unwrap();
/// assert_eq!(path, "/schemas/aws.json");
/// ```
pub fn replace_env_placeholders(input: &str) -> anyhow::Result<String> {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            result.push_str(&rest[start..]);
            return Ok(result);
        };

        let placeholder = &after[..end];
        match placeholder.strip_prefix("env:") {
            Some(name) if !name.is_empty() => {
                let value = std::env::var(name)
                    .map_err(|_| anyhow!("environment variable `{name}` is not set"))?;
                debug!("expand ${{env:{name}}} = {value}");
                result.push_str(&value);
            }
            _ => {
                result.push_str("${");
                result.push_str(placeholder);
                result.push('}');
            }
        }
        rest = &after[end + 1..];
    }

    result.push_str(rest);
    Ok(result)
}
