//! Extraction Tool Invocation
//!
//! Rendered pages come from an external extractor (`solidity-docgen` by
//! default), run synchronously as a child process. Only a run that writes
//! nothing to stderr and exits successfully counts as success.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{CompilerConfig, Config};
use crate::constants::tool::{CLI_SCRIPT, COMPILER_MODULE, MODULE_MARKERS};
use crate::types::{DocifyError, Result};

/// Directories handed to the extractor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractRequest {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub templates_dir: PathBuf,
}

/// Anything that can render one page per source module
pub trait Extractor {
    /// Cheap checks that must pass before anything is launched
    fn preflight(&self) -> Result<()>;

    /// Render pages for `request.input_dir` into `request.output_dir`
    fn extract(&self, request: &ExtractRequest) -> Result<()>;

    fn name(&self) -> &str;
}

/// `--solc-settings` payload
#[derive(Debug, Serialize)]
struct SolcSettings<'a> {
    remappings: &'a [String],
    optimizer: crate::config::OptimizerConfig,
}

/// `node <tool_dir>/solidity-docgen/dist/cli.js ...`
pub struct SolidityDocgen {
    program: String,
    tool_dir: PathBuf,
    compiler: CompilerConfig,
}

impl SolidityDocgen {
    pub fn new(
        program: impl Into<String>,
        tool_dir: impl Into<PathBuf>,
        compiler: CompilerConfig,
    ) -> Self {
        Self {
            program: program.into(),
            tool_dir: tool_dir.into(),
            compiler,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.tool.program.clone(),
            config.paths.tool_dir.clone(),
            config.compiler.clone(),
        )
    }

    /// Absolute location of the compiler module
    pub fn compiler_module(&self) -> PathBuf {
        let module = self.tool_dir.join(COMPILER_MODULE);
        std::path::absolute(&module).unwrap_or(module)
    }

    pub fn cli_script(&self) -> PathBuf {
        CLI_SCRIPT
            .iter()
            .fold(self.tool_dir.clone(), |path, part| path.join(part))
    }

    /// Serialized compiler settings
    pub fn solc_settings(&self) -> Result<String> {
        Ok(serde_json::to_string(&SolcSettings {
            remappings: &self.compiler.remappings,
            optimizer: self.compiler.optimizer,
        })?)
    }

    /// Full argument list, script first
    pub fn args(&self, request: &ExtractRequest) -> Result<Vec<String>> {
        Ok(vec![
            self.cli_script().to_string_lossy().into_owned(),
            format!("--input={}", request.input_dir.display()),
            format!("--output={}", request.output_dir.display()),
            format!("--templates={}", request.templates_dir.display()),
            format!("--solc-module={}", self.compiler_module().display()),
            format!("--solc-settings={}", self.solc_settings()?),
        ])
    }
}

impl Extractor for SolidityDocgen {
    fn preflight(&self) -> Result<()> {
        let module = self.compiler_module();
        if module_resolves(&module) {
            debug!("Compiler module found at {}", module.display());
            Ok(())
        } else {
            Err(DocifyError::CompilerNotFound(module))
        }
    }

    fn extract(&self, request: &ExtractRequest) -> Result<()> {
        let args = self.args(request)?;
        info!("Running {} {}", self.program, args[0]);
        debug!("Extractor arguments: {:?}", &args[1..]);

        let child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| DocifyError::ToolLaunch {
                program: self.program.clone(),
                source,
            })?;

        let output = child
            .wait_with_output()
            .map_err(|source| DocifyError::ToolLaunch {
                program: self.program.clone(),
                source,
            })?;

        check_output(output.status, &output.stderr)
    }

    fn name(&self) -> &str {
        "solidity-docgen"
    }
}

/// Any stderr output is a failure, whatever the exit code says.
fn check_output(status: std::process::ExitStatus, stderr: &[u8]) -> Result<()> {
    if !stderr.is_empty() {
        return Err(DocifyError::ToolStderr(
            String::from_utf8_lossy(stderr).trim_end().to_string(),
        ));
    }
    if !status.success() {
        return Err(DocifyError::ToolExit(status));
    }
    Ok(())
}

/// Mirrors Node's directory-module resolution closely enough for a pre-flight check.
fn module_resolves(module: &Path) -> bool {
    if module.is_dir() {
        return MODULE_MARKERS.iter().any(|m| module.join(m).is_file());
    }
    module.with_extension("js").is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn request(root: &Path) -> ExtractRequest {
        ExtractRequest {
            input_dir: root.join("contracts"),
            output_dir: root.join("docs"),
            templates_dir: root.join("templates"),
        }
    }

    #[test]
    fn test_args_layout() {
        let docgen = SolidityDocgen::new("node", "node_modules", CompilerConfig::default());
        let args = docgen.args(&request(Path::new("box"))).unwrap();

        assert_eq!(
            PathBuf::from(&args[0]),
            Path::new("node_modules")
                .join("solidity-docgen")
                .join("dist")
                .join("cli.js")
        );
        assert!(args[1].starts_with("--input=") && args[1].ends_with("contracts"));
        assert!(args[2].starts_with("--output=") && args[2].ends_with("docs"));
        assert!(args[3].starts_with("--templates=") && args[3].ends_with("templates"));
        assert!(args[4].starts_with("--solc-module="));
        assert!(Path::new(args[4].trim_start_matches("--solc-module=")).is_absolute());
        assert_eq!(
            args[5],
            r#"--solc-settings={"remappings":["@openzeppelin/=./node_modules/@openzeppelin/"],"optimizer":{"enabled":true,"runs":200}}"#
        );
    }

    #[test]
    fn test_preflight_requires_compiler_module() {
        let temp_dir = TempDir::new().unwrap();
        let docgen = SolidityDocgen::new("node", temp_dir.path(), CompilerConfig::default());

        assert!(matches!(
            docgen.preflight(),
            Err(DocifyError::CompilerNotFound(_))
        ));

        // An empty directory is not a module either
        fs::create_dir_all(temp_dir.path().join("solc")).unwrap();
        assert!(docgen.preflight().is_err());

        fs::write(temp_dir.path().join("solc/package.json"), "{}").unwrap();
        assert!(docgen.preflight().is_ok());
    }

    #[test]
    fn test_preflight_accepts_single_file_module() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("solc.js"), "").unwrap();
        let docgen = SolidityDocgen::new("node", temp_dir.path(), CompilerConfig::default());
        assert!(docgen.preflight().is_ok());
    }

    #[test]
    fn test_launch_failure_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let docgen = SolidityDocgen::new(
            "docify-test-no-such-program",
            temp_dir.path(),
            CompilerConfig::default(),
        );
        let err = docgen.extract(&request(temp_dir.path())).unwrap_err();
        assert!(matches!(err, DocifyError::ToolLaunch { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_stderr_output_is_fatal_even_on_success() {
        use std::os::unix::process::ExitStatusExt;

        let ok = std::process::ExitStatus::from_raw(0);
        let err = check_output(ok, b"Warning: unreachable code\n").unwrap_err();
        match err {
            DocifyError::ToolStderr(msg) => assert_eq!(msg, "Warning: unreachable code"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(check_output(ok, b"").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_without_stderr_is_fatal() {
        use std::os::unix::process::ExitStatusExt;

        // Raw wait status: exit code 3
        let failed = std::process::ExitStatus::from_raw(3 << 8);
        assert!(matches!(
            check_output(failed, b""),
            Err(DocifyError::ToolExit(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_extract_captures_stderr_of_real_process() {
        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("solidity-docgen/dist/cli.js");
        fs::create_dir_all(script.parent().unwrap()).unwrap();
        fs::write(&script, "echo 'ParserError: boom' >&2\n").unwrap();

        let docgen = SolidityDocgen::new("sh", temp_dir.path(), CompilerConfig::default());
        let err = docgen.extract(&request(temp_dir.path())).unwrap_err();
        match err {
            DocifyError::ToolStderr(msg) => assert_eq!(msg, "ParserError: boom"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_extract_quiet_success() {
        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("solidity-docgen/dist/cli.js");
        fs::create_dir_all(script.parent().unwrap()).unwrap();
        fs::write(&script, "exit 0\n").unwrap();

        let docgen = SolidityDocgen::new("sh", temp_dir.path(), CompilerConfig::default());
        assert!(docgen.extract(&request(temp_dir.path())).is_ok());
    }
}
