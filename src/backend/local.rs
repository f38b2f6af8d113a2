use std::borrow::Cow;
use std::io::{Read, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::Mutex;

use super::{build_prompt, Backend};
use crate::constants::assistant;
use crate::error::{Error, Result};

/// Model identifier recorded for transcripts produced by the local assistant.
pub const LOCAL_MODEL: &str = "claude-code";

/// Runs a locally installed assistant CLI, feeding the prompt on stdin and
/// reading the answer from stdout.
#[derive(Debug, Clone)]
pub struct LocalAssistant {
    program: String,
    args: Vec<String>,
}

impl LocalAssistant {
    /// Assistant invoked as `<program> code --stdio`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: assistant::ARGS.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Assistant invoked with arbitrary arguments.
    pub fn with_args<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { program: program.into(), args: args.into_iter().map(Into::into).collect() }
    }

    /// Whether the assistant program can be found on `PATH`.
    pub fn is_available(&self) -> bool {
        let found = which::which(&self.program);
        log::debug!("Looking up assistant '{}': {:?}", self.program, found);
        found.is_ok()
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn spawn(&self, stdout: Stdio, stderr: Stdio) -> Result<Child> {
        log::debug!("Spawning assistant {} {:?}", self.program, self.args);
        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(stdout)
            .stderr(stderr)
            .spawn()
            .map_err(|e| {
                Error::BackendUnavailable(format!(
                    "failed to start '{}': {e} (is Claude Code installed?)",
                    self.program
                ))
            })
    }

    /// Runs the prompt, copying the assistant's stdout and stderr into `sink`
    /// as they arrive instead of buffering them.
    pub fn stream_execute<W>(
        &self,
        template_body: &str,
        user_input: &str,
        sink: W,
    ) -> Result<()>
    where
        W: Write + Send,
    {
        let prompt = build_prompt(template_body, user_input);
        let mut child = self.spawn(Stdio::piped(), Stdio::piped())?;
        let stdin = child.stdin.take();
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let sink = Mutex::new(sink);

        std::thread::scope(|scope| {
            if let Some(stdin) = stdin {
                scope.spawn(|| feed_stdin(stdin, prompt.as_bytes()));
            }
            if let Some(stdout) = stdout {
                scope.spawn(|| pump(stdout, &sink));
            }
            if let Some(stderr) = stderr {
                scope.spawn(|| pump(stderr, &sink));
            }
        });

        let status = child.wait().map_err(|e| Error::io(&self.program, e))?;
        if !status.success() {
            return Err(Error::ExecutionFailed(format!(
                "{} exited with {status}",
                self.program
            )));
        }
        Ok(())
    }
}

impl Backend for LocalAssistant {
    fn execute(&self, template_body: &str, user_input: &str) -> Result<String> {
        let prompt = build_prompt(template_body, user_input);
        let mut child = self.spawn(Stdio::piped(), Stdio::piped())?;
        let stdin = child.stdin.take();

        // Feed stdin on a separate thread so a chatty assistant cannot block
        // on a full stdout pipe while we are still writing.
        let output = std::thread::scope(|scope| {
            if let Some(stdin) = stdin {
                scope.spawn(|| feed_stdin(stdin, prompt.as_bytes()));
            }
            child.wait_with_output()
        })
        .map_err(|e| Error::io(&self.program, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::ExecutionFailed(format!(
                "{} exited with {}\nStderr: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let decoded = String::from_utf8_lossy(&output.stdout);
        if matches!(decoded, Cow::Owned(_)) {
            log::warn!(
                "Assistant {} emitted non-UTF8 stdout; performing lossy conversion",
                self.program
            );
        }

        let response = decoded.trim();
        if response.is_empty() {
            return Err(Error::EmptyResponse { backend: self.name().to_string() });
        }
        log::debug!("Assistant returned {} bytes", response.len());
        Ok(response.to_string())
    }

    fn name(&self) -> &str {
        "Claude Code"
    }

    fn model(&self) -> &str {
        LOCAL_MODEL
    }
}

/// Writes the prompt and closes stdin.
fn feed_stdin(mut stdin: ChildStdin, prompt: &[u8]) {
    if let Err(e) = stdin.write_all(prompt) {
        if e.kind() == std::io::ErrorKind::BrokenPipe {
            log::debug!("Assistant closed stdin before reading the whole prompt (broken pipe)");
        } else {
            log::warn!("Failed to write prompt to assistant stdin: {e}");
        }
    }
    drop(stdin);
}

fn pump<R: Read, W: Write>(mut reader: R, sink: &Mutex<W>) {
    let mut buf = [0u8; 8192];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                let Ok(mut sink) = sink.lock() else { break };
                if let Err(e) = sink.write_all(&buf[..n]).and_then(|_| sink.flush()) {
                    log::warn!("Failed to forward assistant output: {e}");
                    break;
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => {
                log::warn!("Failed to read assistant output: {e}");
                break;
            }
        }
    }
}
