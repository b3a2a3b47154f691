use std::io;
use std::process::Command;

use thiserror::Error;

/// Number of echo requests sent when none is configured.
pub const DEFAULT_COUNT: u32 = 5;

#[derive(Debug, Error)]
pub enum PingError {
    #[error("failed to launch ping: {0}")]
    Launch(#[from] io::Error),
}

/// What is kept from a finished ping process.
///
/// The exit status is recorded but never inspected: an unreachable host is
/// reported through ping's own output text, not as an error.
pub struct Capture {
    pub stdout: Vec<u8>,
    pub success: bool,
}

/// Launches a command and blocks until it finishes.
pub trait CommandRunner {
    fn run(&mut self, program: &str, args: &[String]) -> io::Result<Capture>;
}

/// Runs commands through [`std::process::Command`].
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, program: &str, args: &[String]) -> io::Result<Capture> {
        let output = Command::new(program).args(args).output()?;
        Ok(Capture {
            stdout: output.stdout,
            success: output.status.success(),
        })
    }
}

/// Probes reachability of a host with the system ping utility.
pub struct Pinger<R = SystemRunner> {
    runner: R,
    count: u32,
}

impl<R> Pinger<R> {
    pub fn with_runner(runner: R, count: u32) -> Self {
        Self { runner, count }
    }

    pub fn into_runner(self) -> R {
        self.runner
    }
}

impl Pinger<SystemRunner> {
    pub fn new(count: u32) -> Self {
        Self::with_runner(SystemRunner, count)
    }
}

impl Default for Pinger<SystemRunner> {
    fn default() -> Self {
        Self::new(DEFAULT_COUNT)
    }
}

impl<R> Pinger<R>
where
    R: CommandRunner,
{
    /// Sends the configured number of echo requests to `address` and returns
    /// whatever text the ping utility printed, reachable or not.
    ///
    /// Fails only if the process could not be launched at all.
    pub fn ping(&mut self, address: &str) -> Result<String, PingError> {
        let args = [
            "-c".to_string(),
            self.count.to_string(),
            address.to_string(),
        ];
        log::trace!("running ping {:?}", args);
        let capture = self.runner.run("ping", &args)?;
        if !capture.success {
            log::debug!("ping of {} exited unsuccessfully", address);
        }
        Ok(String::from_utf8_lossy(&capture.stdout).into_owned())
    }
}

/// Pings `address` with the default request count using the system runner.
pub fn ping_address(address: &str) -> Result<String, PingError> {
    Pinger::default().ping(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockRunner {
        calls: Vec<Vec<String>>,
        stdout: &'static [u8],
        success: bool,
        launch_error: Option<io::ErrorKind>,
    }

    impl MockRunner {
        fn returning(stdout: &'static [u8], success: bool) -> Self {
            Self {
                calls: Vec::new(),
                stdout,
                success,
                launch_error: None,
            }
        }

        fn failing(kind: io::ErrorKind) -> Self {
            Self {
                calls: Vec::new(),
                stdout: b"",
                success: false,
                launch_error: Some(kind),
            }
        }
    }

    impl CommandRunner for MockRunner {
        fn run(&mut self, program: &str, args: &[String]) -> io::Result<Capture> {
            let mut argv = vec![program.to_string()];
            argv.extend(args.iter().cloned());
            self.calls.push(argv);
            if let Some(kind) = self.launch_error {
                return Err(io::Error::new(kind, "launch failed"));
            }
            Ok(Capture {
                stdout: self.stdout.to_vec(),
                success: self.success,
            })
        }
    }

    #[test]
    fn invokes_ping_with_count_and_address() {
        let mut pinger = Pinger::with_runner(MockRunner::returning(b"", true), 5);
        pinger.ping("8.8.8.8").expect("ping failed");

        let expected: Vec<String> = ["ping", "-c", "5", "8.8.8.8"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(pinger.into_runner().calls, vec![expected]);
    }

    #[test]
    fn count_is_configurable() {
        let mut pinger = Pinger::with_runner(MockRunner::returning(b"", true), 2);
        pinger.ping("192.168.1.1").expect("ping failed");

        let expected: Vec<String> = ["ping", "-c", "2", "192.168.1.1"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(pinger.into_runner().calls, vec![expected]);
    }

    #[test]
    fn returns_captured_stdout() {
        let mut pinger =
            Pinger::with_runner(MockRunner::returning(b"5 packets transmitted", true), 5);
        let text = pinger.ping("8.8.8.8").expect("ping failed");
        assert_eq!(text, "5 packets transmitted");
    }

    #[test]
    fn unreachable_host_is_not_an_error() {
        let mut pinger = Pinger::with_runner(
            MockRunner::returning(b"0 received, 100% packet loss", false),
            5,
        );
        let text = pinger.ping("10.255.255.1").expect("must not fail");
        assert_eq!(text, "0 received, 100% packet loss");
    }

    #[test]
    fn launch_failure_propagates() {
        let mut pinger = Pinger::with_runner(MockRunner::failing(io::ErrorKind::NotFound), 5);
        match pinger.ping("8.8.8.8") {
            Err(PingError::Launch(err)) => assert_eq!(err.kind(), io::ErrorKind::NotFound),
            Ok(text) => panic!("expected launch error, got output {:?}", text),
        }
    }
}
