//! Facts about the machine and process a report is created on.

use crate::report::Environment;

/// Host name of the runner, or an empty string when it cannot be determined.
pub fn hostname() -> String {
    os_hostname()
        .or_else(|| non_empty_var("HOSTNAME"))
        .or_else(|| non_empty_var("COMPUTERNAME"))
        .unwrap_or_default()
}

#[cfg(unix)]
fn os_hostname() -> Option<String> {
    let mut buf = [0u8; 256];
    // SAFETY: the pointer and length describe `buf`, which outlives the call.
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast::<libc::c_char>(), buf.len()) };
    if rc != 0 {
        tracing::debug!(error = %std::io::Error::last_os_error(), "gethostname failed");
        return None;
    }
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    let name = String::from_utf8_lossy(&buf[..end]).trim().to_string();
    (!name.is_empty()).then_some(name)
}

#[cfg(not(unix))]
fn os_hostname() -> Option<String> {
    None
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Path the current program was invoked as (`argv[0]`).
pub fn invoking_program() -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .filter(|arg| !arg.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Runtime platform of this process.
///
/// OS and architecture come from the running binary's target rather than
/// from build-time variables, which are not set outside of a build.
pub fn detect_environment() -> Environment {
    Environment {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        shell: invoking_program(),
    }
}
