//! Platform debugging aids behind a capability interface.
//!
//! The triage pipeline talks to the platform exclusively through
//! [`DebugHost`], so the pipeline itself stays platform-independent and
//! testable without a debugger or a display. Windows gets the real Win32
//! primitives; every other platform gets no-ops, and severity routing to
//! the log sink is unaffected.

use std::sync::Arc;

/// Interactive debugging primitives of the platform this process runs on.
pub trait DebugHost: Send + Sync {
    /// Writes one line to the platform debug-output stream, if there is
    /// one.
    fn output(&self, line: &str);

    /// True when a native debugger is attached to the process.
    fn debugger_attached(&self) -> bool;

    /// Halts execution in the attached debugger.
    fn break_into_debugger(&self);

    /// Shows a modal alert and blocks the calling thread until the user
    /// dismisses it.
    fn alert(&self, title: &str, body: &str);
}

impl<H: DebugHost + ?Sized> DebugHost for Arc<H> {
    fn output(&self, line: &str) {
        (**self).output(line);
    }

    fn debugger_attached(&self) -> bool {
        (**self).debugger_attached()
    }

    fn break_into_debugger(&self) {
        (**self).break_into_debugger();
    }

    fn alert(&self, title: &str, body: &str) {
        (**self).alert(title, body);
    }
}

/// Host for platforms without debug-output, debugger or alert primitives.
/// Every operation is a no-op and no debugger is ever reported attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDebugHost;

impl DebugHost for NullDebugHost {
    fn output(&self, _line: &str) {}

    fn debugger_attached(&self) -> bool {
        false
    }

    fn break_into_debugger(&self) {}

    fn alert(&self, _title: &str, _body: &str) {}
}

#[cfg(windows)]
mod win32 {
    use super::DebugHost;
    use std::ffi::c_void;
    use std::os::raw::{c_char, c_int, c_uint};

    const MB_OK: c_uint = 0;

    #[link(name = "kernel32")]
    extern "system" {
        fn IsDebuggerPresent() -> c_int;
        fn DebugBreak();
        fn OutputDebugStringA(output_string: *const c_char);
    }

    #[link(name = "user32")]
    extern "system" {
        fn MessageBoxA(
            hwnd: *mut c_void,
            text: *const c_char,
            caption: *const c_char,
            kind: c_uint,
        ) -> c_int;
    }

    /// The A-entry points want NUL-terminated bytes; interior NULs in the
    /// message would truncate it, so they are replaced.
    fn nul_terminated(text: &str) -> Vec<u8> {
        let mut buf = Vec::with_capacity(text.len() + 1);
        buf.extend(text.bytes().map(|b| if b == 0 { b'?' } else { b }));
        buf.push(0);
        buf
    }

    /// Win32 debugging aids: `OutputDebugStringA`, `IsDebuggerPresent`,
    /// `DebugBreak` and a blocking `MessageBoxA`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct WindowsDebugHost;

    impl DebugHost for WindowsDebugHost {
        fn output(&self, line: &str) {
            let buf = nul_terminated(line);
            unsafe { OutputDebugStringA(buf.as_ptr().cast()) }
        }

        fn debugger_attached(&self) -> bool {
            unsafe { IsDebuggerPresent() != 0 }
        }

        fn break_into_debugger(&self) {
            unsafe { DebugBreak() }
        }

        fn alert(&self, title: &str, body: &str) {
            let caption = nul_terminated(title);
            let text = nul_terminated(body);
            unsafe {
                MessageBoxA(
                    std::ptr::null_mut(),
                    text.as_ptr().cast(),
                    caption.as_ptr().cast(),
                    MB_OK,
                );
            }
        }
    }
}

#[cfg(windows)]
pub use win32::WindowsDebugHost;

/// The debugging aids of the current platform: Win32 primitives on
/// Windows, no-ops everywhere else.
#[cfg(windows)]
pub fn platform_host() -> Box<dyn DebugHost> {
    Box::new(WindowsDebugHost)
}

/// The debugging aids of the current platform: Win32 primitives on
/// Windows, no-ops everywhere else.
#[cfg(not(windows))]
pub fn platform_host() -> Box<dyn DebugHost> {
    Box::new(NullDebugHost)
}
