//! Terminal size queries.
//!
//! The width detector is a trait so the render path never talks to the
//! kernel directly. `platform()` picks the real implementation for the build
//! target; tests and the `--width` override use [`FixedSize`].

use std::io;

/// Window dimensions as reported by the kernel's `winsize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowSize {
    pub rows: u16,
    pub cols: u16,
    pub x_pixels: u16,
    pub y_pixels: u16,
}

#[derive(Debug, thiserror::Error)]
pub enum TerminalQueryError {
    #[error("could not query terminal size on fd {fd}: {source}")]
    Ioctl {
        fd: i32,
        #[source]
        source: io::Error,
    },
    #[error("terminal size queries are not supported on this platform")]
    Unsupported,
}

pub trait TerminalSizeProvider {
    fn window_size(&self) -> Result<WindowSize, TerminalQueryError>;

    /// Current column count.
    fn columns(&self) -> Result<u16, TerminalQueryError> {
        Ok(self.window_size()?.cols)
    }
}

impl<T: TerminalSizeProvider + ?Sized> TerminalSizeProvider for &T {
    fn window_size(&self) -> Result<WindowSize, TerminalQueryError> {
        (**self).window_size()
    }
}

/// Queries a file descriptor with `TIOCGWINSZ`.
#[cfg(unix)]
#[derive(Debug, Clone, Copy)]
pub struct Ioctl {
    fd: std::os::fd::RawFd,
}

#[cfg(unix)]
impl Ioctl {
    pub fn new(fd: std::os::fd::RawFd) -> Self {
        Self { fd }
    }

    /// Query standard input, which is what an interactive shell hands us.
    pub fn stdin() -> Self {
        Self::new(libc::STDIN_FILENO)
    }
}

#[cfg(unix)]
impl TerminalSizeProvider for Ioctl {
    fn window_size(&self) -> Result<WindowSize, TerminalQueryError> {
        let mut ws = libc::winsize {
            ws_row: 0,
            ws_col: 0,
            ws_xpixel: 0,
            ws_ypixel: 0,
        };
        // SAFETY: TIOCGWINSZ only writes into the winsize struct we pass, which
        // lives for the duration of the call.
        let ret = unsafe { libc::ioctl(self.fd, libc::TIOCGWINSZ, &raw mut ws) };
        if ret == -1 {
            return Err(TerminalQueryError::Ioctl {
                fd: self.fd,
                source: io::Error::last_os_error(),
            });
        }
        log::trace!(
            "TIOCGWINSZ on fd {}: {}x{} ({}x{} px)",
            self.fd,
            ws.ws_col,
            ws.ws_row,
            ws.ws_xpixel,
            ws.ws_ypixel
        );
        Ok(WindowSize {
            rows: ws.ws_row,
            cols: ws.ws_col,
            x_pixels: ws.ws_xpixel,
            y_pixels: ws.ws_ypixel,
        })
    }
}

/// Stand-in for targets without `TIOCGWINSZ`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

impl TerminalSizeProvider for Unsupported {
    fn window_size(&self) -> Result<WindowSize, TerminalQueryError> {
        Err(TerminalQueryError::Unsupported)
    }
}

/// Always reports the same width.
#[derive(Debug, Clone, Copy)]
pub struct FixedSize(pub u16);

impl TerminalSizeProvider for FixedSize {
    fn window_size(&self) -> Result<WindowSize, TerminalQueryError> {
        Ok(WindowSize {
            cols: self.0,
            ..WindowSize::default()
        })
    }
}

#[cfg(unix)]
pub fn platform() -> Ioctl {
    Ioctl::stdin()
}

#[cfg(not(unix))]
pub fn platform() -> Unsupported {
    Unsupported
}
