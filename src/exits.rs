//! Exit handling: exit codes, signal handlers, and process hardening.

/// Password generated; delivery warnings don't change this.
pub const SUCCESS: u8 = 0;

/// Generation could not run: bad length, empty alphabet, or closed input.
pub const FAILURE: u8 = 1;

/// Terminated by SIGINT/SIGTERM/SIGHUP.
pub const INTERRUPTED: i32 = 130;

/// Reset terminal to sane state using termios directly
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Signal handler for SIGINT/SIGTERM/SIGHUP - restore the terminal and leave
/// without unwinding. Only async-signal-safe calls here.
extern "C" fn signal_handler(_: libc::c_int) {
    reset_terminal_termios();
    unsafe {
        // Interrupted prompt leaves the cursor mid-line
        if libc::isatty(1) == 1 {
            libc::write(1, b"\r\n".as_ptr() as *const libc::c_void, 2);
        }
        libc::_exit(INTERRUPTED)
    }
}

/// Install signal handlers
pub fn install_handlers() {
    unsafe {
        libc::signal(
            libc::SIGINT,
            signal_handler as *const () as libc::sighandler_t,
        );
        libc::signal(
            libc::SIGTERM,
            signal_handler as *const () as libc::sighandler_t,
        );
        libc::signal(
            libc::SIGHUP,
            signal_handler as *const () as libc::sighandler_t,
        );
    }
}

/// Keep the generated password out of core dumps and ptrace.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {}
