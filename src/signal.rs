use std::process::exit;
use std::sync::atomic::{AtomicBool, Ordering};

static CONSOLE_HAS_CONTROL: AtomicBool = AtomicBool::new(false);
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Called once the console process is running; from then on Ctrl+C belongs
/// to it and this process just keeps waiting.
pub fn pass_control_to_console() {
    CONSOLE_HAS_CONTROL.store(true, Ordering::SeqCst);
}

pub fn setup_signal_handler() {
    let result = ctrlc::set_handler(|| {
        if !CONSOLE_HAS_CONTROL.load(Ordering::SeqCst) {
            exit(INTERRUPTED_EXIT_CODE);
        }
    });

    if result.is_err() {
        eprintln!("cygassoc: unable to set a Ctrl+C handler, interrupts will not be forwarded");
    }
}
