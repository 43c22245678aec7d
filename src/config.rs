use lazy_static::lazy_static;

// Root of the local Cygwin installation.
const CYGWIN_ROOT: &str = r"C:\cygwin";

// Windows-side programs, addressed relative to the Cygwin root.
const CONSOLE: &str = r"\bin\mintty.exe";
const CONSOLE_OPTIONS: &str = "-e";
const SHELL: &str = r"\bin\tcsh.exe";
const SHELL_OPTIONS: &str = "-c";
const CYGPATH: &str = r"\bin\cygpath.exe";

// The target runs inside a proper shell, so it is addressed Cygwin-side.
const TARGET: &str = "/usr/bin/vim";
const TARGET_OPTIONS: &str = "";

lazy_static! {
    pub static ref CONFIG: Config = Config::new();
}

/// The programs taking part in a launch.  Fixed at build time; adjust the
/// constants above to suit a particular install.
pub struct Config {
    pub console: String,
    pub console_options: String,
    pub shell: String,
    pub shell_options: String,
    pub target: String,
    pub target_options: String,
    pub cygpath: String,
}

impl Config {
    fn new() -> Self {
        Config {
            console: format!("{}{}", CYGWIN_ROOT, CONSOLE),
            console_options: CONSOLE_OPTIONS.to_owned(),
            shell: format!("{}{}", CYGWIN_ROOT, SHELL),
            shell_options: SHELL_OPTIONS.to_owned(),
            target: TARGET.to_owned(),
            target_options: TARGET_OPTIONS.to_owned(),
            cygpath: format!("{}{}", CYGWIN_ROOT, CYGPATH),
        }
    }
}
