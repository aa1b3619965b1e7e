use std::process::Command;

/// Build a command that runs `command_str` through the platform shell.
///
/// Lets users configure pagers with arguments (`less -R`, `bat --paging=always`).
pub fn shell_command(command_str: &str) -> Command {
    if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command_str);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command_str);
        c
    }
}
