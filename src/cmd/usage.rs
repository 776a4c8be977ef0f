/*!
usage.rs

Plain-text usage rendering for the dispatcher.

Two shapes:
  - top level   : program name, then one right-aligned line per command
  - per command : invocation line, then the flags declared for that command

Both return `String`s; callers decide where they go (stderr on help and
failure paths).
*/

/// Width of the right-aligned command name column in the top-level listing.
pub const NAME_WIDTH: usize = 12;

/// Render the top-level usage block listing every command in order.
pub fn top_level<'a, I>(program: &str, commands: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = format!("Usage:\n\t{program} <command> [arguments]\n\nCommands:\n\n");
    for (name, description) in commands {
        out.push_str(&format!("{name:>NAME_WIDTH$}    {description}\n"));
    }
    out
}

/// Help template attached to a command's flag schema.
///
/// `{all-args}` expands to clap's listing of the declared flags.
pub fn command_template(program: &str, command: &str) -> String {
    format!("Usage:\n\t {program} {command} [arguments]\n{{all-args}}")
}

/// One-line usage shown inside parse error messages.
pub fn command_line(program: &str, command: &str) -> String {
    format!("{program} {command} [arguments]")
}
