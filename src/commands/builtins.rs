//! Built-in command handlers.
//!
//! Every built-in is a pure function of its arguments and the dispatch
//! context. Output text comes from the content bundles; only the layout
//! (bubbles, trees, tables) is computed here.

use super::{Builtin, CommandHandler, CommandSet, Context};
use crate::output::RecordKind;
use crate::response::Response;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use chrono::{DateTime, Utc};
use unicode_width::UnicodeWidthStr;

/// Pages reachable through `cd`, in listing order.
pub const SITE_DIRS: &[&str] = &["blogs", "profile", "projects"];

/// Widest line of a `cowsay` bubble.
const COWSAY_WIDTH: usize = 40;

const LOGO: &[&str] = &[
    "  _________  ",
    " |  _____  | ",
    " | |     | | ",
    " | |  >_ | | ",
    " | |_____| | ",
    " |_________| ",
    "    _|_|_    ",
    "   [_____]   ",
];

const COW: &[&str] = &[
    "        \\   ^__^",
    "         \\  (oo)\\_______",
    "            (__)\\       )\\/\\",
    "                ||----w |",
    "                ||     ||",
];

const LOCOMOTIVE: &[&str] = &[
    "      ====        ________                ___________",
    "  _D _|  |_______/        \\__I_I_____===__|_________|",
    "   |(_)---  |   H\\________/ |   |        =|___ ___|",
    "   /     |  |   H  |  |     |   |         ||_| |_||",
    "  |      |  |   H  |__--------------------| [___] |",
    "  | ________|___H__/__|_____/[][]~\\_______|       |",
    "  |/ |   |-----------I_____I [][] []  D   |=======|__",
    "__/ =| o |=-~~\\  /~~\\  /~~\\  /~~\\ ____Y___________|__",
    " |/-=|___|=    ||    ||    ||    |_____/~\\___/",
    "  \\_/      \\O=====O=====O=====O_/      \\_/",
];

/// Handler for the `Builtin` command set.
#[derive(Debug, Copy, Clone, Default)]
pub struct Builtins;

impl CommandHandler for Builtins {
    fn execute(&self, name: &str, args: &[&str], ctx: &Context<'_>) -> Option<Response> {
        let command = Builtin::lookup(name)?;
        Some(run(command, name, args, ctx))
    }
}

/// Run `command`, invoked as `name` (canonical name or alias).
pub fn run(command: Builtin, name: &str, args: &[&str], ctx: &Context<'_>) -> Response {
    let content = ctx.content;

    match command {
        Builtin::Help => Response::lines(name, help(ctx)),
        Builtin::Neofetch => Response::kind(RecordKind::Neofetch, name, neofetch(ctx)),
        Builtin::Whoami => Response::lines(name, content.canned.about.clone()),
        Builtin::Profile => {
            Response::kind(RecordKind::Profile, name, profile(ctx)).then_navigate("/profile")
        }
        Builtin::Projects => {
            let mut lines = if content.canned.projects.is_empty() {
                vec!["No projects yet.".to_string()]
            } else {
                content.canned.projects.clone()
            };
            lines.push(String::new());
            lines.push("Opening projects page...".into());
            Response::lines(name, lines).then_navigate("/projects")
        }
        Builtin::Clear => Response::clear(),
        Builtin::Ls => ls(name, args, ctx),
        Builtin::Cd => cd(name, args),
        Builtin::Pwd => Response::lines(
            name,
            vec![format!("/home/{}", content.terminal.username)],
        ),
        Builtin::Fortune => {
            let fortunes = &content.canned.fortunes;
            let line = if fortunes.is_empty() {
                "fortune: no fortunes available".to_string()
            } else {
                fortunes[ctx.entropy as usize % fortunes.len()].clone()
            };
            Response::lines(name, vec![line])
        }
        Builtin::Cowsay => {
            let message = if args.is_empty() {
                "Moo!".to_string()
            } else {
                args.join(" ")
            };
            Response::lines(name, cowsay(&message))
        }
        Builtin::Tree => Response::lines(name, tree(ctx)),
        Builtin::Ps => Response::lines(name, ps(ctx)),
        Builtin::Top => Response::lines(name, top(ctx)),
        Builtin::Date => {
            let line = match ctx
                .wall_clock
                .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
            {
                Some(now) => now.format("%a %b %e %H:%M:%S UTC %Y").to_string(),
                None => "date: clock unavailable".to_string(),
            };
            Response::lines(name, vec![line])
        }
        Builtin::Uptime => Response::lines(
            name,
            vec![format!(
                "up {}, 1 user, load average: 0.08, 0.03, 0.01",
                hours_minutes(ctx.uptime_ms)
            )],
        ),
        Builtin::Uname => {
            let line = if args.contains(&"-a") {
                format!(
                    "Linux {} {} x86_64 GNU/Linux",
                    content.terminal.hostname, content.system.kernel
                )
            } else {
                "Linux".to_string()
            };
            Response::lines(name, vec![line])
        }
        Builtin::History => Response::lines(
            name,
            ctx.history
                .iter()
                .rev()
                .enumerate()
                .map(|(i, entry)| format!("{:>5}  {}", i + 1, entry))
                .collect(),
        ),
        Builtin::Man => Response::lines(name, man(args, ctx)),
        Builtin::Parrot => Response::parrot(name, content.canned.parrot.clone()),
        Builtin::Sl => Response::lines(name, LOCOMOTIVE.iter().map(|l| l.to_string()).collect()),
        Builtin::Cat => cat(name, args, ctx),
        Builtin::Grep => Response::lines(name, grep(args, ctx)),
    }
}

/// Synopsis line printed by `man`.
pub fn usage(command: Builtin) -> &'static str {
    match command {
        Builtin::Ls => "ls [DIRECTORY]",
        Builtin::Cd => "cd [DIRECTORY]",
        Builtin::Cat => "cat FILE",
        Builtin::Grep => "grep PATTERN [FILE]",
        Builtin::Man => "man COMMAND",
        Builtin::Cowsay => "cowsay [MESSAGE...]",
        Builtin::Uname => "uname [-a]",
        other => other.name(),
    }
}

/// Resolve a `cd`/`ls` argument to a site directory. Case-sensitive.
fn site_dir(arg: &str) -> Option<&'static str> {
    let trimmed = arg.trim_matches('/');
    SITE_DIRS.iter().copied().find(|dir| *dir == trimmed)
}

fn is_home(arg: &str) -> bool {
    matches!(arg, "~" | "~/" | "." | "./" | "/")
}

fn help(ctx: &Context<'_>) -> Vec<String> {
    let terminal = &ctx.content.terminal;
    let mut lines = vec!["Available commands:".to_string()];

    for enabled in &terminal.enabled_commands {
        let key = enabled.to_lowercase();
        if terminal.custom_commands.contains_key(&key) {
            lines.push(format!("  {}", key));
        } else if let Some(command) = Builtin::lookup(&key) {
            lines.push(format!("  {:<12}- {}", key, command.about()));
        }
    }

    let extra: Vec<&String> = terminal
        .custom_commands
        .keys()
        .filter(|name| {
            !terminal
                .enabled_commands
                .iter()
                .any(|enabled| enabled.eq_ignore_ascii_case(name))
        })
        .collect();
    if !extra.is_empty() {
        lines.push(String::new());
        lines.push("Also available:".into());
        for name in extra {
            lines.push(format!("  {}", name));
        }
    }

    lines.push(String::new());
    lines.push("Tab completes a command name, Up/Down browse history.".into());
    lines
}

fn neofetch(ctx: &Context<'_>) -> Vec<String> {
    let system = &ctx.content.system;
    let terminal = &ctx.content.terminal;

    let header = format!("{}@{}", terminal.username, terminal.hostname);
    let rule = "-".repeat(header.width());
    let info = [
        header,
        rule,
        format!("OS: {}", system.os),
        format!("Host: {}", system.host),
        format!("Kernel: {}", system.kernel),
        format!("Uptime: {}", system.uptime),
        format!("Packages: {}", system.packages),
        format!("Shell: {}", system.shell),
        format!("Resolution: {}", system.resolution),
        format!("DE: {}", system.de),
        format!("WM: {}", system.wm),
        format!("Terminal: {}", system.terminal),
        format!("CPU: {}", system.cpu),
        format!("GPU: {}", system.gpu),
        format!("Memory: {}", system.memory),
    ];

    let art: Vec<&str> = match &system.ascii_art {
        Some(art) => art.iter().map(String::as_str).collect(),
        None => LOGO.to_vec(),
    };
    let width = art.iter().map(|line| line.width()).max().unwrap_or(0);
    let rows = art.len().max(info.len());

    (0..rows)
        .map(|row| {
            let left = art.get(row).copied().unwrap_or("");
            let right = info.get(row).map(String::as_str).unwrap_or("");
            let line = format!("{}  {}", pad(left, width), right);
            line.trim_end().to_string()
        })
        .collect()
}

fn profile(ctx: &Context<'_>) -> Vec<String> {
    let profile = &ctx.content.profile;
    let fields = [
        ("Name", &profile.name),
        ("Username", &profile.username),
        ("Title", &profile.title),
        ("Location", &profile.location),
        ("Bio", &profile.bio),
        ("Website", &profile.website),
        ("Email", &profile.email),
    ];

    let mut lines: Vec<String> = fields
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| format!("{:<10}{}", format!("{}:", label), value))
        .collect();
    lines.push(String::new());
    lines.push("Opening profile page...".into());
    lines
}

fn ls(name: &str, args: &[&str], ctx: &Context<'_>) -> Response {
    let content = ctx.content;
    let target = args.iter().copied().find(|arg| !arg.starts_with('-'));

    match target {
        None => {}
        Some(arg) if is_home(arg) => {}
        Some(arg) => {
            return match site_dir(arg) {
                Some("blogs") => {
                    let files: Vec<&str> =
                        content.canned.blogs.iter().map(|p| p.file.as_str()).collect();
                    Response::lines(name, vec![files.join("  ")])
                }
                Some(_) => Response::lines(name, Vec::new()),
                None => Response::lines(
                    name,
                    vec![format!(
                        "ls: cannot access '{}': No such file or directory",
                        arg
                    )],
                ),
            };
        }
    }

    let mut entries: Vec<String> = SITE_DIRS.iter().map(|dir| format!("{}/", dir)).collect();
    entries.extend(content.canned.files.keys().cloned());
    Response::lines(name, vec![entries.join("  ")])
}

fn cd(name: &str, args: &[&str]) -> Response {
    match args.first() {
        None => Response::lines(name, Vec::new()),
        Some(arg) if is_home(arg) => Response::lines(name, Vec::new()),
        Some(arg) => match site_dir(arg) {
            Some(dir) => {
                let path = format!("/{}", dir);
                Response::lines(name, vec![format!("Navigating to {}...", path)])
                    .then_navigate(&path)
            }
            None => Response::lines(
                name,
                vec![format!("cd: no such file or directory: {}", arg)],
            ),
        },
    }
}

fn cat(name: &str, args: &[&str], ctx: &Context<'_>) -> Response {
    let content = ctx.content;
    let Some(file) = args.first() else {
        return Response::lines(name, vec!["cat: missing file operand".to_string()]);
    };

    if let Some(post) = content.blog(file) {
        let path = format!("/blogs/{}", post.slug);
        return Response::lines(
            name,
            vec![post.title.clone(), format!("Opening {}...", path)],
        )
        .then_navigate(&path);
    }

    if let Some(lines) = content.canned.files.get(*file) {
        return Response::lines(name, lines.clone());
    }

    let line = if site_dir(file).is_some() {
        format!("cat: {}: Is a directory", file)
    } else {
        format!("cat: {}: No such file or directory", file)
    };
    Response::lines(name, vec![line])
}

fn grep(args: &[&str], ctx: &Context<'_>) -> Vec<String> {
    let content = ctx.content;
    let Some(pattern) = args.first().copied() else {
        return vec![
            "grep: missing pattern".to_string(),
            "usage: grep PATTERN [FILE]".to_string(),
        ];
    };

    let mut sources: Vec<(String, Vec<&str>)> = content
        .canned
        .files
        .iter()
        .map(|(file, lines)| (file.clone(), lines.iter().map(String::as_str).collect()))
        .collect();
    sources.extend(
        content
            .canned
            .blogs
            .iter()
            .map(|post| (format!("blogs/{}", post.file), vec![post.title.as_str()])),
    );

    let single = args.get(1).copied();
    if let Some(file) = single {
        let wanted = match content.blog(file) {
            Some(post) => format!("blogs/{}", post.file),
            None => file.to_string(),
        };
        sources.retain(|(label, _)| *label == wanted);
        if sources.is_empty() {
            return vec![format!("grep: {}: No such file or directory", file)];
        }
    }

    let mut matches = Vec::new();
    for (label, lines) in &sources {
        for line in lines.iter().filter(|line| line.contains(pattern)) {
            if single.is_some() {
                matches.push(line.to_string());
            } else {
                matches.push(format!("{}:{}", label, line));
            }
        }
    }

    if matches.is_empty() {
        matches.push("(no matches)".into());
    }
    matches
}

fn man(args: &[&str], ctx: &Context<'_>) -> Vec<String> {
    let Some(topic) = args.first() else {
        return vec![
            "What manual page do you want?".to_string(),
            "For example, try 'man man'.".to_string(),
        ];
    };
    let key = topic.to_lowercase();

    if let Some(command) = Builtin::lookup(&key) {
        let mut page = vec![
            format!("{}(1)", command.name().to_uppercase()),
            String::new(),
            "NAME".into(),
            format!("    {} - {}", command.name(), command.about()),
            String::new(),
            "SYNOPSIS".into(),
            format!("    {}", usage(command)),
            String::new(),
            "DESCRIPTION".into(),
            format!("    {}.", command.about()),
        ];
        if !command.aliases().is_empty() {
            page.push(String::new());
            page.push("ALIASES".into());
            page.push(format!("    {}", command.aliases().join(", ")));
        }
        return page;
    }

    if ctx.content.terminal.custom_commands.contains_key(&key) {
        return vec![format!("{} - custom command", key)];
    }

    vec![format!("No manual entry for {}", topic)]
}

fn cowsay(message: &str) -> Vec<String> {
    let wrapped = wrap(message, COWSAY_WIDTH);
    let width = wrapped.iter().map(|line| line.width()).max().unwrap_or(0);

    let mut lines = vec![format!(" {}", "_".repeat(width + 2))];
    if wrapped.len() == 1 {
        lines.push(format!("< {} >", wrapped[0]));
    } else {
        let last = wrapped.len() - 1;
        for (i, line) in wrapped.iter().enumerate() {
            let (open, close) = match i {
                0 => ('/', '\\'),
                i if i == last => ('\\', '/'),
                _ => ('|', '|'),
            };
            lines.push(format!("{} {} {}", open, pad(line, width), close));
        }
    }
    lines.push(format!(" {}", "-".repeat(width + 2)));
    lines.extend(COW.iter().map(|line| line.to_string()));
    lines
}

/// Left-align `text` in `width` terminal cells.
///
/// `format!` padding counts chars, which misaligns wide glyphs.
fn pad(text: &str, width: usize) -> String {
    let mut padded = String::from(text);
    padded.extend(core::iter::repeat_n(' ', width.saturating_sub(text.width())));
    padded
}

/// Greedy word wrap by display width. Words wider than `max` get a line of
/// their own.
fn wrap(text: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.width() + 1 + word.width() > max {
            lines.push(core::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn tree(ctx: &Context<'_>) -> Vec<String> {
    let canned = &ctx.content.canned;
    let blog_files: Vec<&str> = canned.blogs.iter().map(|post| post.file.as_str()).collect();

    let mut entries: Vec<(&str, Vec<&str>)> = vec![
        ("blogs", blog_files),
        ("profile", Vec::new()),
        ("projects", Vec::new()),
    ];
    entries.extend(canned.files.keys().map(|file| (file.as_str(), Vec::new())));

    let mut lines = vec![".".to_string()];
    for (i, (name, children)) in entries.iter().enumerate() {
        let last = i + 1 == entries.len();
        lines.push(format!("{}{}", if last { "└── " } else { "├── " }, name));
        for (j, child) in children.iter().enumerate() {
            let child_last = j + 1 == children.len();
            lines.push(format!(
                "{}{}{}",
                if last { "    " } else { "│   " },
                if child_last { "└── " } else { "├── " },
                child
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{} directories, {} files",
        SITE_DIRS.len(),
        canned.blogs.len() + canned.files.len()
    ));
    lines
}

fn ps(ctx: &Context<'_>) -> Vec<String> {
    let pid = 1000 + ctx.history.len();
    vec![
        "  PID TTY          TIME CMD".to_string(),
        format!("{:>5} {:<8} {} {}", 1, "pts/0", "00:00:00", "folio-sh"),
        format!(
            "{:>5} {:<8} {} {}",
            pid,
            "pts/0",
            clock_time(ctx.uptime_ms),
            "folio-term"
        ),
        format!("{:>5} {:<8} {} {}", pid + 1, "pts/0", "00:00:00", "ps"),
    ]
}

fn top(ctx: &Context<'_>) -> Vec<String> {
    let user = &ctx.content.terminal.username;
    let pid = 1000 + ctx.history.len();
    vec![
        format!(
            "top - up {},  1 user,  load average: 0.08, 0.03, 0.01",
            hours_minutes(ctx.uptime_ms)
        ),
        "Tasks:   3 total,   1 running,   2 sleeping,   0 stopped,   0 zombie".to_string(),
        "%Cpu(s):  0.3 us,  0.1 sy,  0.0 ni, 99.6 id".to_string(),
        format!("Mem: {}", ctx.content.system.memory),
        String::new(),
        "  PID USER       %CPU %MEM     TIME+ COMMAND".to_string(),
        format!(
            "{:>5} {:<10} {:>4} {:>4} {:>9} {}",
            1, user, "0.0", "0.1", "00:00:00", "folio-sh"
        ),
        format!(
            "{:>5} {:<10} {:>4} {:>4} {:>9} {}",
            pid,
            user,
            "0.3",
            "1.2",
            clock_time(ctx.uptime_ms),
            "folio-term"
        ),
        format!(
            "{:>5} {:<10} {:>4} {:>4} {:>9} {}",
            pid + 1,
            user,
            "0.0",
            "0.1",
            "00:00:00",
            "top"
        ),
    ]
}

/// `H:MM`
fn hours_minutes(ms: u64) -> String {
    let minutes = ms / 60_000;
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// `HH:MM:SS`
fn clock_time(ms: u64) -> String {
    let seconds = ms / 1000;
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds / 60) % 60,
        seconds % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{BlogPost, Content};
    use crate::response::DeferredAction;
    use crate::session::history::HistoryEntry;

    fn ctx(content: &Content) -> Context<'_> {
        Context {
            content,
            history: &[],
            uptime_ms: 0,
            wall_clock: None,
            entropy: 0,
        }
    }

    fn exec(content: &Content, name: &str, args: &[&str]) -> Response {
        Builtins
            .execute(name, args, &ctx(content))
            .expect("built-in should handle the command")
    }

    fn with_blog() -> Content {
        let mut content = Content::default();
        content.canned.blogs.push(BlogPost {
            file: "rust-tips.md".into(),
            title: "Ten Rust tips".into(),
            slug: "rust-tips".into(),
        });
        content
    }

    #[test]
    fn test_unknown_name_is_not_handled() {
        let content = Content::default();
        assert!(Builtins.execute("zz", &[], &ctx(&content)).is_none());
    }

    #[test]
    fn test_alias_keeps_invoked_name() {
        let content = Content::default();
        let response = exec(&content, "about", &[]);
        assert_eq!(response.records[0].command, "about");
        assert_eq!(response.records[0].lines, content.canned.about);
    }

    #[test]
    fn test_cd_targets() {
        let content = Content::default();

        for arg in ["blogs", "/blogs", "blogs/"] {
            let response = exec(&content, "cd", &[arg]);
            assert_eq!(
                response.action,
                Some(DeferredAction::Navigate("/blogs".into())),
                "cd {}",
                arg
            );
        }

        let response = exec(&content, "cd", &["projects"]);
        assert_eq!(
            response.action,
            Some(DeferredAction::Navigate("/projects".into()))
        );

        for arg in ["~", ".", "/"] {
            let response = exec(&content, "cd", &[arg]);
            assert!(response.records[0].lines.is_empty());
            assert!(response.action.is_none());
        }

        let response = exec(&content, "cd", &["Blogs"]);
        assert_eq!(
            response.records[0].lines,
            ["cd: no such file or directory: Blogs"]
        );
        assert!(response.action.is_none());
    }

    #[test]
    fn test_profile_navigates() {
        let content = Content::default();
        let response = exec(&content, "profile", &[]);
        assert_eq!(response.records[0].kind, RecordKind::Profile);
        assert!(response.records[0].contains("Site Owner"));
        assert_eq!(
            response.action,
            Some(DeferredAction::Navigate("/profile".into()))
        );
    }

    #[test]
    fn test_neofetch_pairs_art_with_fields() {
        let content = Content::default();
        let response = exec(&content, "system-info", &[]);
        let record = &response.records[0];
        assert_eq!(record.kind, RecordKind::Neofetch);
        assert_eq!(record.lines.len(), 15);
        assert!(record.lines[0].starts_with(LOGO[0]));
        assert!(record.lines[0].ends_with("guest@folio"));
        assert!(record.lines[14].ends_with("Memory: 512MiB / 16384MiB"));
    }

    #[test]
    fn test_fortune_uses_entropy() {
        let content = Content::default();
        let mut context = ctx(&content);
        context.entropy = 1;
        let response = Builtins.execute("fortune", &[], &context).unwrap();
        assert_eq!(response.records[0].lines[0], content.canned.fortunes[1]);

        context.entropy = content.canned.fortunes.len() as u32;
        let response = Builtins.execute("fortune", &[], &context).unwrap();
        assert_eq!(response.records[0].lines[0], content.canned.fortunes[0]);
    }

    #[test]
    fn test_cowsay_single_line() {
        let lines = cowsay("hi");
        assert_eq!(lines[0], " ____");
        assert_eq!(lines[1], "< hi >");
        assert_eq!(lines[2], " ----");
        assert_eq!(lines.len(), 3 + COW.len());
    }

    #[test]
    fn test_cowsay_wraps_long_messages() {
        let message = "the quick brown fox jumps over the lazy dog and keeps on running";
        let lines = cowsay(message);
        assert!(lines[1].starts_with("/ "));
        assert!(lines[1].ends_with(" \\"));
        assert!(lines[2].starts_with("\\ "));
        assert_eq!(lines[1].width(), lines[2].width());
    }

    #[test]
    fn test_cowsay_measures_wide_glyphs_in_cells() {
        let lines = cowsay("你好世界");
        assert_eq!(lines[1], "< 你好世界 >");
        assert_eq!(lines[0].width() + 1, lines[1].width());
        assert_eq!(lines[2].width() + 1, lines[1].width());

        let lines = cowsay("hi 👋 there, this line is long enough to wrap around 世界世界");
        let widths: Vec<usize> = lines[1..lines.len() - COW.len() - 1]
            .iter()
            .map(|line| line.width())
            .collect();
        assert!(widths.len() > 1);
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert_eq!(lines[0].width() + 1, widths[0]);
    }

    #[test]
    fn test_neofetch_aligns_wide_art() {
        let mut content = Content::default();
        content.system.ascii_art = Some(vec!["日本".into(), "ab".into()]);
        let lines = neofetch(&ctx(&content));
        assert_eq!(lines[0], "日本  guest@folio");
        assert_eq!(lines[1], "ab    -----------");
        assert_eq!(lines[2], "      OS: FolioOS x86_64");
    }

    #[test]
    fn test_pad_counts_cells() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("日本", 4), "日本");
        assert_eq!(pad("日本", 6), "日本  ");
        assert_eq!(pad("toolong", 3), "toolong");
    }

    #[test]
    fn test_wrap_counts_cells() {
        assert_eq!(wrap("世界 世界", 5), ["世界", "世界"]);
        assert_eq!(wrap("ab cd", 5), ["ab cd"]);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("", 10), [""]);
        assert_eq!(wrap("a b c", 3), ["a b", "c"]);
        assert_eq!(wrap("abcdefghijkl x", 5), ["abcdefghijkl", "x"]);
    }

    #[test]
    fn test_tree_counts_files() {
        let content = with_blog();
        let lines = tree(&ctx(&content));
        assert_eq!(lines[0], ".");
        assert_eq!(lines[1], "├── blogs");
        assert_eq!(lines[2], "│   └── rust-tips.md");
        assert_eq!(lines[5], "└── readme.txt");
        assert_eq!(lines.last().unwrap(), "3 directories, 2 files");
    }

    #[test]
    fn test_ls() {
        let content = with_blog();
        let response = exec(&content, "ls", &[]);
        assert_eq!(
            response.records[0].lines,
            ["blogs/  profile/  projects/  readme.txt"]
        );

        let response = exec(&content, "ls", &["-la", "blogs"]);
        assert_eq!(response.records[0].lines, ["rust-tips.md"]);

        let response = exec(&content, "ls", &["nope"]);
        assert!(response.records[0].contains("cannot access 'nope'"));
    }

    #[test]
    fn test_cat() {
        let content = with_blog();

        let response = exec(&content, "cat", &[]);
        assert_eq!(response.records[0].lines, ["cat: missing file operand"]);

        let response = exec(&content, "cat", &["blogs/rust-tips.md"]);
        assert_eq!(
            response.action,
            Some(DeferredAction::Navigate("/blogs/rust-tips".into()))
        );

        let response = exec(&content, "cat", &["readme.txt"]);
        assert_eq!(response.records[0].lines, content.canned.files["readme.txt"]);
        assert!(response.action.is_none());

        let response = exec(&content, "cat", &["blogs"]);
        assert_eq!(response.records[0].lines, ["cat: blogs: Is a directory"]);

        let response = exec(&content, "cat", &["missing.txt"]);
        assert_eq!(
            response.records[0].lines,
            ["cat: missing.txt: No such file or directory"]
        );
    }

    #[test]
    fn test_grep() {
        let content = with_blog();

        let lines = grep(&[], &ctx(&content));
        assert_eq!(lines[0], "grep: missing pattern");

        let lines = grep(&["Rust"], &ctx(&content));
        assert_eq!(lines, ["blogs/rust-tips.md:Ten Rust tips"]);

        let lines = grep(&["canned", "readme.txt"], &ctx(&content));
        assert_eq!(
            lines,
            ["Every command is canned; nothing here touches a filesystem."]
        );

        let lines = grep(&["rust"], &ctx(&content));
        assert_eq!(lines, ["(no matches)"]);

        let lines = grep(&["x", "nope.txt"], &ctx(&content));
        assert_eq!(lines, ["grep: nope.txt: No such file or directory"]);
    }

    #[test]
    fn test_man() {
        let content = Content::default();

        let lines = man(&[], &ctx(&content));
        assert_eq!(lines[0], "What manual page do you want?");

        let lines = man(&["GREP"], &ctx(&content));
        assert_eq!(lines[0], "GREP(1)");
        assert!(lines.iter().any(|l| l == "    grep PATTERN [FILE]"));

        let lines = man(&["whoami"], &ctx(&content));
        assert!(lines.iter().any(|l| l == "    about, info"));

        let lines = man(&["zz"], &ctx(&content));
        assert_eq!(lines, ["No manual entry for zz"]);
    }

    #[test]
    fn test_history_numbers_oldest_first() {
        let content = Content::default();
        let mut newest_first = Vec::new();
        for line in ["history", "ls", "help"] {
            let mut entry = HistoryEntry::new();
            entry.push_str(line).unwrap();
            newest_first.push(entry);
        }
        let context = Context {
            content: &content,
            history: &newest_first,
            uptime_ms: 0,
            wall_clock: None,
            entropy: 0,
        };

        let response = Builtins.execute("history", &[], &context).unwrap();
        assert_eq!(
            response.records[0].lines,
            ["    1  help", "    2  ls", "    3  history"]
        );
    }

    #[test]
    fn test_date() {
        let content = Content::default();
        let response = exec(&content, "date", &[]);
        assert_eq!(response.records[0].lines, ["date: clock unavailable"]);

        let mut context = ctx(&content);
        context.wall_clock = Some(1_700_000_000);
        let response = Builtins.execute("date", &[], &context).unwrap();
        assert_eq!(response.records[0].lines, ["Tue Nov 14 22:13:20 UTC 2023"]);
    }

    #[test]
    fn test_uptime_and_uname() {
        let content = Content::default();
        let mut context = ctx(&content);
        context.uptime_ms = 3_720_000;
        let response = Builtins.execute("uptime", &[], &context).unwrap();
        assert!(response.records[0].lines[0].starts_with("up 1:02,"));

        let response = exec(&content, "uname", &[]);
        assert_eq!(response.records[0].lines, ["Linux"]);

        let response = exec(&content, "uname", &["-a"]);
        assert_eq!(
            response.records[0].lines,
            ["Linux folio 6.1.0-folio x86_64 GNU/Linux"]
        );
    }

    #[test]
    fn test_clock_formatting() {
        assert_eq!(hours_minutes(0), "0:00");
        assert_eq!(hours_minutes(59_999), "0:00");
        assert_eq!(hours_minutes(61 * 60_000), "1:01");
        assert_eq!(clock_time(3_661_000), "01:01:01");
    }

    #[test]
    fn test_parrot_and_clear() {
        let content = Content::default();
        let response = exec(&content, "parrot", &[]);
        assert_eq!(response.records[0].kind, RecordKind::Parrot);
        assert_eq!(
            response.records[0].animation.as_ref(),
            Some(&content.canned.parrot)
        );

        assert!(exec(&content, "clear", &[]).clear_log);
    }

    #[test]
    fn test_every_builtin_answers() {
        let content = Content::default();
        for command in Builtin::ALL {
            let response = exec(&content, command.name(), &[]);
            assert!(
                response.clear_log || !response.records.is_empty(),
                "{} produced nothing",
                command.name()
            );
        }
    }
}
