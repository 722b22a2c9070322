//! `roledesk` command-line driver.
//!
//! # Responsibility
//! - Persist the session in the local SQLite store between invocations.
//! - Render dashboard views from a freshly seeded domain store.
//!
//! # Invariants
//! - Protected views go through the same access guard as the route table.
//! - Passwords are never logged.

mod config;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use config::CliConfig;
use log::info;
use roledesk_core::db::open_db;
use roledesk_core::query::analytics::user_activity;
use roledesk_core::query::calendar::{upcoming_events, UPCOMING_EVENTS_LIMIT};
use roledesk_core::query::documents::{document_stats, format_file_size};
use roledesk_core::query::logs::{filter_logs, log_stats, unique_actions, LogFilter, LogWindow};
use roledesk_core::query::notifications::{count_by_kind, notifications_for, unread_for};
use roledesk_core::query::tasks::{count_tasks, filter_tasks, TaskFilter};
use roledesk_core::time::format_local_timestamp;
use roledesk_core::{
    check_access, export_file_name, export_logs_csv, init_logging, nav_links, navigate,
    DomainStore, GuardDecision, IdentityStore, Navigation, NotificationKind, Role, Session,
    SqliteLocalStorage, TaskStatus,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roledesk", about = "Role-based team dashboard", version)]
struct Args {
    #[arg(long, env = "ROLEDESK_DATA_DIR", help = "Directory holding roledesk.sqlite3")]
    data_dir: Option<PathBuf>,

    #[arg(long, env = "ROLEDESK_LOG_DIR", help = "Log directory (default: <data-dir>/logs)")]
    log_dir: Option<PathBuf>,

    #[arg(long, env = "ROLEDESK_LOG_LEVEL", help = "trace, debug, info, warn or error")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print core linkage info.
    Ping,
    /// Sign in with one of the demo accounts.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "ROLEDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session.
    Logout,
    /// Show the signed-in user and their navigation links.
    Whoami,
    /// Dashboard counters and a personal summary.
    Stats,
    /// List tasks.
    Tasks {
        #[arg(long, value_parser = parse_status, help = "pending, in-progress or completed")]
        status: Option<TaskStatus>,
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, help = "Only tasks assigned to or created by me")]
        mine: bool,
    },
    /// Activity log (admin only).
    Logs {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        action: Option<String>,
        #[arg(long, default_value = "all", value_parser = parse_window, help = "all, today, week or month")]
        window: LogWindow,
        #[arg(long, help = "Print CSV instead of a table")]
        csv: bool,
    },
    /// Resolve a path through the route table and guard.
    Open { path: String },
}

fn parse_status(value: &str) -> Result<TaskStatus, String> {
    TaskStatus::parse(value).ok_or_else(|| format!("unknown task status `{value}`"))
}

fn parse_window(value: &str) -> Result<LogWindow, String> {
    LogWindow::parse(value).ok_or_else(|| format!("unknown log window `{value}`"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = CliConfig::resolve(args.data_dir, args.log_dir, args.log_level)?;

    if matches!(args.command, Command::Ping) {
        print_ping();
        return Ok(());
    }

    std::fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("failed to create {}", config.data_dir.display()))?;
    init_logging(&config.log_level, &config.log_dir.to_string_lossy())
        .context("failed to initialize logging")?;

    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open {}", config.db_path.display()))?;
    let storage = SqliteLocalStorage::try_new(&conn).context("local storage unavailable")?;
    let mut identity = IdentityStore::open(storage);
    let store = DomainStore::seeded();

    match args.command {
        Command::Ping => print_ping(),
        Command::Login { email, password } => {
            if !identity.login(&email, &password).context("failed to save session")? {
                let known: Vec<&str> = roledesk_core::auth::credentials::known_emails().collect();
                bail!("invalid email or password (demo accounts: {})", known.join(", "));
            }
            let session = signed_in(&identity)?;
            println!("signed in as {} ({})", session.name, session.role);
        }
        Command::Logout => {
            identity.logout().context("failed to clear session")?;
            println!("signed out");
        }
        Command::Whoami => {
            let session = require(&identity, None)?;
            println!("{} <{}> role={}", session.name, session.email, session.role);
            for link in nav_links(session.role) {
                println!("  {:<14} {}", link.label, link.route.path());
            }
        }
        Command::Stats => {
            let session = require(&identity, None)?;
            print_stats(&store, session);
        }
        Command::Tasks {
            status,
            search,
            mine,
        } => {
            let session = require(&identity, None)?;
            let viewer = (mine || session.role == Role::User).then(|| session.id.clone());
            let filter = TaskFilter {
                status,
                search,
                viewer,
            };
            let tasks = filter_tasks(&store, &filter);
            let counts = count_tasks(tasks.iter().copied());
            for task in &tasks {
                println!(
                    "{:<38} {:<12} {:<7} due {}  {}",
                    task.id,
                    task.status.as_str(),
                    task.priority.as_str(),
                    format_local_timestamp(task.due_date),
                    task.title
                );
            }
            println!(
                "total={} pending={} in_progress={} completed={}",
                counts.total, counts.pending, counts.in_progress, counts.completed
            );
        }
        Command::Logs {
            search,
            action,
            window,
            csv,
        } => {
            require(&identity, Some(Role::Admin))?;
            let now = store.now();
            let filter = LogFilter {
                search,
                action,
                window,
            };
            let entries = filter_logs(&store, &filter, now);
            if csv {
                println!("# {}", export_file_name(now));
                println!("{}", export_logs_csv(entries));
                return Ok(());
            }
            for entry in &entries {
                println!(
                    "{}  {:<18} {:<14} {}",
                    format_local_timestamp(entry.timestamp),
                    entry.action,
                    entry.user_name,
                    entry.details
                );
            }
            let stats = log_stats(&store, now);
            println!(
                "total={} today={} this_week={} unique_users={} actions={}",
                stats.total,
                stats.today,
                stats.this_week,
                stats.unique_users,
                unique_actions(&store).join("|")
            );
        }
        Command::Open { path } => match navigate(&identity, &path) {
            Navigation::Loading => println!("loading"),
            Navigation::Render(route) => println!("{}", route.path()),
        },
    }

    info!("event=cli_command module=cli status=ok");
    Ok(())
}

fn print_ping() {
    println!("roledesk_core ping={}", roledesk_core::ping());
    println!("roledesk_core version={}", roledesk_core::core_version());
}

fn signed_in<S: roledesk_core::LocalStorage>(identity: &IdentityStore<S>) -> Result<&Session> {
    identity
        .current_session()
        .ok_or_else(|| anyhow!("not signed in; run `roledesk login`"))
}

fn require<S: roledesk_core::LocalStorage>(
    identity: &IdentityStore<S>,
    role: Option<Role>,
) -> Result<&Session> {
    match check_access(identity, role) {
        GuardDecision::Authorized => signed_in(identity),
        GuardDecision::Loading => bail!("session is still loading"),
        GuardDecision::Redirect(route) => {
            bail!("access denied; redirected to {}", route.path())
        }
    }
}

fn print_stats(store: &DomainStore, session: &Session) {
    let now = store.now();
    let stats = store.get_stats_at(now);
    println!(
        "tasks total={} completed={} pending={}",
        stats.total_tasks, stats.completed_tasks, stats.pending_tasks
    );
    println!(
        "users total={} active={}",
        stats.total_users, stats.active_users
    );
    println!(
        "notifications total={} unread={} upcoming_events={}",
        stats.total_notifications, stats.unread_notifications, stats.upcoming_events
    );

    let activity = user_activity(store, &session.id, now);
    println!(
        "me tasks={} completed={} rate={}% on_track={} events={} documents={}",
        activity.tasks,
        activity.completed_tasks,
        activity.completion_rate_percent,
        activity.on_track_tasks,
        activity.events,
        activity.documents
    );

    let docs = document_stats(store, &session.id, now);
    println!(
        "documents total={} mine={} size={} recent={}",
        docs.total,
        docs.mine,
        format_file_size(docs.total_size_bytes),
        docs.recent_uploads
    );

    let mine = notifications_for(store, &session.id);
    println!(
        "notification kinds info={} success={} warning={} error={}",
        count_by_kind(&mine, NotificationKind::Info),
        count_by_kind(&mine, NotificationKind::Success),
        count_by_kind(&mine, NotificationKind::Warning),
        count_by_kind(&mine, NotificationKind::Error)
    );
    for notification in unread_for(store, &session.id) {
        println!("unread: {}: {}", notification.title, notification.message);
    }
    for event in upcoming_events(store, now, UPCOMING_EVENTS_LIMIT) {
        println!(
            "upcoming: {} {}",
            format_local_timestamp(event.date),
            event.title
        );
    }
}
