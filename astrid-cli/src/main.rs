//! astrid CLI: supportive chat plus profile, expense, task, and health
//! records. Config from env and optional CLI args; records are keyed by
//! ASTRID_USER.

use anyhow::{Context, Result};
use astrid_app::{build_components, run_chat, AppComponents, AppConfig};
use astrid_core::init_tracing;
use chrono::{Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use records::{
    expense_summary, health_day_counts, task_stats, tasks_due_within, Expense, ExpenseCategory,
    HealthEntry, HealthKind, Profile, ProfileStore, RecordStore, SchoolTask, TaskKind,
};
use responder::tips;
use tracing::info;

#[derive(Parser)]
#[command(name = "astrid")]
#[command(about = "Personal life organizer: chat, profile, expenses, tasks, health", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the supportive chat (type /quit to leave).
    Chat,
    /// Show or update your profile.
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Track spending.
    Expense {
        #[command(subcommand)]
        command: ExpenseCommands,
    },
    /// Track school tasks and progress.
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Log health journal entries.
    Health {
        #[command(subcommand)]
        command: HealthCommands,
    },
    /// Print self-help tips, general or for a topic (anxiety, depression,
    /// stress, sleep, relationships, self-esteem).
    Tips {
        #[arg(short, long)]
        topic: Option<String>,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Create or overwrite the profile (upsert by user id).
    Set {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        age: Option<u8>,
        #[arg(short, long)]
        degree: Option<String>,
        /// Expected graduation date, YYYY-MM-DD.
        #[arg(short, long)]
        graduation: Option<NaiveDate>,
    },
    /// Print the stored profile.
    Show,
}

#[derive(Subcommand)]
enum ExpenseCommands {
    /// Record an expense.
    Add {
        /// Category label, e.g. "food", "travel", "bills".
        #[arg(short, long)]
        category: String,
        #[arg(short, long)]
        description: String,
        #[arg(short, long)]
        amount: f64,
        /// Day the money was spent, YYYY-MM-DD; defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List recent expenses, newest first.
    List {
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Totals, per-category breakdown for a month, and monthly trend.
    Summary {
        /// Month as YYYY-MM; defaults to the current month.
        #[arg(short, long)]
        month: Option<String>,
        /// Starting balance the total is subtracted from.
        #[arg(short, long, default_value = "0")]
        balance: f64,
    },
}

#[derive(Subcommand)]
enum TaskCommands {
    /// Add a school task at 0% progress.
    Add {
        #[arg(short, long)]
        title: String,
        /// Due date, YYYY-MM-DD.
        #[arg(long)]
        due: NaiveDate,
        /// assignment, midterm, final, project, or other.
        #[arg(short, long, default_value = "assignment")]
        kind: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// List tasks with progress, newest first, plus summary stats.
    List,
    /// Update a task's completion percentage.
    Progress {
        #[arg(long)]
        id: String,
        #[arg(short, long)]
        percent: u8,
    },
}

#[derive(Subcommand)]
enum HealthCommands {
    /// Log an entry: food, meditation, or activity.
    Log {
        #[arg(short, long)]
        kind: String,
        /// Entry text, e.g. "Oatmeal with berries" or "20 minutes".
        #[arg(short, long)]
        value: String,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Per-kind entry counts for today.
    Today,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load().context("Load config from env")?;
    config.validate()?;

    // File-only logging keeps tables and the chat prompt clean.
    init_tracing(&config.log_file, false).context("Initialize logging")?;
    info!(
        user_id = %config.user_id,
        command = command_name(&cli.command),
        "Running command"
    );

    match cli.command {
        Commands::Chat => run_chat(&config).await,
        Commands::Profile { command } => {
            let components = build_components(&config).await?;
            handle_profile(command, &config, &components).await
        }
        Commands::Expense { command } => {
            let components = build_components(&config).await?;
            handle_expense(command, &config, &components).await
        }
        Commands::Task { command } => {
            let components = build_components(&config).await?;
            handle_task(command, &config, &components).await
        }
        Commands::Health { command } => {
            let components = build_components(&config).await?;
            handle_health(command, &config, &components).await
        }
        Commands::Tips { topic } => handle_tips(topic),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Chat => "chat",
        Commands::Profile { .. } => "profile",
        Commands::Expense { .. } => "expense",
        Commands::Task { .. } => "task",
        Commands::Health { .. } => "health",
        Commands::Tips { .. } => "tips",
    }
}

async fn handle_profile(
    command: ProfileCommands,
    config: &AppConfig,
    components: &AppComponents,
) -> Result<()> {
    match command {
        ProfileCommands::Set {
            name,
            email,
            age,
            degree,
            graduation,
        } => {
            let mut profile = Profile::new(&config.user_id, name);
            profile.email = email;
            profile.age = age;
            profile.degree_program = degree;
            profile.expected_graduation = graduation;
            components
                .profiles
                .upsert(&profile)
                .await
                .context("Save profile")?;
            println!("Profile saved for {}.", config.user_id);
        }
        ProfileCommands::Show => {
            match components.profiles.get(&config.user_id).await? {
                Some(profile) => {
                    println!("{:<22} {}", "name", profile.name);
                    println!("{:<22} {}", "email", profile.email.as_deref().unwrap_or("-"));
                    let age = profile.age.map(|a| a.to_string());
                    println!("{:<22} {}", "age", age.as_deref().unwrap_or("-"));
                    println!(
                        "{:<22} {}",
                        "degree program",
                        profile.degree_program.as_deref().unwrap_or("-")
                    );
                    let graduation = profile.expected_graduation.map(|d| d.to_string());
                    println!(
                        "{:<22} {}",
                        "expected graduation",
                        graduation.as_deref().unwrap_or("-")
                    );
                }
                None => println!("No profile yet. Run `astrid profile set --name ...`."),
            }
        }
    }
    Ok(())
}

async fn handle_expense(
    command: ExpenseCommands,
    config: &AppConfig,
    components: &AppComponents,
) -> Result<()> {
    match command {
        ExpenseCommands::Add {
            category,
            description,
            amount,
            date,
        } => {
            let category: ExpenseCategory =
                category.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            let incurred_on = date.unwrap_or_else(|| Local::now().date_naive());
            let expense = Expense::new(&config.user_id, category, description, amount, incurred_on);
            components.expenses.add(&expense).await.context("Save expense")?;
            println!("Recorded {:.2} under {} on {}.", amount, category, incurred_on);
        }
        ExpenseCommands::List { limit } => {
            let expenses = components.expenses.list_by_user(&config.user_id).await?;
            if expenses.is_empty() {
                println!("No expenses recorded.");
                return Ok(());
            }
            println!(
                "{:<36} {:<12} {:<18} {:>10}  {}",
                "id", "date", "category", "amount", "description"
            );
            println!("{}", "-".repeat(100));
            for expense in expenses.iter().take(limit) {
                println!(
                    "{:<36} {:<12} {:<18} {:>10.2}  {}",
                    expense.id,
                    expense.incurred_on,
                    expense.category.as_str(),
                    expense.amount,
                    expense.description
                );
            }
        }
        ExpenseCommands::Summary { month, balance } => {
            let month =
                month.unwrap_or_else(|| Local::now().date_naive().format("%Y-%m").to_string());
            let expenses = components.expenses.list_by_user(&config.user_id).await?;
            let summary = expense_summary(&expenses, balance, &month);

            println!("Total spent: {:.2}", summary.total_spent);
            println!("Balance:     {:.2}", summary.balance);
            println!("\n{} by category:", month);
            if summary.month_by_category.is_empty() {
                println!("  (no spending this month)");
            }
            for (category, total) in &summary.month_by_category {
                println!("  {:<18} {:>10.2}", category.as_str(), total);
            }
            println!("\nMonthly trend:");
            for (trend_month, total) in &summary.monthly_trend {
                println!("  {:<8} {:>10.2}", trend_month, total);
            }
        }
    }
    Ok(())
}

async fn handle_task(
    command: TaskCommands,
    config: &AppConfig,
    components: &AppComponents,
) -> Result<()> {
    match command {
        TaskCommands::Add {
            title,
            due,
            kind,
            description,
        } => {
            let kind: TaskKind = kind.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            let task = SchoolTask::new(&config.user_id, title, description, due, kind);
            let id = task.id.clone();
            components.tasks.add(&task).await.context("Save task")?;
            println!("Added {} due {} (id {}).", kind, due, id);
        }
        TaskCommands::List => {
            let tasks = components.tasks.list_by_user(&config.user_id).await?;
            if tasks.is_empty() {
                println!("No tasks yet.");
                return Ok(());
            }
            println!(
                "{:<36} {:<12} {:<12} {:>9}  {}",
                "id", "due", "kind", "progress", "title"
            );
            println!("{}", "-".repeat(100));
            for task in &tasks {
                println!(
                    "{:<36} {:<12} {:<12} {:>8}%  {}",
                    task.id, task.due_date, task.kind.as_str(), task.progress, task.title
                );
            }
            let stats = task_stats(&tasks);
            println!(
                "\n{} task(s): {} completed, {} in progress, {}% average progress.",
                stats.total, stats.completed, stats.in_progress, stats.average_progress
            );
            let upcoming = tasks_due_within(&tasks, Local::now().date_naive(), 7);
            if !upcoming.is_empty() {
                println!("Due within 7 days:");
                for task in &upcoming {
                    println!("  {}  {} ({}%)", task.due_date, task.title, task.progress);
                }
            }
        }
        TaskCommands::Progress { id, percent } => {
            let mut task = components
                .tasks
                .get(&id)
                .await?
                .with_context(|| format!("No task with id {}", id))?;
            task.set_progress(percent);
            components.tasks.update(&task).await.context("Update task")?;
            println!("{} is now at {}%.", task.title, task.progress);
        }
    }
    Ok(())
}

async fn handle_health(
    command: HealthCommands,
    config: &AppConfig,
    components: &AppComponents,
) -> Result<()> {
    match command {
        HealthCommands::Log { kind, value, notes } => {
            let kind: HealthKind = kind.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            let entry = HealthEntry::new(&config.user_id, kind, value, notes);
            components.health.add(&entry).await.context("Save health entry")?;
            println!("Logged {} entry.", kind);
        }
        HealthCommands::Today => {
            let entries = components.health.list_by_user(&config.user_id).await?;
            // Entries bucket by the UTC day they were recorded.
            let today = Utc::now().date_naive();
            let counts = health_day_counts(&entries, today);
            println!("Today ({}):", today);
            println!("  {:<12} {}", "food", counts.food);
            println!("  {:<12} {}", "meditation", counts.meditation);
            println!("  {:<12} {}", "activity", counts.activity);
            println!("  {:<12} {}", "total", counts.total());
        }
    }
    Ok(())
}

/// Prints a topic's tip catalog, or the general wellness pool with no topic.
fn handle_tips(topic: Option<String>) -> Result<()> {
    match topic {
        Some(topic) => {
            let category = tips::category_by_id(&topic.to_lowercase()).with_context(|| {
                let ids: Vec<&str> = tips::TIP_CATEGORIES.iter().map(|c| c.id).collect();
                format!("Unknown topic '{}'. Try one of: {}", topic, ids.join(", "))
            })?;
            println!("{}:", category.name);
            for tip in category.tips {
                println!("  - {}", tip);
            }
        }
        None => {
            println!("General wellness:");
            for tip in tips::GENERAL_TIPS {
                println!("  - {}", tip);
            }
        }
    }
    Ok(())
}
