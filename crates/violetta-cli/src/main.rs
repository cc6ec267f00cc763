use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use violetta_application::{NextAction, PhoneChannel, Provider};
use violetta_core::checkin::{Boundary, BoundaryType, CheckInContext, Safety};
use violetta_core::contact::ContactPatch;
use violetta_core::exercise::BreathMode;
use violetta_core::onboarding::{Frequency, OnboardingGoal, Reminder};
use violetta_core::session::{GrammaticalGender, PronounType};
use violetta_infrastructure::ConfigService;

mod commands;

use commands::App;

#[derive(Parser)]
#[command(name = "violetta")]
#[command(about = "Violetta - journal, check-ins and trusted contacts kept on this device", long_about = None)]
struct Cli {
    /// Data directory (overrides $VIOLETTA_DATA_DIR and config.toml)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (defaults to ~/.config/violetta/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write every store to a backup file
    Export {
        /// Target file or directory (defaults to the downloads folder)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Restore stores from a backup file
    Import { file: PathBuf },
    /// Delete all local data
    Reset {
        /// Skip the confirmation check
        #[arg(long)]
        yes: bool,
    },
    /// Streaks, activity and badges
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Journal entries
    Journal {
        #[command(subcommand)]
        action: JournalAction,
    },
    /// Personal goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },
    /// Emergency contacts and resources
    Contact {
        #[command(subcommand)]
        action: ContactAction,
    },
    /// People in your support network
    Network {
        #[command(subcommand)]
        action: NetworkAction,
    },
    /// Record a mood check-in
    Checkin {
        /// Mood label, e.g. "happy", "sad", "anxious"
        #[arg(long)]
        mood: Option<String>,
        /// partner, family, work, friends, public, other
        #[arg(long)]
        context: Option<CheckInContext>,
        /// no, unsure, yes
        #[arg(long, default_value = "no")]
        boundary: Boundary,
        /// Comma-separated boundary kinds
        #[arg(long, value_delimiter = ',')]
        boundary_types: Vec<BoundaryType>,
        /// safe, unsure, unsafe
        #[arg(long)]
        safety: Option<Safety>,
        /// journal, help, nothing
        #[arg(long, default_value = "nothing")]
        next: NextAction,
    },
    /// List recorded check-ins
    Checkins,
    /// Breathing exercise preferences
    Exercise {
        #[command(subcommand)]
        action: ExerciseAction,
    },
    /// Chat with the companion
    Chat {
        #[command(subcommand)]
        action: ChatAction,
    },
    /// Sign in, register and sign out
    Login {
        #[command(subcommand)]
        action: LoginAction,
    },
    /// Name, email and pronouns
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Onboarding answers
    Onboarding {
        #[command(subcommand)]
        action: OnboardingAction,
    },
    /// The message sent to the primary contact
    HelpMessage {
        #[command(subcommand)]
        action: HelpAction,
    },
    /// The first-launch disclaimer
    Disclaimer {
        #[command(subcommand)]
        action: DisclaimerAction,
    },
}

#[derive(Subcommand)]
enum JournalAction {
    /// Write a new entry
    Add {
        text: String,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long)]
        emoji: Option<String>,
        /// 1 (low) to 5 (great)
        #[arg(long)]
        mood: Option<u8>,
    },
    /// Rewrite an existing entry
    Edit {
        id: String,
        text: String,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long)]
        emoji: Option<String>,
        #[arg(long)]
        mood: Option<u8>,
    },
    List,
    Remove { id: String },
    Search { query: String },
}

#[derive(Subcommand)]
enum GoalAction {
    Add { text: String },
    List,
    Remove { id: String },
    /// Show suggested goals
    Suggest,
}

#[derive(Subcommand)]
enum ContactAction {
    Add {
        name: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        primary: bool,
    },
    /// Change a contact; an empty value clears phone or notes
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    List,
    /// Make a contact the primary one
    Primary { id: String },
    Remove { id: String },
    /// Add a resource link
    AddResource { label: String, url: String },
    RemoveResource { id: String },
    /// Let trusted contacts see your status
    Share {
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
}

#[derive(Subcommand)]
enum NetworkAction {
    Add {
        name: String,
        #[arg(long)]
        phone: Option<String>,
    },
    List,
    Remove { id: String },
}

#[derive(Subcommand)]
enum ExerciseAction {
    /// box44 or 478
    Mode { mode: BreathMode },
    /// Session length, clamped to 1..=10
    Minutes {
        #[arg(allow_hyphen_values = true)]
        minutes: i64,
    },
    /// Run a breathing session in the terminal
    Run,
    /// Mark a session as completed now
    Done,
    Show,
}

#[derive(Subcommand)]
enum ChatAction {
    Send { text: String },
    History,
    Clear,
}

#[derive(Subcommand)]
enum LoginAction {
    /// Send a sign-in code by email
    Email { email: String },
    /// Send a sign-in code by SMS or WhatsApp
    Phone {
        phone: String,
        #[arg(long, default_value = "sms")]
        channel: PhoneChannel,
    },
    /// Enter the code you received
    Code { code: String },
    /// Create an account
    Register {
        name: String,
        #[arg(long)]
        email: Option<String>,
    },
    /// Continue with google, apple or microsoft
    Provider { provider: Provider },
    /// Finish onboarding for the signed-in user
    Onboarded,
    Logout,
    Status,
}

#[derive(Subcommand)]
enum ProfileAction {
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// ella, el, elle or otro
    Pronouns {
        kind: PronounType,
        /// Display text when choosing `otro`
        #[arg(long)]
        custom: Option<String>,
        /// f, m or x; defaults to the pronoun set's own
        #[arg(long)]
        gender: Option<GrammaticalGender>,
    },
    Show,
}

#[derive(Subcommand)]
enum OnboardingAction {
    Set {
        #[arg(long)]
        goal: Option<OnboardingGoal>,
        #[arg(long)]
        frequency: Option<Frequency>,
        #[arg(long)]
        reminder: Option<Reminder>,
    },
    Show,
    Reset,
}

#[derive(Subcommand)]
enum HelpAction {
    Show,
    /// Replace the template; `{name}` becomes the contact's name
    Set { text: String },
}

#[derive(Subcommand)]
enum DisclaimerAction {
    Accept,
    Status,
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    let config = config_service.get_config();
    init_tracing(&config.log_level);

    let app = App::open(cli.data_dir, &config)?;

    match cli.command {
        Commands::Export { out } => commands::backup::export(&app, out)?,
        Commands::Import { file } => commands::backup::import(&app, &file)?,
        Commands::Reset { yes } => commands::backup::reset(&app, yes)?,
        Commands::Stats { json } => commands::stats::show(&app, json)?,
        Commands::Journal { action } => match action {
            JournalAction::Add {
                text,
                title,
                emoji,
                mood,
            } => commands::journal::save(&app, None, title, text, emoji, mood).await?,
            JournalAction::Edit {
                id,
                text,
                title,
                emoji,
                mood,
            } => commands::journal::save(&app, Some(&id), title, text, emoji, mood).await?,
            JournalAction::List => commands::journal::list(&app),
            JournalAction::Remove { id } => commands::journal::remove(&app, &id).await?,
            JournalAction::Search { query } => commands::journal::search(&app, &query),
        },
        Commands::Goal { action } => match action {
            GoalAction::Add { text } => commands::goal::add(&app, &text)?,
            GoalAction::List => commands::goal::list(&app),
            GoalAction::Remove { id } => commands::goal::remove(&app, &id)?,
            GoalAction::Suggest => commands::goal::suggest(),
        },
        Commands::Contact { action } => match action {
            ContactAction::Add {
                name,
                phone,
                notes,
                primary,
            } => commands::contact::add(&app, name, phone, notes, primary)?,
            ContactAction::Edit {
                id,
                name,
                phone,
                notes,
            } => {
                let patch = ContactPatch {
                    name,
                    phone,
                    notes,
                    is_primary: None,
                };
                commands::contact::edit(&app, &id, patch)?
            }
            ContactAction::List => commands::contact::list(&app),
            ContactAction::Primary { id } => commands::contact::set_primary(&app, &id)?,
            ContactAction::Remove { id } => commands::contact::remove(&app, &id)?,
            ContactAction::AddResource { label, url } => {
                commands::contact::add_resource(&app, &label, &url)?
            }
            ContactAction::RemoveResource { id } => commands::contact::remove_resource(&app, &id)?,
            ContactAction::Share { enabled } => commands::contact::share(&app, enabled),
        },
        Commands::Network { action } => match action {
            NetworkAction::Add { name, phone } => commands::network::add(&app, name, phone)?,
            NetworkAction::List => commands::network::list(&app),
            NetworkAction::Remove { id } => commands::network::remove(&app, &id)?,
        },
        Commands::Checkin {
            mood,
            context,
            boundary,
            boundary_types,
            safety,
            next,
        } => commands::checkin::record(&app, mood, context, boundary, boundary_types, safety, next),
        Commands::Checkins => commands::checkin::list(&app),
        Commands::Exercise { action } => match action {
            ExerciseAction::Mode { mode } => commands::exercise::set_mode(&app, mode),
            ExerciseAction::Minutes { minutes } => commands::exercise::set_minutes(&app, minutes),
            ExerciseAction::Run => commands::exercise::run(&app).await,
            ExerciseAction::Done => commands::exercise::done(&app),
            ExerciseAction::Show => commands::exercise::show(&app),
        },
        Commands::Chat { action } => match action {
            ChatAction::Send { text } => commands::chat::send(&app, &text).await?,
            ChatAction::History => commands::chat::history(&app),
            ChatAction::Clear => commands::chat::clear(&app).await,
        },
        Commands::Login { action } => match action {
            LoginAction::Email { email } => commands::login::email(&app, &email).await?,
            LoginAction::Phone { phone, channel } => {
                commands::login::phone(&app, &phone, channel).await?
            }
            LoginAction::Code { code } => commands::login::code(&app, &code).await?,
            LoginAction::Register { name, email } => {
                commands::login::register(&app, &name, email.as_deref()).await?
            }
            LoginAction::Provider { provider } => commands::login::provider(&app, provider).await,
            LoginAction::Onboarded => commands::login::onboarded(&app)?,
            LoginAction::Logout => commands::login::logout(&app),
            LoginAction::Status => commands::login::status(&app),
        },
        Commands::Profile { action } => match action {
            ProfileAction::Set { name, email } => {
                commands::profile::update(&app, name.as_deref(), email.as_deref())?
            }
            ProfileAction::Pronouns {
                kind,
                custom,
                gender,
            } => commands::profile::pronouns(&app, kind, custom, gender)?,
            ProfileAction::Show => commands::profile::show(&app),
        },
        Commands::Onboarding { action } => match action {
            OnboardingAction::Set {
                goal,
                frequency,
                reminder,
            } => commands::onboarding::set(&app, goal, frequency, reminder),
            OnboardingAction::Show => commands::onboarding::show(&app),
            OnboardingAction::Reset => commands::onboarding::reset(&app),
        },
        Commands::HelpMessage { action } => match action {
            HelpAction::Show => commands::help::show(&app),
            HelpAction::Set { text } => commands::help::set(&app, &text),
        },
        Commands::Disclaimer { action } => match action {
            DisclaimerAction::Accept => commands::disclaimer::accept(&app),
            DisclaimerAction::Status => commands::disclaimer::status(&app),
        },
    }

    Ok(())
}
