use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use jyotish_core::{UserContext, ZodiacSign};

#[derive(Parser)]
#[command(name = "jyotish")]
#[command(version)]
#[command(about = "Vedic astrology guidance, birth charts and chat")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config file to ~/.jyotish/jyotish.json
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Print version information
    Version,

    /// Show the zodiac profile for a sign or birth date
    Zodiac {
        sign: Option<ZodiacSign>,

        /// Derive the sign from a birth date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "sign")]
        dob: Option<NaiveDate>,
    },

    /// Generate a birth chart
    Chart {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Daily guidance for the profile's sign
    Guidance {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Send one chat message and print the reply
    Chat {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Message text
        #[arg(short, long)]
        message: String,
    },

    /// Show or clear stored chat history
    History {
        /// User id (defaults to anonymous)
        #[arg(long)]
        user: Option<String>,

        /// Maximum messages to show
        #[arg(long)]
        limit: Option<usize>,

        /// Only messages older than this RFC 3339 timestamp
        #[arg(long)]
        before: Option<DateTime<Utc>>,

        /// Delete the user's history instead of listing it
        #[arg(long, conflicts_with_all = ["limit", "before"])]
        clear: bool,
    },

    /// Query the knowledge base
    Search {
        query: String,

        #[arg(short, long, default_value_t = 3)]
        limit: usize,
    },

    /// Daily horoscope for a sign
    Horoscope {
        sign: ZodiacSign,

        /// Defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Panchang for a date
    Panchang {
        /// Defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

/// Birth details shared by the profile-driven commands
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    #[arg(long)]
    pub name: String,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub dob: NaiveDate,

    /// Time of birth (HH:MM, 24-hour)
    #[arg(long)]
    pub time: Option<String>,

    /// Place of birth
    #[arg(long, default_value = "")]
    pub place: String,

    /// Stable user id for chat history and remembered context
    #[arg(long)]
    pub user: Option<String>,
}

impl ProfileArgs {
    pub fn to_user(&self) -> anyhow::Result<UserContext> {
        let mut user = UserContext::new(&self.name, self.dob, &self.place)?;
        if let Some(time) = &self.time {
            user = user.with_time_of_birth(time)?;
        }
        if let Some(id) = &self.user {
            user = user.with_id(id);
        }
        Ok(user)
    }
}
