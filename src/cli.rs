use clap::Parser;

#[derive(Parser)]
#[command(name = "ptcgen", about = "Pokemon Trainer Club account creator")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Username for the new account (defaults to a random string)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password for the new account (defaults to a random string)
    #[arg(short, long)]
    pub password: Option<String>,

    /// Email for the new account (defaults to a random email-like string)
    #[arg(short, long)]
    pub email: Option<String>,

    /// Add the username as a tag to the email (i.e. addr+tag@mail.com)
    #[arg(long)]
    pub email_tag: bool,
}
