use clap::Parser;

#[derive(Parser)]
#[command(name = "tessel")]
#[command(about = "Generate a tmux command line for a grid of panes")]
#[command(version)]
pub struct Cli {
    /// Tmux session name
    #[arg(value_name = "SESSION")]
    pub session: String,

    /// Layout descriptor: one digit (1-9) per pane group, optionally
    /// suffixed with an orientation keyword (e.g. "32" or "22ltr")
    #[arg(value_name = "LAYOUT")]
    pub layout: String,

    /// Shell command per pane, in order; missing panes run a blank shell
    #[arg(value_name = "COMMAND")]
    pub commands: Vec<String>,

    /// Window options as a JSON object, e.g. '{"mouse": "on"}'
    #[arg(short = 'O', long = "options", value_name = "JSON")]
    pub options: Option<String>,

    /// Group orientation: "ttb" (top-to-bottom, default) or "ltr"
    /// (left-to-right); overrides any layout suffix
    #[arg(short = 'o', long = "orientation", value_name = "ORIENTATION")]
    pub orientation: Option<String>,
}
