use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "anilist", bin_name = "anilist", version)]
#[command(about = "Keep track of the anime you are watching", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add a new anime
    Add {
        /// Name of the anime (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// watching, towatch or finished
        #[arg(short, long)]
        status: Option<String>,

        /// Last watched episode
        #[arg(short, long)]
        episode: Option<String>,

        /// Genre, repeatable
        #[arg(short, long = "genre")]
        genres: Vec<String>,
    },

    /// Delete the anime at INDEX
    #[command(alias = "rm")]
    Delete { index: String },

    /// Edit one or more fields of the anime at INDEX
    Edit {
        index: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        status: Option<String>,

        #[arg(short, long)]
        episode: Option<String>,
    },

    /// Rename the anime at INDEX
    Rename {
        index: String,

        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Set the watch status of the anime at INDEX
    Status { index: String, status: String },

    /// Set the last watched episode of the anime at INDEX
    Update { index: String, episode: String },

    /// Add or delete genres of the anime at INDEX
    Genre {
        index: String,

        /// add or delete
        operation: String,

        #[arg(required = true, num_args = 1..)]
        genres: Vec<String>,
    },

    /// Show anime whose name contains any of the keywords
    Find {
        #[arg(required = true, num_args = 1..)]
        keywords: Vec<String>,
    },

    /// List anime, optionally filtered by genre and status
    #[command(alias = "ls")]
    List {
        /// Genre, repeatable (matches any)
        #[arg(short, long = "genre")]
        genres: Vec<String>,

        #[arg(short, long)]
        status: Option<String>,
    },

    /// Delete every anime
    Clear,

    /// Show or change configuration (anilist config [KEY [VALUE]])
    Config {
        key: Option<String>,
        value: Option<String>,
    },

    /// Start an interactive session that keeps the displayed list between commands
    Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Cli {
        let words = shell_words::split(line).unwrap();
        Cli::try_parse_from(std::iter::once("anilist".to_string()).chain(words)).unwrap()
    }

    #[test]
    fn parses_add_with_options() {
        let cli = parse("add Cowboy Bebop -s finished -e 26 -g Sci-Fi -g Space");
        assert_eq!(
            cli.command,
            Some(Commands::Add {
                name: vec!["Cowboy".into(), "Bebop".into()],
                status: Some("finished".into()),
                episode: Some("26".into()),
                genres: vec!["Sci-Fi".into(), "Space".into()],
            })
        );
    }

    #[test]
    fn parses_quoted_genres() {
        let cli = parse("genre 2 add \"Dark Fantasy\" Action");
        assert_eq!(
            cli.command,
            Some(Commands::Genre {
                index: "2".into(),
                operation: "add".into(),
                genres: vec!["Dark Fantasy".into(), "Action".into()],
            })
        );
    }

    #[test]
    fn no_command_is_allowed() {
        assert_eq!(parse("").command, None);
        assert!(parse("-v").verbose);
    }

    #[test]
    fn genre_requires_at_least_one_genre() {
        assert!(Cli::try_parse_from(["anilist", "genre", "1", "add"]).is_err());
        assert!(Cli::try_parse_from(["anilist", "find"]).is_err());
    }

    #[test]
    fn aliases() {
        assert_eq!(
            parse("ls -s watching").command,
            Some(Commands::List {
                genres: vec![],
                status: Some("watching".into()),
            })
        );
        assert_eq!(
            parse("rm 3").command,
            Some(Commands::Delete { index: "3".into() })
        );
    }
}
