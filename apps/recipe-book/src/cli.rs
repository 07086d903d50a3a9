//! Command line definitions for the recipe book.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use recipe_core::{RecipeDraft, DEFAULT_IMAGE};

#[derive(Debug, Parser)]
#[command(
    name = "recipe-book",
    version,
    about = "Browse and share recipes from a recipe API",
    long_about = "Browse and share recipes from a recipe API.\n\n\
                  Reads recipe-book.toml from the platform config directory \
                  unless --config is given. RECIPE_API_URL overrides the file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a recipe-book.toml config file.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the recipe API (overrides config and environment).
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Start the session logged in (required to add or delete recipes).
    #[arg(long, global = true)]
    pub login: bool,

    /// Show debug logs on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all recipes.
    List,

    /// Show one recipe with its ingredients and preparation.
    Show {
        /// Recipe id (the `_id` shown by `list`).
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Add a recipe, then show the updated list.
    Add(AddArgs),

    /// Delete a recipe, then show the updated list.
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Image file name already present in the server's img/ directory.
    #[arg(long, default_value = DEFAULT_IMAGE)]
    pub image: String,

    /// Ingredient line (repeat for each ingredient, in order).
    #[arg(long = "ingredient", value_name = "TEXT")]
    pub ingredients: Vec<String>,

    /// Preparation step (repeat for each step, in order).
    #[arg(long = "step", value_name = "TEXT")]
    pub steps: Vec<String>,
}

impl AddArgs {
    /// The form record these arguments fill in.
    pub fn to_draft(&self) -> RecipeDraft {
        let draft = RecipeDraft::new(&self.title)
            .with_description(&self.description)
            .with_image(&self.image);

        let draft = self
            .ingredients
            .iter()
            .fold(draft, |draft, ingredient| draft.with_ingredient(ingredient));

        self.steps.iter().fold(draft, |draft, step| draft.with_step(step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_globals() {
        let cli = Cli::try_parse_from([
            "recipe-book",
            "list",
            "--api-url",
            "http://10.0.0.5:5000",
            "-v",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::List));
        assert_eq!(cli.api_url.as_deref(), Some("http://10.0.0.5:5000"));
        assert!(cli.verbose);
        assert!(!cli.login);
    }

    #[test]
    fn test_parse_add_builds_draft() {
        let cli = Cli::try_parse_from([
            "recipe-book",
            "--login",
            "add",
            "--title",
            "Toast",
            "--ingredient",
            "bread",
            "--ingredient",
            "butter",
            "--step",
            "Toast the bread",
        ])
        .unwrap();

        let Command::Add(args) = cli.command else {
            panic!("expected add");
        };
        let draft = args.to_draft();
        assert_eq!(draft.title, "Toast");
        assert_eq!(draft.image, DEFAULT_IMAGE);
        assert_eq!(draft.ingredients, vec!["bread".to_string(), "butter".to_string()]);
        assert_eq!(draft.preparation.len(), 1);
        assert!(cli.login);
    }

    #[test]
    fn test_show_requires_id() {
        assert!(Cli::try_parse_from(["recipe-book", "show"]).is_err());
    }
}
