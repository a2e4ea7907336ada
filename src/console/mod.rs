//! Interactive numbered menus over a line-oriented reader and writer.
//!
//! The console only orchestrates: every decision about data lives in
//! `services`. Any `MarketError` is reported to the user and control goes
//! back to the menu that issued the call.

mod menus;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::db::DbPool;
use crate::error::{MarketError, Result};
use crate::AppState;

pub struct Console<R, W> {
    db: DbPool,
    export_dir: PathBuf,
    input: R,
    output: W,
    /// Set once the input reaches end of file
    closed: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(state: &AppState, input: R, output: W) -> Self {
        Self {
            db: state.db.clone(),
            export_dir: state.config.export.dir.clone(),
            input,
            output,
            closed: false,
        }
    }

    /// Give back the writer, e.g. to inspect a captured transcript
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print `label` and read one trimmed line; `None` once input is exhausted
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.closed = true;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Show a numbered menu and return the raw choice
    fn menu(&mut self, title: &str, options: &[&str]) -> Result<Option<String>> {
        self.say("")?;
        self.say(title)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, option)?;
        }
        self.prompt("Enter your choice: ")
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.prompt(&format!("{} (y/n): ", question))?;
        Ok(matches!(answer.as_deref(), Some("y" | "Y" | "yes" | "Yes")))
    }

    /// Report an error from a service call; write failures still propagate
    fn report(&mut self, err: MarketError) -> Result<()> {
        if !err.is_recoverable() {
            tracing::error!(error = %err, "Operation failed");
        }
        self.say(&format!("Error: {}", err))
    }

    /// Run until the user exits or input ends
    pub async fn run(&mut self) -> Result<()> {
        self.say("Welcome to Forks & Folks!")?;
        while !self.closed {
            let Some(choice) = self.menu("Main Menu", &["Signup", "Login", "Exit"])? else {
                break;
            };
            match choice.as_str() {
                "1" => self.signup().await?,
                "2" => self.login().await?,
                "3" => break,
                other => self.report(MarketError::InvalidChoice(other.to_string()))?,
            }
        }
        self.say("Goodbye!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::db::test_support::seeded_db;
    use crate::services::{accounts, catalog, hiring};
    use std::io::Cursor;

    async fn run_script(state: &AppState, script: &str) -> String {
        let mut console = Console::new(state, Cursor::new(script.to_string()), Vec::new());
        console.run().await.unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    fn state_with(db: DbPool, export_dir: PathBuf) -> AppState {
        let mut config = Config::default();
        config.export.dir = export_dir;
        AppState::new(config, db)
    }

    #[tokio::test]
    async fn test_exit_immediately() {
        let (dir, db) = seeded_db().await;
        let state = state_with(db, dir.path().to_path_buf());
        let out = run_script(&state, "3\n").await;
        assert!(out.contains("1. Signup"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[tokio::test]
    async fn test_end_of_input_exits() {
        let (dir, db) = seeded_db().await;
        let state = state_with(db, dir.path().to_path_buf());
        let out = run_script(&state, "2\nGabriella\n").await;
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[tokio::test]
    async fn test_invalid_menu_choice_reprompts() {
        let (dir, db) = seeded_db().await;
        let state = state_with(db, dir.path().to_path_buf());
        let out = run_script(&state, "banana\n3\n").await;
        assert!(out.contains("Error: Invalid choice 'banana'"));
        assert_eq!(out.matches("Main Menu").count(), 2);
    }

    #[tokio::test]
    async fn test_signup_then_login_as_chef() {
        let (dir, db) = seeded_db().await;
        let state = state_with(db.clone(), dir.path().to_path_buf());
        let script = "1\nKenji\nsecret\n1\nRamen and izakaya\n\
                      2\nKenji\nsecret\n3\n6\n3\n";
        let out = run_script(&state, script).await;

        assert!(out.contains("Signup successful"));
        assert!(out.contains("Welcome, Kenji (Chef)"));
        assert!(out.contains("Ramen and izakaya"));
        assert_eq!(
            hiring::view_portfolio(&db, "Kenji").await.unwrap(),
            "Ramen and izakaya"
        );
    }

    #[tokio::test]
    async fn test_duplicate_signup_is_reported() {
        let (dir, db) = seeded_db().await;
        let state = state_with(db, dir.path().to_path_buf());
        let out = run_script(&state, "1\nGabriella\nx\n2\n3\n").await;
        assert!(out.contains("Error: Username 'Gabriella' is already taken"));
    }

    #[tokio::test]
    async fn test_wrong_password_is_reported() {
        let (dir, db) = seeded_db().await;
        let state = state_with(db, dir.path().to_path_buf());
        let out = run_script(&state, "2\nSanthiana\nwrong\n3\n").await;
        assert!(out.contains("Error: Invalid username or password"));
    }

    #[tokio::test]
    async fn test_consumer_hires_chef() {
        let (dir, db) = seeded_db().await;
        let state = state_with(db.clone(), dir.path().to_path_buf());
        let script = "2\nGabriella\npass\n3\n3\nDinner for two\n5\n3\n";
        let out = run_script(&state, script).await;

        assert!(out.contains("3. Amara"));
        assert!(out.contains("Hire request sent"));
        let notifications = hiring::list_hire_notifications(&db, "Amara").await.unwrap();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].consumer_username, "Gabriella");
        assert_eq!(notifications[0].message.as_deref(), Some("Dinner for two"));
    }

    #[tokio::test]
    async fn test_consumer_browses_and_saves_recipe() {
        let (dir, db) = seeded_db().await;
        let state = state_with(db, dir.path().to_path_buf());
        let script = "2\nGabriella\npass\n1\n9\n2\ny\n5\n3\n";
        let out = run_script(&state, script).await;

        assert!(out.contains("1. Jerk Chicken"));
        assert!(out.contains("Error: Invalid choice '9'"));
        assert!(out.contains("Brown the chicken and lardons"));
        assert!(dir.path().join("Coq_au_Vin_recipe.txt").exists());
    }

    #[tokio::test]
    async fn test_consumer_saves_ingredient_location() {
        let (dir, db) = seeded_db().await;
        let state = state_with(db, dir.path().to_path_buf());
        let script = "2\nTobias\npass\n2\n3\ny\n5\n3\n";
        let out = run_script(&state, script).await;

        assert!(out.contains("Greenleaf Herb Garden"));
        assert!(dir.path().join("Fresh_Thyme_location.txt").exists());
    }

    #[tokio::test]
    async fn test_chef_creates_recipe() {
        let (dir, db) = seeded_db().await;
        let state = state_with(db.clone(), dir.path().to_path_buf());
        let script = "2\nSanthiana\npass\n1\nTest Dish\na,b\nstep1\n2\n6\n3\n";
        let out = run_script(&state, script).await;

        assert!(out.contains("Recipe created"));
        let recipes = catalog::list_recipes(&db).await.unwrap();
        assert_eq!(recipes.last().unwrap().name, "Test Dish");
        assert!(out.contains("2. Test Dish"));
    }

    #[tokio::test]
    async fn test_chef_answers_notification() {
        let (dir, db) = seeded_db().await;
        let hire_id = hiring::hire_chef(&db, "Gabriella", 3, None).await.unwrap();
        let state = state_with(db.clone(), dir.path().to_path_buf());
        let script = format!("2\nAmara\npass\n5\n{}\n1\n6\n3\n", hire_id);
        let out = run_script(&state, &script).await;

        assert!(out.contains("Gabriella"));
        assert!(out.contains("Request marked accepted"));
        let sent = hiring::list_sent_hires(&db, "Gabriella").await.unwrap();
        assert_eq!(sent[0].status().to_string(), "accepted");
    }

    #[tokio::test]
    async fn test_chef_edits_portfolio() {
        let (dir, db) = seeded_db().await;
        let state = state_with(db.clone(), dir.path().to_path_buf());
        let script = "2\nMarcus\npass\n4\nSupper club every Friday\n6\n3\n";
        run_script(&state, script).await;

        let user = accounts::find_user(&db, "Marcus").await.unwrap();
        assert_eq!(user.role, "Chef");
        assert_eq!(
            hiring::view_portfolio(&db, "Marcus").await.unwrap(),
            "Supper club every Friday"
        );
    }
}
