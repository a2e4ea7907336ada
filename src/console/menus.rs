use std::io::{BufRead, Write};

use super::Console;
use crate::db::{HireResponse, NewAccount, NewRecipe, Role, Session};
use crate::error::{MarketError, Result};
use crate::export;
use crate::services::{accounts, catalog, hiring};

const CONSUMER_MENU: [&str; 5] = [
    "Browse recipes",
    "Browse ingredients",
    "View and hire chefs",
    "My hire requests",
    "Logout",
];

const CHEF_MENU: [&str; 6] = [
    "Create recipe",
    "My recipes",
    "View portfolio",
    "Edit portfolio",
    "Hiring notifications",
    "Logout",
];

impl<R: BufRead, W: Write> Console<R, W> {
    pub(super) async fn signup(&mut self) -> Result<()> {
        let Some(username) = self.prompt("Username: ")? else {
            return Ok(());
        };
        let Some(password) = self.prompt("Password: ")? else {
            return Ok(());
        };
        let Some(choice) = self.menu("Select role", &["Chef", "Consumer"])? else {
            return Ok(());
        };
        let role = match choice.as_str() {
            "1" => Role::Chef,
            "2" => Role::Consumer,
            other => return self.report(MarketError::InvalidChoice(other.to_string())),
        };
        let portfolio = if role == Role::Chef {
            let Some(details) = self.prompt("Portfolio details: ")? else {
                return Ok(());
            };
            Some(details)
        } else {
            None
        };

        let account = NewAccount {
            username,
            password,
            role,
            portfolio,
        };
        match accounts::signup(&self.db, account).await {
            Ok(_) => self.say("Signup successful! You can now log in."),
            Err(e) => self.report(e),
        }
    }

    pub(super) async fn login(&mut self) -> Result<()> {
        let Some(username) = self.prompt("Username: ")? else {
            return Ok(());
        };
        let Some(password) = self.prompt("Password: ")? else {
            return Ok(());
        };

        let session = match accounts::login(&self.db, &username, &password).await {
            Ok(session) => session,
            Err(e) => return self.report(e),
        };
        self.say(&format!("Welcome, {} ({})", session.username, session.role))?;

        match session.role {
            Role::Consumer => self.consumer_menu(&session).await,
            Role::Chef => self.chef_menu(&session).await,
        }
    }

    async fn consumer_menu(&mut self, session: &Session) -> Result<()> {
        while !self.closed {
            let Some(choice) = self.menu("Consumer Menu", &CONSUMER_MENU)? else {
                break;
            };
            let outcome = match choice.as_str() {
                "1" => self.browse_recipes().await,
                "2" => self.browse_ingredients().await,
                "3" => self.hire_chef(session).await,
                "4" => self.sent_hires(session).await,
                "5" => break,
                other => Err(MarketError::InvalidChoice(other.to_string())),
            };
            self.settle(outcome)?;
        }
        Ok(())
    }

    async fn chef_menu(&mut self, session: &Session) -> Result<()> {
        while !self.closed {
            let Some(choice) = self.menu("Chef Menu", &CHEF_MENU)? else {
                break;
            };
            let outcome = match choice.as_str() {
                "1" => self.create_recipe(session).await,
                "2" => self.my_recipes(session).await,
                "3" => self.view_portfolio(session).await,
                "4" => self.edit_portfolio(session).await,
                "5" => self.notifications(session).await,
                "6" => break,
                other => Err(MarketError::InvalidChoice(other.to_string())),
            };
            self.settle(outcome)?;
        }
        Ok(())
    }

    /// Report a failed action and stay in the menu
    fn settle(&mut self, outcome: Result<()>) -> Result<()> {
        match outcome {
            Ok(()) => Ok(()),
            Err(e) => self.report(e),
        }
    }

    /// Ask for a 1-based position in `items` until it is valid.
    /// `None` means the user went back or input ended.
    fn pick<'a, T>(&mut self, items: &'a [T], label: &str) -> Result<Option<&'a T>> {
        loop {
            let Some(input) = self.prompt(label)? else {
                return Ok(None);
            };
            if input.is_empty() {
                return Ok(None);
            }
            match catalog::select(items, &input) {
                Ok(item) => return Ok(Some(item)),
                Err(e) => self.report(e)?,
            }
        }
    }

    async fn browse_recipes(&mut self) -> Result<()> {
        let recipes = catalog::list_recipes(&self.db).await?;
        if recipes.is_empty() {
            return self.say("No recipes yet.");
        }
        self.say("")?;
        for (i, recipe) in recipes.iter().enumerate() {
            self.say(&format!("{}. {}", i + 1, recipe.name))?;
        }

        let Some(recipe) = self.pick(&recipes, "Select a recipe number (blank to go back): ")? else {
            return Ok(());
        };
        self.say("")?;
        self.say(&export::render_recipe(recipe))?;

        if self.confirm("Save this recipe to a file?")? {
            let path = export::save_recipe(&self.export_dir, recipe)?;
            self.say(&format!("Saved to {}", path.display()))?;
        }
        Ok(())
    }

    async fn browse_ingredients(&mut self) -> Result<()> {
        let ingredients = catalog::list_ingredients(&self.db).await?;
        if ingredients.is_empty() {
            return self.say("No ingredients listed yet.");
        }
        self.say("")?;
        for (i, ingredient) in ingredients.iter().enumerate() {
            self.say(&format!("{}. {}", i + 1, ingredient.name))?;
        }

        let Some(ingredient) =
            self.pick(&ingredients, "Select an ingredient number (blank to go back): ")?
        else {
            return Ok(());
        };
        self.say(&export::render_location(ingredient))?;

        if self.confirm("Save this location to a file?")? {
            let path = export::save_location(&self.export_dir, ingredient)?;
            self.say(&format!("Saved to {}", path.display()))?;
        }
        Ok(())
    }

    async fn hire_chef(&mut self, session: &Session) -> Result<()> {
        let chefs = hiring::list_chefs(&self.db).await?;
        if chefs.is_empty() {
            return self.say("No chefs available yet.");
        }
        self.say("")?;
        for chef in &chefs {
            self.say(&format!("{}. {}", chef.chef_id, chef.username))?;
            self.say(&format!(
                "   {}",
                chef.portfolio_details.as_deref().unwrap_or("(no portfolio)")
            ))?;
        }

        let Some(input) = self.prompt("Enter a chef ID to hire (blank to go back): ")? else {
            return Ok(());
        };
        if input.is_empty() {
            return Ok(());
        }
        let chef_id: i64 = input
            .parse()
            .map_err(|_| MarketError::InvalidChoice(input.clone()))?;

        let Some(message) = self.prompt("Message for the chef (optional): ")? else {
            return Ok(());
        };
        let message = Some(message.as_str()).filter(|m| !m.is_empty());

        hiring::hire_chef(&self.db, &session.username, chef_id, message).await?;
        self.say(&format!("Hire request sent to chef {}.", chef_id))
    }

    async fn sent_hires(&mut self, session: &Session) -> Result<()> {
        let hires = hiring::list_sent_hires(&self.db, &session.username).await?;
        if hires.is_empty() {
            return self.say("You have not sent any hire requests.");
        }
        self.say("")?;
        for hire in &hires {
            let chef = hire
                .chef_username
                .clone()
                .unwrap_or_else(|| format!("unknown chef #{}", hire.chef_id));
            self.say(&format!(
                "#{} to {} on {} [{}]",
                hire.hire_id,
                chef,
                hire.hire_date,
                hire.status()
            ))?;
        }
        Ok(())
    }

    async fn create_recipe(&mut self, session: &Session) -> Result<()> {
        let Some(name) = self.prompt("Recipe name: ")? else {
            return Ok(());
        };
        let Some(ingredients) = self.prompt("Ingredients: ")? else {
            return Ok(());
        };
        let Some(instructions) = self.prompt("Instructions: ")? else {
            return Ok(());
        };

        let recipe = NewRecipe {
            name,
            ingredients,
            instructions,
        };
        catalog::create_recipe(&self.db, &session.username, recipe).await?;
        self.say("Recipe created.")
    }

    async fn my_recipes(&mut self, session: &Session) -> Result<()> {
        let recipes = catalog::list_recipes_by_chef(&self.db, &session.username).await?;
        if recipes.is_empty() {
            return self.say("You have not published any recipes yet.");
        }
        self.say("")?;
        for (i, recipe) in recipes.iter().enumerate() {
            self.say(&format!("{}. {}", i + 1, recipe.name))?;
        }
        Ok(())
    }

    async fn view_portfolio(&mut self, session: &Session) -> Result<()> {
        let details = hiring::view_portfolio(&self.db, &session.username).await?;
        self.say("Portfolio:")?;
        self.say(&details)
    }

    async fn edit_portfolio(&mut self, session: &Session) -> Result<()> {
        let Some(details) = self.prompt("New portfolio details: ")? else {
            return Ok(());
        };
        hiring::update_portfolio(&self.db, &session.username, &details).await?;
        self.say("Portfolio updated.")
    }

    async fn notifications(&mut self, session: &Session) -> Result<()> {
        let notifications = hiring::list_hire_notifications(&self.db, &session.username).await?;
        if notifications.is_empty() {
            return self.say("No hire requests yet.");
        }
        self.say("")?;
        for n in &notifications {
            self.say(&format!(
                "#{} from {} on {} [{}]",
                n.hire_id,
                n.consumer_username,
                n.hire_date,
                n.status()
            ))?;
            if let Some(message) = &n.message {
                self.say(&format!("   \"{}\"", message))?;
            }
        }

        let Some(input) = self.prompt("Enter a request ID to respond to (blank to go back): ")?
        else {
            return Ok(());
        };
        if input.is_empty() {
            return Ok(());
        }
        let hire_id: i64 = input
            .parse()
            .map_err(|_| MarketError::InvalidChoice(input.clone()))?;

        let Some(choice) = self.menu("Respond", &["Accept", "Decline"])? else {
            return Ok(());
        };
        let response = match choice.as_str() {
            "1" => HireResponse::Accept,
            "2" => HireResponse::Decline,
            other => return Err(MarketError::InvalidChoice(other.to_string())),
        };

        let status = hiring::respond_to_hire(&self.db, &session.username, hire_id, response).await?;
        self.say(&format!("Request marked {}.", status))
    }
}
