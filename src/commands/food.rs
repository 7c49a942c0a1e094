use clap::{Args, Subcommand};
use foodboard_core::{FoodDraft, FoodEdit, FoodId, FoodStore, FoodSynchronizer, HttpFoodStore};
use std::io::{self, Write};

use super::OutputFormat;
use crate::config::Config;

#[derive(Args)]
pub struct FoodCommand {
    #[command(subcommand)]
    pub command: FoodSubcommand,
}

#[derive(Subcommand)]
pub enum FoodSubcommand {
    /// List all foods
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show a food's details
    Show {
        /// Food ID
        id: FoodId,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Add a new food (created as available)
    Add {
        /// Name of the food
        #[arg(long)]
        name: String,

        /// Description
        #[arg(long, default_value = "")]
        description: String,

        /// Price, e.g. 19.90
        #[arg(long)]
        price: String,

        /// Image URL
        #[arg(long, default_value = "")]
        image: String,
    },

    /// Edit an existing food
    Edit {
        /// Food ID
        id: FoodId,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New price
        #[arg(long)]
        price: Option<String>,

        /// New image URL
        #[arg(long)]
        image: Option<String>,
    },

    /// Delete a food
    Delete {
        /// Food ID
        id: FoodId,

        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Toggle whether a food is available
    Toggle {
        /// Food ID
        id: FoodId,
    },
}

impl FoodCommand {
    pub async fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("foodboard/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let store = HttpFoodStore::with_client(client, config.api_url.value.clone());
        let mut sync = FoodSynchronizer::new(store).with_policy(config.error_policy.value);

        if sync.load().await?.is_none() {
            return Err(format!("Could not load foods from {}", config.api_url.value).into());
        }

        self.execute(&mut sync).await
    }

    async fn execute<S: FoodStore>(
        &self,
        sync: &mut FoodSynchronizer<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            FoodSubcommand::List { format } => {
                let foods = sync.foods();

                if let OutputFormat::Json = format {
                    println!("{}", serde_json::to_string_pretty(foods.as_slice())?);
                    return Ok(());
                }

                if foods.is_empty() {
                    println!("No foods found");
                    return Ok(());
                }

                println!("{:<6}  {:<30}  {:>10}  AVAILABLE", "ID", "NAME", "PRICE");
                println!("{}", "-".repeat(62));
                for food in foods {
                    let name = if food.name.chars().count() > 30 {
                        format!("{}...", food.name.chars().take(27).collect::<String>())
                    } else {
                        food.name.clone()
                    };
                    let available = if food.available { "yes" } else { "no" };
                    println!(
                        "{:<6}  {:<30}  {:>10}  {}",
                        food.id, name, food.price, available
                    );
                }
                println!("\nTotal: {} food(s)", foods.len());
                Ok(())
            }

            FoodSubcommand::Show { id, format } => {
                let food = sync
                    .foods()
                    .get(*id)
                    .ok_or_else(|| format!("Food not found: {}", id))?;

                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(food)?),
                    OutputFormat::Text => println!("{}", food),
                }
                Ok(())
            }

            FoodSubcommand::Add {
                name,
                description,
                price,
                image,
            } => {
                if name.trim().is_empty() {
                    return Err("Food name cannot be empty".into());
                }

                let draft = FoodDraft::new(name.trim(), price.as_str())
                    .with_description(description.as_str())
                    .with_image(image.as_str());

                match sync.create(draft).await? {
                    Some(created) => {
                        tracing::info!("Created food {}", created.id);
                        println!("Created food:");
                        println!("{}", created);
                    }
                    None => println!("Food was not created."),
                }
                Ok(())
            }

            FoodSubcommand::Edit {
                id,
                name,
                description,
                price,
                image,
            } => {
                let edit = FoodEdit {
                    name: name.clone(),
                    description: description.clone(),
                    price: price.clone(),
                    image: image.clone(),
                };

                if edit.is_empty() {
                    return Err("Nothing to update. Provide at least one option.".into());
                }

                match sync.update_by_id(*id, edit).await? {
                    Some(updated) => {
                        tracing::info!("Updated food {}", updated.id);
                        println!("Updated food:");
                        println!("{}", updated);
                    }
                    None => println!("Food {} was not updated.", id),
                }
                Ok(())
            }

            FoodSubcommand::Delete { id, force } => {
                let name = sync
                    .foods()
                    .get(*id)
                    .map(|f| f.name.clone())
                    .ok_or_else(|| format!("Food not found: {}", id))?;

                // Confirm deletion unless --force is used
                if !force {
                    print!("Delete food '{}'? [y/N] ", name);
                    io::stdout().flush()?;

                    let mut input = String::new();
                    io::stdin().read_line(&mut input)?;

                    if !input.trim().eq_ignore_ascii_case("y") {
                        println!("Deletion cancelled.");
                        return Ok(());
                    }
                }

                match sync.delete(*id).await? {
                    Some(_) => {
                        tracing::info!("Deleted food {}", id);
                        println!("Deleted food: {}", name);
                    }
                    None => println!("Food {} was not deleted.", id),
                }
                Ok(())
            }

            FoodSubcommand::Toggle { id } => {
                match sync.toggle_availability(*id).await? {
                    Some(food) => {
                        let state = if food.available {
                            "available"
                        } else {
                            "unavailable"
                        };
                        tracing::info!("Food {} is now {}", food.id, state);
                        println!("{} is now {}", food.name, state);
                    }
                    None => println!("Availability of food {} was not changed.", id),
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodboard_core::{Food, NewFood, StoreError};
    use std::sync::Mutex;

    /// Echoing in-memory store.
    #[derive(Default)]
    struct MemoryStore {
        foods: Mutex<Vec<Food>>,
    }

    impl FoodStore for MemoryStore {
        async fn list(&self) -> Result<Vec<Food>, StoreError> {
            Ok(self.foods.lock().unwrap().clone())
        }

        async fn create(&self, food: &NewFood) -> Result<Food, StoreError> {
            let mut foods = self.foods.lock().unwrap();
            let created = Food {
                id: foods.iter().map(|f| f.id).max().unwrap_or(0) + 1,
                name: food.draft.name.clone(),
                description: food.draft.description.clone(),
                price: food.draft.price.clone(),
                image: food.draft.image.clone(),
                available: food.available,
            };
            foods.push(created.clone());
            Ok(created)
        }

        async fn update(&self, id: FoodId, food: &Food) -> Result<Food, StoreError> {
            let mut foods = self.foods.lock().unwrap();
            for stored in foods.iter_mut().filter(|f| f.id == id) {
                *stored = food.clone();
            }
            Ok(food.clone())
        }

        async fn delete(&self, id: FoodId) -> Result<(), StoreError> {
            self.foods.lock().unwrap().retain(|f| f.id != id);
            Ok(())
        }
    }

    async fn setup() -> FoodSynchronizer<MemoryStore> {
        let store = MemoryStore::default();
        store.foods.lock().unwrap().push(Food {
            id: 1,
            name: "Ao molho".to_string(),
            description: "Macarrão ao molho branco".to_string(),
            price: "19.90".to_string(),
            image: String::new(),
            available: true,
        });
        let mut sync = FoodSynchronizer::new(store);
        sync.load().await.unwrap();
        sync
    }

    fn command(command: FoodSubcommand) -> FoodCommand {
        FoodCommand { command }
    }

    #[tokio::test]
    async fn test_add_appends_food() {
        let mut sync = setup().await;
        let cmd = command(FoodSubcommand::Add {
            name: "  Veggie ".to_string(),
            description: String::new(),
            price: "21.90".to_string(),
            image: String::new(),
        });

        cmd.execute(&mut sync).await.unwrap();
        assert_eq!(sync.foods().ids(), vec![1, 2]);
        assert_eq!(sync.foods().get(2).unwrap().name, "Veggie");
    }

    #[tokio::test]
    async fn test_add_rejects_blank_name() {
        let mut sync = setup().await;
        let cmd = command(FoodSubcommand::Add {
            name: "   ".to_string(),
            description: String::new(),
            price: "1.00".to_string(),
            image: String::new(),
        });

        let err = cmd.execute(&mut sync).await.unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
        assert_eq!(sync.foods().len(), 1);
    }

    #[tokio::test]
    async fn test_edit_requires_a_field() {
        let mut sync = setup().await;
        let cmd = command(FoodSubcommand::Edit {
            id: 1,
            name: None,
            description: None,
            price: None,
            image: None,
        });

        let err = cmd.execute(&mut sync).await.unwrap_err();
        assert!(err.to_string().contains("Nothing to update"));
    }

    #[tokio::test]
    async fn test_edit_merges_fields() {
        let mut sync = setup().await;
        let cmd = command(FoodSubcommand::Edit {
            id: 1,
            name: None,
            description: None,
            price: Some("22.00".to_string()),
            image: None,
        });

        cmd.execute(&mut sync).await.unwrap();
        let food = sync.foods().get(1).unwrap();
        assert_eq!(food.price, "22.00");
        assert_eq!(food.name, "Ao molho");
    }

    #[tokio::test]
    async fn test_show_unknown_id() {
        let mut sync = setup().await;
        let cmd = command(FoodSubcommand::Show {
            id: 42,
            format: OutputFormat::Text,
        });

        let err = cmd.execute(&mut sync).await.unwrap_err();
        assert_eq!(err.to_string(), "Food not found: 42");
    }

    #[tokio::test]
    async fn test_forced_delete() {
        let mut sync = setup().await;
        let cmd = command(FoodSubcommand::Delete { id: 1, force: true });

        cmd.execute(&mut sync).await.unwrap();
        assert!(sync.foods().is_empty());
        assert!(sync.store().foods.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_toggle() {
        let mut sync = setup().await;
        let cmd = command(FoodSubcommand::Toggle { id: 1 });

        cmd.execute(&mut sync).await.unwrap();
        assert!(!sync.foods().get(1).unwrap().available);
    }
}
