// ABOUTME: Demonstration client that walks a running recipe service through every operation
// ABOUTME: Lists, scales, edits and favorites recipes, printing each response as pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Usage:
//! ```bash
//! recipe-service &
//! recipe-client --base-url http://127.0.0.1:5001
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use recipe_service::{
    client::RecipeClient,
    constants::defaults,
    models::{Ingredient, RecipeUpdate},
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "recipe-client")]
#[command(about = "Walk a running recipe service through list, scale, edit and favorite")]
struct Args {
    /// Base URL of the recipe service
    #[arg(long, default_value = defaults::CLIENT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = RecipeClient::new(args.base_url);

    section("All recipes");
    print_json(&client.list_recipes(false).await?)?;

    section("Scale Scrambled Eggs from 2 to 5 servings");
    let scaled = client
        .scale_recipe(
            2.0,
            5.0,
            vec![
                Ingredient::count("Eggs", 4.0),
                Ingredient::new("Milk", 2.0, "tbsp"),
            ],
        )
        .await?;
    print_json(&scaled)?;

    section("Edit recipe 1");
    let update = RecipeUpdate::new()
        .with_name("Deluxe Scrambled Eggs")
        .with_servings(3.0)
        .with_ingredients(vec![
            Ingredient::count("Large Eggs", 6.0),
            Ingredient::new("Heavy Cream", 3.0, "tbsp"),
            Ingredient::new("Salt", 0.5, "tsp"),
            Ingredient::new("Chives", 1.0, "tbsp"),
        ]);
    print_json(&client.edit_recipe("1", update).await?)?;

    section("Recipe 1 after edit");
    print_json(&client.get_recipe("1").await?)?;

    section("Mark recipe 1 as favorite");
    print_json(&client.favorite_recipe("1", true).await?)?;

    section("Favorite recipes");
    print_json(&client.list_recipes(true).await?)?;

    Ok(())
}

fn section(title: &str) {
    println!("\n=== {title} ===");
}

fn print_json(value: &impl Serialize) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render response")?;
    println!("{rendered}");
    Ok(())
}
