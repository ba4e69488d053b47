//! Demo entry point: registers a person, logs a few meals, and lists them back.

use food_diary::config::Config;
use food_diary::framework::tracing::setup_tracing;
use food_diary::lifecycle::FoodSystem;
use food_diary::model::{Day, FoodEntry, MealType, PersonCreate};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    setup_tracing(&config.log_filter);
    config.log_defaults();

    info!(?config, "Starting food diary");

    let system = FoodSystem::new(&config);

    let person_params = PersonCreate {
        name: "Marcy".to_string(),
        age: 23,
        height: 157.0,
        weight: 47.0,
        daily_calorie_target: 2000,
    };
    let span = tracing::info_span!("person_registration");
    let person_id = async {
        info!("Registering person");
        system.person_client.add_person(person_params).await
    }
    .instrument(span)
    .await?;

    info!(%person_id, "Person registered");

    let meals = [
        ("toast", MealType::Breakfast, 50, 1, Day::Monday),
        ("lentil soup", MealType::Lunch, 320, 1, Day::Monday),
        ("apple", MealType::Snack, 95, 1, Day::Tuesday),
        // Rejected: week numbers start at 1.
        ("pasta", MealType::Dinner, 610, 0, Day::Tuesday),
    ];

    let span = tracing::info_span!("meal_logging");
    async {
        for (name, meal_type, calories, week, day) in meals {
            let entry = FoodEntry::new(
                None,
                Some(person_id),
                Some(name),
                Some(meal_type),
                None,
                Some(calories),
                Some(week),
                Some(day),
            );
            match system.service.add_food_entry(entry).await {
                Ok(food_id) => info!(%food_id, meal = name, "Meal logged"),
                Err(e) => error!(error = %e, meal = name, "Meal rejected"),
            }
        }
    }
    .instrument(span)
    .await;

    let entries = system.service.get_all_food_entries().await?;
    for entry in &entries {
        info!(
            id = ?entry.id,
            name = entry.name.as_deref().unwrap_or_default(),
            calories = ?entry.calories,
            "Stored entry"
        );
    }
    info!(count = entries.len(), "Diary listed");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
