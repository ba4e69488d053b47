use food_diary::clients::PersonLookup;
use food_diary::config::Config;
use food_diary::food_service::ErrorKind;
use food_diary::lifecycle::FoodSystem;
use food_diary::model::{Day, FoodEntry, FoodId, MealType, PersonCreate, PersonId};

fn marcy() -> PersonCreate {
    PersonCreate {
        name: "Marcy".to_string(),
        age: 23,
        height: 157.0,
        weight: 47.0,
        daily_calorie_target: 2000,
    }
}

fn meal(person_id: PersonId, name: &str, calories: i32, week: i32) -> FoodEntry {
    FoodEntry::new(
        None,
        Some(person_id),
        Some(name),
        Some(MealType::Lunch),
        Some("logged in test"),
        Some(calories),
        Some(week),
        Some(Day::Friday),
    )
}

/// Full end-to-end test with both real stores.
#[tokio::test]
async fn test_full_food_system_integration() {
    let system = FoodSystem::new(&Config::default());

    let person_id = system
        .person_client
        .add_person(marcy())
        .await
        .expect("Failed to add person");
    let person = system
        .person_client
        .lookup_person(person_id)
        .await
        .expect("Failed to look up person")
        .expect("Person not found");
    assert_eq!(person.name, "Marcy");

    let first = system
        .service
        .add_food_entry(meal(person_id, "toast", 50, 1))
        .await
        .expect("Failed to add toast");
    let second = system
        .service
        .add_food_entry(meal(person_id, "soup", 320, 2))
        .await
        .expect("Failed to add soup");
    assert_eq!(first, FoodId(1));
    assert_eq!(second, FoodId(2));

    // The store stamps its ID into the stored copy.
    let stored = system
        .food_client
        .get_food(second)
        .await
        .expect("Failed to get food")
        .expect("Food not found");
    assert_eq!(stored.id, Some(second));
    assert_eq!(stored.name.as_deref(), Some("soup"));

    let names: Vec<String> = system
        .service
        .get_all_food_entries()
        .await
        .expect("Failed to list food")
        .into_iter()
        .filter_map(|entry| entry.name)
        .collect();
    assert_eq!(names, vec!["toast", "soup"]);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_rejections_leave_store_untouched() {
    let system = FoodSystem::new(&Config::default());
    let person_id = system.person_client.add_person(marcy()).await.unwrap();

    let err = system
        .service
        .add_food_entry(meal(person_id, "toast", 50, 0))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert!(err.to_string().contains("invalid week"));

    let err = system
        .service
        .add_food_entry(meal(PersonId(99), "toast", 50, 1))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingReference);
    assert!(err.to_string().contains("person not found"));

    let entries = system.service.get_all_food_entries().await.unwrap();
    assert!(entries.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_full_store_reports_persistence_failure() {
    let config = Config {
        store_capacity: Some(1),
        ..Config::default()
    };
    let system = FoodSystem::new(&config);
    let person_id = system.person_client.add_person(marcy()).await.unwrap();

    system
        .service
        .add_food_entry(meal(person_id, "toast", 50, 1))
        .await
        .unwrap();
    let err = system
        .service
        .add_food_entry(meal(person_id, "soup", 320, 1))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::PersistenceFailure);
    assert!(err.to_string().contains("Could not add food..."));
    assert_eq!(system.service.get_all_food_entries().await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}

/// Concurrent submissions through cloned services all land in the one store.
#[tokio::test]
async fn test_concurrent_food_entries() {
    let system = FoodSystem::new(&Config::default());
    let person_id = system.person_client.add_person(marcy()).await.unwrap();

    let mut handles = vec![];
    for week in 1..=10 {
        let service = system.service.clone();
        handles.push(tokio::spawn(async move {
            service
                .add_food_entry(meal(person_id, "oats", 150, week))
                .await
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await.unwrap().expect("Entry should be stored"));
    }
    ids.sort();
    assert_eq!(ids, (1..=10).map(FoodId).collect::<Vec<_>>());

    let entries = system.service.get_all_food_entries().await.unwrap();
    assert_eq!(entries.len(), 10);

    system.shutdown().await.unwrap();
}

#[test]
fn test_entry_serializes_with_upper_case_enums() {
    let entry = meal(PersonId(1), "toast", 50, 1);
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["meal_type"], "LUNCH");
    assert_eq!(json["day"], "FRIDAY");
    assert_eq!(json["person_id"], 1);

    let back: FoodEntry = serde_json::from_value(json).unwrap();
    assert_eq!(back, entry);
}
