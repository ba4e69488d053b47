use food_diary::clients::StoreError;
use food_diary::food_service::{ErrorKind, FoodError, FoodService};
use food_diary::mock::{MockFoodStore, MockPersonLookup};
use food_diary::model::{Day, FoodEntry, FoodId, MealType, Person, PersonId};

/// Orchestration tests: real `FoodService`, mocked person lookup and food store.
struct Fixture {
    people: MockPersonLookup,
    foods: MockFoodStore,
    service: FoodService<MockPersonLookup, MockFoodStore>,
}

fn fixture() -> Fixture {
    let people = MockPersonLookup::new();
    let foods = MockFoodStore::new();
    let service = FoodService::new(people.clone(), foods.clone());
    Fixture {
        people,
        foods,
        service,
    }
}

fn marcy() -> Person {
    Person::new(PersonId(1), "marcy", 23, 157.0, 47.0, 2000)
}

fn food(
    person_id: Option<u32>,
    name: Option<&str>,
    calories: Option<i32>,
    week: Option<i32>,
) -> FoodEntry {
    FoodEntry::new(
        Some(FoodId(1)),
        person_id.map(PersonId),
        name,
        Some(MealType::Breakfast),
        Some("random"),
        calories,
        week,
        Some(Day::Monday),
    )
}

fn toast() -> FoodEntry {
    food(Some(1), Some("toast"), Some(50), Some(1))
}

async fn assert_rejected_before_store(entry: FoodEntry, message: &str) {
    let f = fixture();

    let err = f.service.add_food_entry(entry).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert!(
        err.to_string().contains(message),
        "expected {message:?} in {err}"
    );
    assert_eq!(f.foods.store_calls(), 0);
    assert_eq!(f.people.lookup_calls(), 0);
}

#[tokio::test]
async fn test_add_food_entry() {
    let f = fixture();
    f.people.expect_lookup(PersonId(1)).return_ok(Some(marcy()));
    f.foods.expect_store().return_ok(FoodId(1));

    let actual = f.service.add_food_entry(toast()).await;

    assert_eq!(actual, Ok(FoodId(1)));
    f.people.verify();
    f.foods.verify();
}

#[tokio::test]
async fn test_store_receives_the_submitted_entry() {
    let f = fixture();
    f.people.expect_lookup(PersonId(1)).return_ok(Some(marcy()));
    f.foods.expect_store().return_ok(FoodId(1));

    let entry = toast();
    f.service.add_food_entry(entry.clone()).await.unwrap();

    assert_eq!(f.foods.stored_entries(), vec![entry]);
}

#[tokio::test]
async fn test_returns_store_id_verbatim() {
    let f = fixture();
    f.people.expect_lookup(PersonId(1)).return_ok(Some(marcy()));
    f.foods.expect_store().return_ok(FoodId(0));

    // A zero ID is a legitimate ID, not a failure signal.
    assert_eq!(f.service.add_food_entry(toast()).await, Ok(FoodId(0)));
}

#[tokio::test]
async fn test_store_failure_is_persistence_failure() {
    let f = fixture();
    f.people.expect_lookup(PersonId(1)).return_ok(Some(marcy()));
    f.foods
        .expect_store()
        .return_err(StoreError::Rejected("insert affected 0 rows".to_string()));

    let err = f.service.add_food_entry(toast()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::PersistenceFailure);
    assert!(err.to_string().contains("Could not add food..."));
    assert_eq!(f.foods.store_calls(), 1);
    f.foods.verify();
}

#[tokio::test]
async fn test_unreachable_store_is_persistence_failure() {
    let f = fixture();
    f.people.expect_lookup(PersonId(1)).return_ok(Some(marcy()));
    f.foods
        .expect_store()
        .return_err(StoreError::Unavailable("Actor closed".to_string()));

    let err = f.service.add_food_entry(toast()).await.unwrap_err();

    assert!(matches!(err, FoodError::PersistenceFailure(_)));
}

#[tokio::test]
async fn test_should_not_add_when_person_id_is_null() {
    let f = fixture();

    let err = f
        .service
        .add_food_entry(food(None, Some("toast"), Some(50), Some(1)))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingReference);
    assert!(err.to_string().contains("person id is invalid"));
    assert_eq!(f.people.lookup_calls(), 0);
    assert_eq!(f.foods.store_calls(), 0);
}

#[tokio::test]
async fn test_should_not_add_when_person_does_not_exist() {
    let f = fixture();
    f.people.expect_lookup(PersonId(1)).return_ok(None);

    let err = f.service.add_food_entry(toast()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingReference);
    assert!(err.to_string().contains("person not found"));
    assert!(err.to_string().contains("(id 1)"));
    assert_eq!(f.people.lookups(), vec![PersonId(1)]);
    assert_eq!(f.foods.store_calls(), 0);
    f.people.verify();
}

#[tokio::test]
async fn test_lookup_failure_stops_before_store() {
    let f = fixture();
    f.people
        .expect_lookup(PersonId(1))
        .return_err(StoreError::Unavailable("Actor closed".to_string()));

    let err = f.service.add_food_entry(toast()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unavailable);
    assert_eq!(f.foods.store_calls(), 0);
}

#[tokio::test]
async fn test_should_not_add_when_name_is_null() {
    assert_rejected_before_store(
        food(Some(1), None, Some(50), Some(1)),
        "name cannot be null",
    )
    .await;
}

#[tokio::test]
async fn test_should_not_add_when_calories_is_null() {
    assert_rejected_before_store(
        food(Some(1), Some("mark"), None, Some(1)),
        "calories cannot be null",
    )
    .await;
}

#[tokio::test]
async fn test_should_not_add_when_calories_is_negative() {
    assert_rejected_before_store(
        food(Some(1), Some("mark"), Some(-1), Some(1)),
        "calories cannot be negative",
    )
    .await;
}

#[tokio::test]
async fn test_should_not_add_when_week_is_null() {
    assert_rejected_before_store(
        food(Some(1), Some("mark"), Some(100), None),
        "week cannot be null",
    )
    .await;
}

#[tokio::test]
async fn test_should_not_add_when_week_is_negative() {
    assert_rejected_before_store(
        food(Some(1), Some("mark"), Some(100), Some(-1)),
        "invalid week",
    )
    .await;
}

#[tokio::test]
async fn test_should_not_add_when_week_is_zero() {
    assert_rejected_before_store(
        food(Some(1), Some("mark"), Some(100), Some(0)),
        "invalid week",
    )
    .await;
}

#[tokio::test]
async fn test_should_get_all_food() {
    let f = fixture();
    // Listing does no validation, so week 0 entries come back untouched.
    let expected = vec![
        FoodEntry {
            id: Some(FoodId(1)),
            ..food(Some(1), Some("mark"), Some(100), Some(0))
        },
        FoodEntry {
            id: Some(FoodId(2)),
            ..food(Some(1), Some("hi"), Some(100), Some(0))
        },
    ];
    f.foods.expect_list().return_ok(expected.clone());

    let actual = f.service.get_all_food_entries().await.unwrap();

    assert_eq!(actual, expected);
    assert_eq!(f.foods.list_calls(), 1);
    assert_eq!(f.people.lookup_calls(), 0);
}

#[tokio::test]
async fn test_get_all_food_when_store_unreachable() {
    let f = fixture();
    f.foods
        .expect_list()
        .return_err(StoreError::Unavailable("Actor closed".to_string()));

    let err = f.service.get_all_food_entries().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unavailable);
}
