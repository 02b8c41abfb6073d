use anyhow::Result;
use sea_orm::{EntityTrait, PaginatorTrait};

use super::setup_test_db;
use crate::{bus_location, errors::ModelError};

#[tokio::test]
async fn test_upsert_then_find_round_trip() -> Result<()> {
    let db = setup_test_db().await?;

    bus_location::upsert(&db, "bus1", 12.97, 77.59).await?;
    let found = bus_location::find(&db, "bus1").await?.expect("bus1 stored");

    assert_eq!(found.bus_id, "bus1");
    assert_eq!(found.latitude, 12.97);
    assert_eq!(found.longitude, 77.59);
    Ok(())
}

#[tokio::test]
async fn test_upsert_overwrites_in_place() -> Result<()> {
    let db = setup_test_db().await?;

    bus_location::upsert(&db, "bus1", 1.0, 2.0).await?;
    let first = bus_location::find(&db, "bus1").await?.expect("first write");
    bus_location::upsert(&db, "bus1", 3.5, -4.25).await?;
    let second = bus_location::find(&db, "bus1").await?.expect("second write");

    assert_eq!((second.latitude, second.longitude), (3.5, -4.25));
    assert!(second.timestamp >= first.timestamp);
    assert_eq!(bus_location::Entity::find().count(&db).await?, 1);
    Ok(())
}

#[tokio::test]
async fn test_find_unknown_is_none() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(bus_location::find(&db, "nonexistent").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_list_empty_and_multiple() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(bus_location::list(&db).await?.is_empty());

    bus_location::upsert(&db, "B", 2.0, 2.0).await?;
    bus_location::upsert(&db, "A", 1.0, 1.0).await?;
    bus_location::upsert(&db, "B", 2.5, 2.5).await?;

    let all = bus_location::list(&db).await?;
    let ids: Vec<&str> = all.iter().map(|m| m.bus_id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B"]);
    assert_eq!(all[1].latitude, 2.5);
    Ok(())
}

#[tokio::test]
async fn test_upsert_rejects_empty_id_and_non_finite() -> Result<()> {
    let db = setup_test_db().await?;

    let err = bus_location::upsert(&db, "", 1.0, 1.0).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    let err = bus_location::upsert(&db, "bus1", f64::NAN, 1.0).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));

    assert!(bus_location::list(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_model_json_shape() -> Result<()> {
    let db = setup_test_db().await?;
    bus_location::upsert(&db, "bus1", 12.97, 77.59).await?;
    let found = bus_location::find(&db, "bus1").await?.expect("bus1 stored");

    let json = serde_json::to_value(&found)?;
    let obj = json.as_object().expect("object");
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["bus_id", "latitude", "longitude", "timestamp"]);
    assert_eq!(json["bus_id"], "bus1");
    assert_eq!(json["latitude"], 12.97);
    assert!(json["timestamp"].as_str().expect("string timestamp").contains('T'));
    Ok(())
}
