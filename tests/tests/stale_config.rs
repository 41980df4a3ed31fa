use fieldlink::{
    config::{keys, MemoryConfigStore},
    plan::Status,
    LinkConfig,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use tests::fixtures::{self, CUSTOMERS, ORDERS};

#[tokio::test]
async fn deleted_match_field_yields_empty_plan() {
    let store = fixtures::store();
    let (db, log) = fixtures::db(&store);

    store.alter_schema(|schema| {
        let customers = schema
            .tables
            .iter_mut()
            .find(|table| table.id == CUSTOMERS)
            .unwrap();
        customers.fields.retain(|field| field.id != "fldContact");
    });

    let plan = db.plan(&fixtures::config()).await.unwrap();

    assert!(plan.is_empty());
    assert_eq!(plan.status(), Status::MissingMatchFields);
    // The source side is not read when its fields do not resolve
    assert_eq!(log.select_count(), 1);
}

#[tokio::test]
async fn deleted_destination_table() {
    let store = fixtures::store();
    let (db, log) = fixtures::db(&store);

    store.alter_schema(|schema| {
        schema.tables.retain(|table| table.id != ORDERS);
    });

    let plan = db.link(&fixtures::config()).await.unwrap();

    assert!(plan.is_empty());
    assert_eq!(plan.status(), Status::NoDestinationTable);
    assert!(log.is_empty());
}

#[tokio::test]
async fn join_field_that_no_longer_links() {
    let store = fixtures::store();
    let (db, _log) = fixtures::db(&store);

    store.alter_schema(|schema| {
        schema.tables.retain(|table| table.id != CUSTOMERS);
    });

    let plan = db.plan(&fixtures::config()).await.unwrap();
    assert!(plan.is_empty());
    assert_eq!(plan.status(), Status::NoSourceTable);
    assert_eq!(
        plan.status().to_string(),
        "Pick a linked record field to enable match options"
    );
}

#[tokio::test]
async fn config_read_from_the_host_store() {
    let store = fixtures::store();
    let (db, _log) = fixtures::db(&store);

    let mut settings = MemoryConfigStore::new();
    settings.set(keys::DEST_TABLE_ID, json!(ORDERS));
    settings.set(keys::DEST_FIELD_IDS, json!("fldEmail"));
    settings.set(keys::JOIN_FIELD_ID, json!("fldCustomer"));
    settings.set(keys::SOURCE_FIELD_IDS, json!(["fldContact", null]));
    settings.set(keys::CASE_SENSITIVE, json!(null));

    let config = LinkConfig::from_store(&settings).unwrap();
    assert_eq!(config, fixtures::config());

    let plan = db.plan(&config).await.unwrap();
    assert_eq!(plan.len(), 2);
}

#[tokio::test]
async fn unconfigured() {
    let store = fixtures::store();
    let (db, log) = fixtures::db(&store);

    let plan = db.plan(&LinkConfig::new()).await.unwrap();

    assert_eq!(plan.status(), Status::NoDestinationTable);
    assert_eq!(
        plan.summary(),
        "Pick a table, linked record field, and matching fields to update linked records \
         based on matching field values"
    );
    assert!(log.is_empty());
}
