use fieldlink::{
    plan::Status,
    schema::TableId,
    stmt::{RecordId, RecordLink, Value},
};
use pretty_assertions::assert_eq;
use tests::fixtures::{self, CUSTOMERS, ORDERS};

fn customer_of(store: &fieldlink::memory::Memory, order: &str) -> Value {
    store
        .record(&TableId::from(ORDERS), &RecordId::from(order))
        .unwrap()
        .cell_value(&"fldCustomer".into())
        .clone()
}

#[tokio::test]
async fn links_orders_to_customers_by_email() {
    let store = fixtures::store();
    let (db, log) = fixtures::db(&store);

    let plan = db.link(&fixtures::config()).await.unwrap();

    assert_eq!(plan.len(), 2);
    assert_eq!(log.len(), 3);
    assert_eq!(log.select_count(), 2);
    assert_eq!(log.update_sizes(), [2]);

    assert_eq!(
        customer_of(&store, "recO1"),
        Value::Links(vec![RecordLink::new("recAda", "Ada")])
    );
    // Emails match regardless of case by default
    assert_eq!(
        customer_of(&store, "recO2"),
        Value::Links(vec![RecordLink::new("recBob", "Bob")])
    );
    assert!(customer_of(&store, "recO3").is_null());
    assert!(customer_of(&store, "recO4").is_null());
}

#[tokio::test]
async fn planning_reads_but_never_writes() {
    let store = fixtures::store();
    let (db, log) = fixtures::db(&store);

    let plan = db.plan(&fixtures::config()).await.unwrap();

    assert_eq!(plan.status(), Status::Ready);
    assert!(plan.can_update());
    assert_eq!(
        plan.summary(),
        "The Customer field of 2 records in the Orders table will be updated"
    );
    assert_eq!(plan.confirmation(), "This will update 2 records");
    assert_eq!(log.select_count(), 2);
    assert!(log.updates().is_empty());
    assert!(customer_of(&store, "recO1").is_null());
}

#[tokio::test]
async fn planning_twice_gives_the_same_plan() {
    let store = fixtures::store();
    let (db, _log) = fixtures::db(&store);
    let config = fixtures::config();

    let first = db.plan(&config).await.unwrap();
    let second = db.plan(&config).await.unwrap();

    assert_eq!(first.links(), second.links());
    assert_eq!(first.updates(), second.updates());
}

#[tokio::test]
async fn case_sensitive_matching() {
    let store = fixtures::store();
    let (db, _log) = fixtures::db(&store);

    let config = fixtures::config().case_sensitive(true);
    let plan = db.plan(&config).await.unwrap();

    let linked: Vec<_> = plan.links().iter().map(|link| &link.record.name).collect();
    assert_eq!(linked, ["1001"]);
}

#[tokio::test]
async fn any_field_or_all_fields() {
    let store = fixtures::store();
    let (db, _log) = fixtures::db(&store);

    let config = fixtures::config()
        .dest_fields(["fldEmail", "fldCompany"])
        .source_fields(["fldContact", "fldCompany2"]);

    // Order 1004 has no email but its company matches Initech
    let any = db.plan(&config).await.unwrap();
    let matched: Vec<_> = any
        .links()
        .iter()
        .map(|link| (link.record.name.as_str(), link.matched.name.as_str()))
        .collect();
    assert_eq!(matched, [("1001", "Ada"), ("1002", "Bob"), ("1004", "Cy")]);

    let all = db.plan(&config.match_all_keys(true)).await.unwrap();
    let matched: Vec<_> = all
        .links()
        .iter()
        .map(|link| (link.record.name.as_str(), link.matched.name.as_str()))
        .collect();
    assert_eq!(matched, [("1001", "Ada"), ("1002", "Bob")]);
}

#[tokio::test]
async fn existing_links_are_kept_unless_overwriting() {
    let store = fixtures::store();
    store.insert(
        ORDERS,
        fieldlink::stmt::Record::new("recO1", "")
            .cell("fldOrderNo", "1001")
            .cell("fldEmail", "ada@acme.com")
            .cell("fldCustomer", vec![RecordLink::new("recCy", "Cy")]),
    );
    let (db, _log) = fixtures::db(&store);

    let plan = db.link(&fixtures::config()).await.unwrap();
    assert_eq!(plan.len(), 1);
    assert_eq!(
        customer_of(&store, "recO1"),
        Value::Links(vec![RecordLink::new("recCy", "Cy")])
    );

    let config = fixtures::config().overwrite_existing(true);
    let plan = db.plan(&config).await.unwrap();
    let preview = plan.preview();
    let row = preview.iter().find(|row| row.name == "1001").unwrap();
    assert_eq!(row.added, &RecordLink::new("recAda", "Ada"));
    assert_eq!(
        row.removed,
        Some(&Value::Links(vec![RecordLink::new("recCy", "Cy")]))
    );

    db.apply(&plan).await.unwrap();
    assert_eq!(
        customer_of(&store, "recO1"),
        Value::Links(vec![RecordLink::new("recAda", "Ada")])
    );
}

#[tokio::test]
async fn newest_customer_wins_a_shared_email() {
    let store = fixtures::store();
    store.insert(
        CUSTOMERS,
        fieldlink::stmt::Record::new("recAda2", "")
            .cell("fldName", "Ada (new account)")
            .cell("fldContact", "ada@acme.com"),
    );
    let (db, _log) = fixtures::db(&store);

    // In table order the later record holds the key
    let plan = db.plan(&fixtures::config()).await.unwrap();
    assert_eq!(plan.links()[0].matched.id, "recAda2");

    // The view lists the new account first, so the old one wins
    let newest = ["recAda2", "recCy", "recBob", "recAda"];
    store.set_view_order(CUSTOMERS, "viwNewest", newest);
    let config = fixtures::config().source_view("viwNewest");
    let plan = db.plan(&config).await.unwrap();
    assert_eq!(plan.links()[0].matched.id, "recAda");
}

#[tokio::test]
async fn destination_view_limits_candidates() {
    let store = fixtures::store();
    store.set_view_order(ORDERS, "viwOpen", ["recO2"]);
    let (db, log) = fixtures::db(&store);

    let config = fixtures::config().dest_view("viwOpen");
    let plan = db.link(&config).await.unwrap();

    assert_eq!(plan.len(), 1);
    assert_eq!(log.update_sizes(), [1]);
    assert!(customer_of(&store, "recO1").is_null());
}
