//! A small orders base: orders link to the customer who placed them.

use crate::{ExecLog, LoggingDriver};
use fieldlink::{
    memory::Memory,
    schema::{Field, FieldType, Schema, Table, View},
    stmt::Record,
    Db, LinkConfig,
};
use std::sync::Arc;

pub const ORDERS: &str = "tblOrders";
pub const CUSTOMERS: &str = "tblCustomers";

pub fn schema() -> Schema {
    Schema::new()
        .table(
            Table::new(ORDERS, "Orders")
                .field(Field::new("fldOrderNo", "Order No", FieldType::Text))
                .field(Field::new("fldEmail", "Email", FieldType::Email))
                .field(Field::new("fldCompany", "Company", FieldType::Text))
                .field(Field::new(
                    "fldCustomer",
                    "Customer",
                    FieldType::linked_record(CUSTOMERS),
                ))
                .view(View::new("viwOpen", "Open orders")),
        )
        .table(
            Table::new(CUSTOMERS, "Customers")
                .field(Field::new("fldName", "Name", FieldType::Text))
                .field(Field::new("fldContact", "Contact", FieldType::Email))
                .field(Field::new("fldCompany2", "Company", FieldType::Text))
                .view(View::new("viwNewest", "Newest first")),
        )
}

/// Three customers and four orders, one of which matches nobody.
pub fn store() -> Arc<Memory> {
    let store = Memory::new(schema());

    for (id, name, contact, company) in [
        ("recAda", "Ada", "ada@acme.com", "Acme"),
        ("recBob", "Bob", "BOB@globex.com", "Globex"),
        ("recCy", "Cy", "cy@initech.com", "Initech"),
    ] {
        store.insert(
            CUSTOMERS,
            Record::new(id, "")
                .cell("fldName", name)
                .cell("fldContact", contact)
                .cell("fldCompany2", company),
        );
    }

    for (id, number, email, company) in [
        ("recO1", "1001", "ada@acme.com", "Acme"),
        ("recO2", "1002", "bob@globex.com", "Globex"),
        ("recO3", "1003", "nobody@example.com", "Hooli"),
        ("recO4", "1004", "", "Initech"),
    ] {
        store.insert(
            ORDERS,
            Record::new(id, "")
                .cell("fldOrderNo", number)
                .cell("fldEmail", email)
                .cell("fldCompany", company),
        );
    }

    Arc::new(store)
}

/// Orders link to customers by email.
pub fn config() -> LinkConfig {
    LinkConfig::new()
        .dest_table(ORDERS)
        .dest_fields(["fldEmail"])
        .join_field("fldCustomer")
        .source_fields(["fldContact"])
}

/// A `Db` over `store` that records every driver call.
pub fn db(store: &Arc<Memory>) -> (Db, ExecLog) {
    setup(LoggingDriver::new(store.clone()))
}

pub fn setup(driver: LoggingDriver) -> (Db, ExecLog) {
    crate::init_tracing();

    let log = ExecLog::new(driver.ops_log_handle());
    (Db::new(driver), log)
}
