//! Builds a few SELECT statements and prints them.
//!
//! Run with: cargo run --example select_demo

use qubic::prelude::*;

fn main() -> Result<(), QubicError> {
    let roles = vec!["user", "project"];

    let report = QueryBuilder::new()
        .select(vec!["id", "ttl"])
        .select("competency")
        .from("training")
        .from(roles.clone())
        .join("user", "user.id = training.id", JoinKind::Left)
        .like("person.name", "Ad", LikePosition::After)
        .where_("user.role =", "project manager", true)
        .where_in("user.id", vec!["4", "3", "11"])
        .where_raw("(hr_contract.end IS NULL OR hr_contract.end >= 54)")
        .group_by("user.id")
        .order_by(roles.clone(), SortOrder::Asc)
        .order_by(roles, SortOrder::Desc)
        .limit("100", 15);

    println!("{}", report);

    // Dynamic input: column lists must be a string or an array of strings
    let request = json!({ "columns": ["id", "email"], "table": "accounts" });
    let accounts = QueryBuilder::new()
        .select(Fragments::try_from(&request["columns"])?)
        .from(Fragments::try_from(&request["table"])?)
        .where_("verified =", true, true);

    println!("{}", accounts.render());

    match Fragments::try_from(&json!(42)) {
        Ok(_) => println!("unexpectedly accepted a number"),
        Err(err) => println!("rejected: {}", err),
    }

    Ok(())
}
