use fieldmap::value::Type;
use fieldmap::{map_fields, Record};

fn main() -> fieldmap::Result<()> {
    let source = Record::new()
        .with("ID", Type::String, "1234")
        .with("Balance", Type::F64, 123.345);

    let mut account = Record::new()
        .with("ID", Type::I64, 0_i64)
        .with("Balance", Type::String, "");

    map_fields(&source, &mut account);

    let id = i64::try_from(account.get("ID").cloned().unwrap_or_default())?;
    let balance = String::try_from(account.get("Balance").cloned().unwrap_or_default())?;

    println!("mapped record: ID={id} Balance={balance:?}");
    println!(
        "{}",
        serde_json::to_string_pretty(&account).expect("record serializes")
    );

    Ok(())
}
