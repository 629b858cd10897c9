use std::path::Path;

pub const SESSION_HEADER: [&str; 10] = [
    "action",
    "item",
    "quantity",
    "additions",
    "removals",
    "notes",
    "order",
    "method",
    "tendered",
    "wait_ms",
];

/// Writes the standard four-item fixture catalog.
pub fn write_menu_csv(path: &Path) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;

    wtr.write_record([
        "id",
        "name",
        "description",
        "price",
        "category",
        "available",
    ])?;
    wtr.write_record([
        "1",
        "Picanha Grelhada",
        "Com farofa e vinagrete",
        "20.00",
        "Pratos Principais",
        "true",
    ])?;
    wtr.write_record([
        "2",
        "Moqueca de Peixe",
        "Com arroz e pirao",
        "50.00",
        "Pratos Principais",
        "true",
    ])?;
    wtr.write_record(["3", "Caipirinha", "Limao e cachaca", "12.00", "Bebidas", "true"])?;
    wtr.write_record([
        "4",
        "Pudim de Leite",
        "Calda de caramelo",
        "14.00",
        "Sobremesas",
        "false",
    ])?;

    wtr.flush()?;
    Ok(())
}

/// Writes a session script; each row must carry all ten columns.
pub fn write_session_csv(path: &Path, rows: &[[&str; 10]]) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(SESSION_HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Shorthand for an `add` row with just item and quantity.
pub fn add_row<'a>(item: &'a str, quantity: &'a str) -> [&'a str; 10] {
    [
        "add", item, quantity, "", "", "", "", "", "", "",
    ]
}

pub fn checkout_row() -> [&'static str; 10] {
    ["checkout", "", "", "", "", "", "", "", "", ""]
}

pub fn cancel_row(order: &str) -> [&str; 10] {
    ["cancel", "", "", "", "", "", order, "", "", ""]
}

pub fn wait_row(wait_ms: &str) -> [&str; 10] {
    ["wait", "", "", "", "", "", "", "", "", wait_ms]
}
