use std::fmt::Display;
use crate::core::vehicle::Vehicle;

const COLUMN_PADDING: usize = 4;
const STATUS_HEADER: [&str; 3] = ["Slot No.", "Registration No", "Colour"];

pub(crate) fn join<T: Display>(items: &[T], separator: &str) -> String {
    items.iter()
        .map(|item| item.to_string())
        .collect::<Vec<String>>()
        .join(separator)
}

// Every column but the last is padded to its widest cell plus COLUMN_PADDING.
pub(crate) fn tabulate(rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = vec![];
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if idx == widths.len() {
                widths.push(0);
            }
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }
    rows.iter()
        .map(|row| {
            let mut line = String::new();
            for (idx, cell) in row.iter().enumerate() {
                if idx + 1 == row.len() {
                    line.push_str(cell);
                } else {
                    line.push_str(&format!("{:<width$}", cell, width = widths[idx] + COLUMN_PADDING));
                }
            }
            line
        })
        .collect()
}

pub(crate) fn status_table(vehicles: &[Vehicle]) -> Vec<String> {
    let mut rows = vec![STATUS_HEADER.iter().map(|h| h.to_string()).collect::<Vec<String>>()];
    for vehicle in vehicles {
        rows.push(vec![
            vehicle.get_slot().to_string(),
            vehicle.get_registration().to_string(),
            vehicle.get_colour().to_string(),
        ]);
    }
    tabulate(&rows)
}
